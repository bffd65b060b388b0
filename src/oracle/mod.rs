//! Semantic text similarity, consumed by the scorer through [`SimilarityOracle`].
//!
//! The matching engine never depends on a concrete backend. Adapters here
//! cover an in-process lexical comparator, a memoizing wrapper, and the HTTP
//! word-embedding service.

pub mod cached;
pub mod http;
pub mod lexical;
pub mod tokenize;

pub use cached::CachedOracle;
pub use http::HttpOracle;
pub use lexical::LexicalOracle;
pub use tokenize::tokenize;

/// Similarity between two word sequences.
///
/// Returns a score in `[0, 1]`, or `None` when the backend has no signal for
/// the pair (unknown words, empty input, service failure).
pub trait SimilarityOracle {
    fn sentence_similarity(&self, new: &[String], old: &[String]) -> Option<f64>;
}

impl<T: SimilarityOracle + ?Sized> SimilarityOracle for &T {
    fn sentence_similarity(&self, new: &[String], old: &[String]) -> Option<f64> {
        (**self).sentence_similarity(new, old)
    }
}

impl<T: SimilarityOracle + ?Sized> SimilarityOracle for Box<T> {
    fn sentence_similarity(&self, new: &[String], old: &[String]) -> Option<f64> {
        (**self).sentence_similarity(new, old)
    }
}
