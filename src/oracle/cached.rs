use std::collections::HashMap;
use std::sync::Mutex;

use crate::oracle::SimilarityOracle;

type Key = (Vec<String>, Vec<String>);

/// Memoizes another oracle. A pair answered in one direction is reused for the
/// reverse direction, "no signal" answers included.
pub struct CachedOracle<O> {
    inner: O,
    memo: Mutex<HashMap<Key, Option<f64>>>,
}

impl<O: SimilarityOracle> CachedOracle<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            memo: Mutex::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.memo.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<O: SimilarityOracle> SimilarityOracle for CachedOracle<O> {
    fn sentence_similarity(&self, new: &[String], old: &[String]) -> Option<f64> {
        let forward = (new.to_vec(), old.to_vec());
        if let Ok(memo) = self.memo.lock() {
            if let Some(hit) = memo.get(&forward) {
                return *hit;
            }
            let reverse = (old.to_vec(), new.to_vec());
            if let Some(hit) = memo.get(&reverse) {
                return *hit;
            }
        }

        let sim = self.inner.sentence_similarity(new, old);
        if let Ok(mut memo) = self.memo.lock() {
            memo.insert(forward, sim);
        }
        sim
    }
}
