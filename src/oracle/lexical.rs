use std::collections::HashSet;

use crate::oracle::SimilarityOracle;

/// In-process oracle comparing words by spelling only.
///
/// Word similarity is 1.0 for case-insensitive equality, otherwise the
/// normalized Levenshtein similarity when it reaches `word_floor`. Sentence
/// similarity aligns the best word pairs one-to-one and averages them.
#[derive(Debug, Clone)]
pub struct LexicalOracle {
    pub word_floor: f64,
}

impl Default for LexicalOracle {
    fn default() -> Self {
        Self { word_floor: 0.5 }
    }
}

impl LexicalOracle {
    pub fn word_similarity(&self, a: &str, b: &str) -> Option<f64> {
        let a = a.to_lowercase();
        let b = b.to_lowercase();
        if a == b {
            return Some(1.0);
        }
        let sim = strsim::normalized_levenshtein(&a, &b);
        (sim >= self.word_floor).then_some(sim)
    }
}

impl SimilarityOracle for LexicalOracle {
    fn sentence_similarity(&self, new: &[String], old: &[String]) -> Option<f64> {
        let new_words = unique(new);
        let old_words = unique(old);

        let mut pairs: Vec<(usize, usize, f64)> = Vec::new();
        for (i, w1) in new_words.iter().enumerate() {
            for (j, w2) in old_words.iter().enumerate() {
                if let Some(sim) = self.word_similarity(w1, w2) {
                    pairs.push((i, j, sim));
                }
            }
        }
        pairs.sort_by(|a, b| b.2.total_cmp(&a.2));

        let mut used_new = HashSet::new();
        let mut used_old = HashSet::new();
        let mut counted = Vec::new();
        for (i, j, sim) in pairs {
            if used_new.contains(&i) || used_old.contains(&j) {
                continue;
            }
            used_new.insert(i);
            used_old.insert(j);
            counted.push(sim);
            if used_new.len() == new_words.len() || used_old.len() == old_words.len() {
                break;
            }
        }

        if counted.is_empty() {
            None
        } else {
            Some(counted.iter().sum::<f64>() / counted.len() as f64)
        }
    }
}

fn unique(words: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    words
        .iter()
        .map(String::as_str)
        .filter(|w| seen.insert(*w))
        .collect()
}
