pub mod matcher;
pub mod rules;
pub mod scorer;

pub use matcher::CandidateMatcher;
pub use rules::{RuleContext, target_classes};
pub use scorer::{ScoredAttribute, WeightedScorer};
