use serde::Serialize;

use crate::config::{AttributeWeights, MatchOptions};
use crate::oracle::{SimilarityOracle, tokenize};
use crate::widget::widget_model::WidgetRecord;

/// Attributes compared between two widgets, in scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoredAttribute {
    ResourceId,
    Text,
    ContentDesc,
    ParentText,
    SiblingText,
    Filename,
    Neighbors,
}

pub const SCORED_ATTRIBUTES: [ScoredAttribute; 7] = [
    ScoredAttribute::ResourceId,
    ScoredAttribute::Text,
    ScoredAttribute::ContentDesc,
    ScoredAttribute::ParentText,
    ScoredAttribute::SiblingText,
    ScoredAttribute::Filename,
    ScoredAttribute::Neighbors,
];

impl ScoredAttribute {
    /// Word sequence of this attribute; empty when the widget has no value.
    pub fn words(self, w: &WidgetRecord, use_stopwords: bool) -> Vec<String> {
        let value = match self {
            ScoredAttribute::ResourceId => &w.resource_id,
            ScoredAttribute::Text => &w.text,
            ScoredAttribute::ContentDesc => &w.content_desc,
            ScoredAttribute::ParentText => &w.parent_text,
            ScoredAttribute::SiblingText => &w.sibling_text,
            ScoredAttribute::Filename => &w.filename,
            ScoredAttribute::Neighbors => {
                return w
                    .atm_neighbor
                    .iter()
                    .flat_map(|n| tokenize(neighbor_label(n), use_stopwords))
                    .collect();
            }
        };
        tokenize(value, use_stopwords)
    }

    pub fn weight(self, weights: &AttributeWeights) -> f64 {
        match self {
            ScoredAttribute::ResourceId => weights.resource_id,
            ScoredAttribute::Text => weights.text,
            ScoredAttribute::ContentDesc => weights.content_desc,
            ScoredAttribute::ParentText => weights.parent_text,
            ScoredAttribute::SiblingText => weights.sibling_text,
            ScoredAttribute::Filename => weights.filename,
            ScoredAttribute::Neighbors => weights.neighbors,
        }
    }
}

// A neighbor is named by its id, falling back to what the user sees.
fn neighbor_label(n: &WidgetRecord) -> &str {
    [&n.resource_id, &n.text, &n.content_desc]
        .into_iter()
        .find(|v| !v.is_empty())
        .map(String::as_str)
        .unwrap_or("")
}

/// Weighted mean of per-attribute oracle scores.
pub struct WeightedScorer<'a> {
    oracle: &'a dyn SimilarityOracle,
    use_stopwords: bool,
    weights: &'a AttributeWeights,
}

impl<'a> WeightedScorer<'a> {
    pub fn new(oracle: &'a dyn SimilarityOracle, options: &'a MatchOptions) -> Self {
        Self {
            oracle,
            use_stopwords: options.use_stopwords,
            weights: &options.weights,
        }
    }

    /// Oracle score of every attribute both widgets carry. Attributes the
    /// oracle has no finite answer for, or with a non-positive weight, are
    /// left out.
    pub fn breakdown(&self, new: &WidgetRecord, old: &WidgetRecord) -> Vec<(ScoredAttribute, f64)> {
        SCORED_ATTRIBUTES
            .iter()
            .filter(|attr| attr.weight(self.weights) > 0.0)
            .filter_map(|attr| {
                let a = attr.words(new, self.use_stopwords);
                let b = attr.words(old, self.use_stopwords);
                if a.is_empty() || b.is_empty() {
                    return None;
                }
                let sim = self
                    .oracle
                    .sentence_similarity(&a, &b)
                    .filter(|s| s.is_finite())?;
                Some((*attr, sim.clamp(0.0, 1.0)))
            })
            .collect()
    }

    /// Similarity in `[0, 1]`, or `None` when the widgets are incomparable.
    pub fn score(&self, new: &WidgetRecord, old: &WidgetRecord) -> Option<f64> {
        let parts = self.breakdown(new, old);
        let total_weight: f64 = parts.iter().map(|(a, _)| a.weight(self.weights)).sum();
        if parts.is_empty() || total_weight <= 0.0 {
            return None;
        }
        let weighted: f64 = parts.iter().map(|(a, s)| a.weight(self.weights) * s).sum();
        Some(weighted / total_weight)
    }
}
