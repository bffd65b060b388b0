use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{
    state::signature::{StateSignature, WidgetSignature},
    widget::widget_model::RankedCandidate,
};

/// One ranking pass, as written to the JSONL match trace.
#[derive(Debug, Serialize)]
pub struct MatchTraceEvent {
    pub timestamp_ms: u128,

    pub state_digest: Option<String>,
    pub source_signature: String,

    pub target_classes: Vec<String>,
    pub candidates_considered: usize,
    pub ranked: usize,

    pub top_match: Option<String>,
    pub top_score: Option<f64>,
    pub from_cache: bool,
}

impl MatchTraceEvent {
    pub fn now(source: &WidgetSignature) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            state_digest: None,
            source_signature: source.to_string(),
            target_classes: vec![],
            candidates_considered: 0,
            ranked: 0,
            top_match: None,
            top_score: None,
            from_cache: false,
        }
    }

    pub fn with_state(mut self, state: &StateSignature) -> Self {
        self.state_digest = Some(state.digest());
        self
    }

    pub fn with_target_classes(mut self, classes: &[String]) -> Self {
        self.target_classes = classes.to_vec();
        self
    }

    pub fn with_ranking(mut self, considered: usize, ranked: &[RankedCandidate]) -> Self {
        self.candidates_considered = considered;
        self.ranked = ranked.len();
        if let Some(top) = ranked.first() {
            self.top_match = Some(WidgetSignature::of(&top.widget).to_string());
            self.top_score = Some(top.score);
        }
        self
    }

    pub fn from_cache(mut self, hit: &RankedCandidate) -> Self {
        self.from_cache = true;
        self.ranked = 1;
        self.top_match = Some(WidgetSignature::of(&hit.widget).to_string());
        self.top_score = Some(hit.score);
        self
    }
}
