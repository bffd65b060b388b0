use tracing::debug;

use crate::config::MatchOptions;
use crate::matcher::rules::{RuleContext, target_classes};
use crate::matcher::scorer::WeightedScorer;
use crate::oracle::SimilarityOracle;
use crate::state::{StateCache, StateSignature, WidgetSignature};
use crate::trace::{MatchTraceEvent, MatchTraceLogger};
use crate::widget::widget_model::{
    EDIT_TEXT, RankedCandidate, SourceWidget, TEXT_VIEW, WidgetRecord,
};

/// Ranks target widgets against a source widget.
pub struct CandidateMatcher<O> {
    oracle: O,
    options: MatchOptions,
    trace: MatchTraceLogger,
}

impl<O: SimilarityOracle> CandidateMatcher<O> {
    pub fn new(oracle: O, options: MatchOptions) -> Self {
        Self {
            oracle,
            options,
            trace: MatchTraceLogger::disabled(),
        }
    }

    pub fn with_trace(mut self, trace: MatchTraceLogger) -> Self {
        self.trace = trace;
        self
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    pub fn scorer(&self) -> WeightedScorer<'_> {
        WeightedScorer::new(&self.oracle, &self.options)
    }

    /// Candidate classes for `source` under the current options.
    pub fn target_classes(&self, source: &SourceWidget) -> Vec<String> {
        let ctx = RuleContext::of(source, self.options.expand_button_to_text);
        target_classes(&source.record.class, &ctx)
    }

    /// Comparable candidates from `widgets`, best first. Equal scores keep
    /// their input order.
    pub fn rank(&self, source: &SourceWidget, widgets: &[WidgetRecord]) -> Vec<RankedCandidate> {
        self.rank_in_state(None, source, widgets)
    }

    /// Best candidate for `source` on the state `state`, reusing and filling
    /// the state's most-similar cache.
    pub fn best_match(
        &self,
        cache: &mut StateCache,
        state: &StateSignature,
        source: &SourceWidget,
        widgets: &[WidgetRecord],
    ) -> Option<RankedCandidate> {
        let signature = WidgetSignature::of(&source.record);
        if let Some((widget, score)) = cache.most_similar(state, &signature) {
            let hit = RankedCandidate {
                widget: widget.clone(),
                score: *score,
            };
            self.trace
                .log(&MatchTraceEvent::now(&signature).with_state(state).from_cache(&hit));
            return Some(hit);
        }

        let best = self.rank_in_state(Some(state), source, widgets).into_iter().next()?;
        cache.store_most_similar(state, signature, (best.widget.clone(), best.score));
        Some(best)
    }

    fn rank_in_state(
        &self,
        state: Option<&StateSignature>,
        source: &SourceWidget,
        widgets: &[WidgetRecord],
    ) -> Vec<RankedCandidate> {
        let classes = self.target_classes(source);
        let scorer = self.scorer();

        let mut considered = 0;
        let mut ranked: Vec<RankedCandidate> = Vec::new();
        for w in widgets.iter().filter(|w| classes.contains(&w.class)) {
            if !passes_filters(source, w) {
                continue;
            }
            considered += 1;
            match scorer.score(w, &source.record) {
                Some(score) => ranked.push(RankedCandidate {
                    widget: w.clone(),
                    score,
                }),
                None => debug!(candidate = %WidgetSignature::of(w), "incomparable candidate skipped"),
            }
        }
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        if self.trace.is_enabled() {
            let mut event = MatchTraceEvent::now(&WidgetSignature::of(&source.record))
                .with_target_classes(&classes)
                .with_ranking(considered, &ranked);
            if let Some(state) = state {
                event = event.with_state(state);
            }
            self.trace.log(&event);
        }
        ranked
    }
}

/// Password and clickability constraints a candidate must satisfy before it
/// is scored. Attributes the candidate does not declare are not checked.
pub fn passes_filters(source: &SourceWidget, candidate: &WidgetRecord) -> bool {
    if !candidate.password.is_empty() && candidate.password != source.record.password {
        return false;
    }
    if candidate.clickable.is_empty() || candidate.clickable == source.record.clickable {
        return true;
    }

    let class = candidate.class.as_str();
    (source.action_is(|a| a.is_wait()) && (class == EDIT_TEXT || class == TEXT_VIEW))
        || (source.action_is(|a| a.is_swipe()) && class == TEXT_VIEW)
}
