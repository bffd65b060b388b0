use std::collections::HashMap;

use crate::state::signature::{StateSignature, WidgetSignature};
use crate::widget::widget_model::WidgetRecord;

/// Widgets of one UI state plus the best matches already computed on it.
#[derive(Debug, Clone, Default)]
pub struct CachedState {
    pub all_widgets: Vec<WidgetRecord>,
    pub most_similar_widgets: HashMap<WidgetSignature, (WidgetRecord, f64)>,
}

/// Per-pipeline cache of collected widgets, keyed by state signature.
///
/// Entries are never evicted. Each migration pipeline owns its own instance;
/// there is no shared or global cache.
#[derive(Debug, Default)]
pub struct StateCache {
    states: HashMap<StateSignature, CachedState>,
}

impl StateCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn contains(&self, state: &StateSignature) -> bool {
        self.states.contains_key(state)
    }

    pub fn all_widgets(&self, state: &StateSignature) -> Option<&[WidgetRecord]> {
        self.states.get(state).map(|s| s.all_widgets.as_slice())
    }

    pub fn most_similar(
        &self,
        state: &StateSignature,
        widget: &WidgetSignature,
    ) -> Option<&(WidgetRecord, f64)> {
        self.states.get(state)?.most_similar_widgets.get(widget)
    }

    /// Replace the widget list of a state, dropping its cached match results.
    pub fn store_widgets(&mut self, state: StateSignature, widgets: Vec<WidgetRecord>) {
        self.states.insert(
            state,
            CachedState {
                all_widgets: widgets,
                most_similar_widgets: HashMap::new(),
            },
        );
    }

    /// Remember a best match. Ignored for states that were never collected.
    pub fn store_most_similar(
        &mut self,
        state: &StateSignature,
        widget: WidgetSignature,
        best: (WidgetRecord, f64),
    ) {
        if let Some(entry) = self.states.get_mut(state) {
            entry.most_similar_widgets.insert(widget, best);
        }
    }
}
