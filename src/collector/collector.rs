use tracing::{debug, info};

use crate::config::{CollectRules, TextException};
use crate::error::Result;
use crate::state::{Snapshot, StateCache, StateSignature};
use crate::widget::extractor::{extract_widget_with, neighbor_pool};
use crate::widget::widget_model::{WIDGET_CLASSES, WidgetRecord};

/// Builds the widget list of a snapshot and keeps the state cache current.
#[derive(Debug, Clone, Default)]
pub struct WidgetCollector {
    rules: CollectRules,
}

impl WidgetCollector {
    pub fn new(rules: CollectRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &CollectRules {
        &self.rules
    }

    /// Launcher screens, other apps and third-party SDK activities are never
    /// collected.
    pub fn is_excluded(&self, package: &str, activity: &str) -> bool {
        let launcher = self.rules.launcher_package.as_str();
        (!launcher.is_empty() && package.contains(launcher))
            || package != self.rules.package_under_test
            || self
                .rules
                .excluded_activity_prefixes
                .iter()
                .any(|p| activity.starts_with(p.as_str()))
    }

    /// Parse a raw dump and collect it. Excluded package/activity pairs return
    /// an empty list without parsing.
    pub fn collect_dom(
        &self,
        cache: &mut StateCache,
        dom: &str,
        package: &str,
        activity: &str,
        update_cache: bool,
    ) -> Result<Vec<WidgetRecord>> {
        if self.is_excluded(package, activity) {
            debug!(package, activity, "snapshot excluded from collection");
            return Ok(Vec::new());
        }
        let snapshot = Snapshot::parse(dom, package, activity)?;
        Ok(self.collect(cache, &snapshot, update_cache))
    }

    /// Widgets of `snapshot`, in whitelist order then document order.
    ///
    /// With `update_cache == false` a non-empty cached list is returned as is.
    /// The cache entry is rewritten whenever widgets were found or a refresh
    /// was requested; either way its stored match results are dropped.
    pub fn collect(
        &self,
        cache: &mut StateCache,
        snapshot: &Snapshot,
        update_cache: bool,
    ) -> Vec<WidgetRecord> {
        if self.is_excluded(&snapshot.package, &snapshot.activity) {
            debug!(
                package = snapshot.package.as_str(),
                activity = snapshot.activity.as_str(),
                "snapshot excluded from collection"
            );
            return Vec::new();
        }

        let signature = snapshot.signature();
        if !update_cache {
            if let Some(cached) = cache.all_widgets(signature).filter(|w| !w.is_empty()) {
                debug!(state = %signature.digest(), count = cached.len(), "widgets served from cache");
                return cached.to_vec();
            }
        }

        let widgets = self.extract_all(snapshot, signature);

        if !widgets.is_empty() || update_cache {
            info!(state = %signature.digest(), count = widgets.len(), "caching widgets for state");
            cache.store_widgets(signature.clone(), widgets.clone());
        }
        widgets
    }

    fn extract_all(&self, snapshot: &Snapshot, signature: &StateSignature) -> Vec<WidgetRecord> {
        let tree = &snapshot.tree;
        let pool = neighbor_pool(tree);
        let exceptions: Vec<&TextException> = self
            .rules
            .text_exceptions
            .iter()
            .filter(|e| signature.as_str().contains(e.signature_contains.as_str()))
            .collect();

        let mut widgets = Vec::new();
        for class in WIDGET_CLASSES {
            for id in tree.all_nodes().filter(|id| tree.class(*id) == Some(class)) {
                let Some(mut widget) = extract_widget_with(tree, id, &pool) else {
                    continue;
                };
                apply_text_exceptions(&mut widget, &exceptions);
                widget.package = snapshot.package.clone();
                widget.activity = snapshot.activity.clone();
                widgets.push(widget);
            }
        }
        widgets
    }
}

fn apply_text_exceptions(widget: &mut WidgetRecord, exceptions: &[&TextException]) {
    if let Some(e) = exceptions.iter().find(|e| e.text == widget.text) {
        widget.text = e.replacement.clone();
    }
}
