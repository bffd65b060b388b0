use std::cell::Cell;
use std::collections::HashSet;

use widget_migrate::oracle::SimilarityOracle;
use widget_migrate::widget::WidgetRecord;

/// Word-set Jaccard similarity; 0.0 when nothing is shared.
pub struct JaccardOracle;

impl SimilarityOracle for JaccardOracle {
    fn sentence_similarity(&self, new: &[String], old: &[String]) -> Option<f64> {
        let a: HashSet<&String> = new.iter().collect();
        let b: HashSet<&String> = old.iter().collect();
        let union = a.union(&b).count();
        if union == 0 {
            return None;
        }
        Some(a.intersection(&b).count() as f64 / union as f64)
    }
}

/// Never has a signal.
pub struct SilentOracle;

impl SimilarityOracle for SilentOracle {
    fn sentence_similarity(&self, _new: &[String], _old: &[String]) -> Option<f64> {
        None
    }
}

/// Always answers `value`, whatever the input.
pub struct FixedOracle(pub f64);

impl SimilarityOracle for FixedOracle {
    fn sentence_similarity(&self, _new: &[String], _old: &[String]) -> Option<f64> {
        Some(self.0)
    }
}

/// Jaccard oracle counting how often it is consulted.
#[derive(Default)]
pub struct CountingOracle {
    pub calls: Cell<usize>,
}

impl SimilarityOracle for CountingOracle {
    fn sentence_similarity(&self, new: &[String], old: &[String]) -> Option<f64> {
        self.calls.set(self.calls.get() + 1);
        JaccardOracle.sentence_similarity(new, old)
    }
}

pub fn widget(class: &str, resource_id: &str, text: &str, clickable: bool) -> WidgetRecord {
    WidgetRecord {
        class: class.into(),
        resource_id: resource_id.into(),
        id_prefix: "com.example.app:id/".into(),
        text: text.into(),
        clickable: if clickable { "true" } else { "false" }.into(),
        password: "false".into(),
        package: "com.example.app".into(),
        activity: "com.example.app.LoginActivity".into(),
        ..WidgetRecord::default()
    }
}

pub fn words(s: &str) -> Vec<String> {
    s.split_whitespace().map(str::to_string).collect()
}
