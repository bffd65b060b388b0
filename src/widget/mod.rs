pub mod extractor;
pub mod widget_model;

pub use extractor::extract_widget;
pub use widget_model::{RankedCandidate, RecordedAction, SourceWidget, WidgetRecord};
