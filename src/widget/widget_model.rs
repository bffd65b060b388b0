use serde::{Deserialize, Serialize};

pub const EDIT_TEXT: &str = "android.widget.EditText";
pub const MULTI_AUTO_COMPLETE: &str = "android.widget.MultiAutoCompleteTextView";
pub const TEXT_VIEW: &str = "android.widget.TextView";
pub const BUTTON: &str = "android.widget.Button";
pub const IMAGE_BUTTON: &str = "android.widget.ImageButton";
pub const VIEW: &str = "android.view.View";

/// Widget classes the collector extracts, in output order.
pub const WIDGET_CLASSES: [&str; 6] = [
    EDIT_TEXT,
    MULTI_AUTO_COMPLETE,
    TEXT_VIEW,
    BUTTON,
    IMAGE_BUTTON,
    VIEW,
];

/// One UI element as seen on one snapshot.
///
/// Attribute values are kept as the raw strings of the dump (`"true"`,
/// `"false"`, or empty when absent) so that records compare and serialize the
/// same way as recorded test events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetRecord {
    pub class: String,
    #[serde(rename = "resource-id")]
    pub resource_id: String,
    #[serde(rename = "id-prefix")]
    pub id_prefix: String,
    pub text: String,
    #[serde(rename = "content-desc")]
    pub content_desc: String,
    pub clickable: String,
    pub password: String,
    pub naf: String,
    pub package: String,
    pub activity: String,
    pub parent_text: String,
    pub sibling_text: String,
    pub filename: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub atm_neighbor: Vec<WidgetRecord>,
}

impl WidgetRecord {
    pub fn is_clickable(&self) -> bool {
        self.clickable == "true"
    }

    /// Resource id as it appears in the dump, prefix included.
    pub fn full_resource_id(&self) -> String {
        format!("{}{}", self.id_prefix, self.resource_id)
    }

    /// Copy without the neighbor set, used as a neighbor entry itself.
    pub fn shallow(&self) -> WidgetRecord {
        WidgetRecord {
            atm_neighbor: Vec::new(),
            ..self.clone()
        }
    }
}

/// Recorded action of a source event, e.g. `["click"]` or
/// `["wait_until_text_presence", "10", "text", "Done"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordedAction(pub Vec<String>);

impl RecordedAction {
    pub fn new<S: Into<String>>(parts: impl IntoIterator<Item = S>) -> Self {
        Self(parts.into_iter().map(Into::into).collect())
    }

    pub fn verb(&self) -> &str {
        self.0.first().map(String::as_str).unwrap_or("")
    }

    pub fn is_wait(&self) -> bool {
        self.verb().starts_with("wait_until")
    }

    pub fn is_wait_for_text(&self) -> bool {
        self.verb().starts_with("wait_until_text_presence")
    }

    pub fn is_swipe(&self) -> bool {
        self.verb().starts_with("swipe")
    }
}

/// A widget from the source snapshot together with the action recorded on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceWidget {
    #[serde(flatten)]
    pub record: WidgetRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<RecordedAction>,
}

impl SourceWidget {
    pub fn new(record: WidgetRecord, action: Option<RecordedAction>) -> Self {
        Self { record, action }
    }

    pub fn action_is(&self, pred: impl Fn(&RecordedAction) -> bool) -> bool {
        self.action.as_ref().map(pred).unwrap_or(false)
    }
}

/// A target widget and its similarity to the source widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCandidate {
    pub widget: WidgetRecord,
    pub score: f64,
}
