use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hierarchy::{NodeId, UiTree};
use crate::widget::widget_model::WidgetRecord;

/// Identity of a UI state: package, activity and tree shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateSignature(String);

impl StateSignature {
    /// Breadth-first walk with a FIFO queue. Each node is named by its
    /// root-to-node path of child positions (`0`, `0-1`, `0-1-3`, ...);
    /// inner nodes and leaves are listed separately.
    pub fn build(tree: &UiTree, package: &str, activity: &str) -> Self {
        let mut layouts = Vec::new();
        let mut leaves = Vec::new();
        let mut queue: VecDeque<(NodeId, String)> = VecDeque::new();
        queue.push_back((tree.root(), "0".to_string()));

        while let Some((node, idx)) = queue.pop_front() {
            let children = tree.children(node);
            if children.is_empty() {
                leaves.push(idx);
                continue;
            }
            for (i, child) in children.iter().enumerate() {
                queue.push_back((*child, format!("{idx}-{i}")));
            }
            layouts.push(idx);
        }

        Self(
            [
                package.to_string(),
                activity.to_string(),
                layouts.join("+"),
                leaves.join("+"),
            ]
            .join("!"),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Short SHA-1 fingerprint for logs, where the full signature is too long.
    pub fn digest(&self) -> String {
        use sha1::{Digest, Sha1};

        let mut hasher = Sha1::new();
        hasher.update(self.0.as_bytes());
        format!("{:x}", hasher.finalize())[..12].to_string()
    }
}

impl fmt::Display for StateSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity of a widget from the attributes that matter for replay.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetSignature(String);

impl WidgetSignature {
    pub fn of(w: &WidgetRecord) -> Self {
        Self(
            [
                w.class.as_str(),
                w.resource_id.as_str(),
                w.text.as_str(),
                w.content_desc.as_str(),
                w.clickable.as_str(),
                w.password.as_str(),
                w.naf.as_str(),
                w.package.as_str(),
                w.activity.as_str(),
            ]
            .join("|"),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
