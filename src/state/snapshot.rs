use crate::error::Result;
use crate::hierarchy::{UiTree, parse_hierarchy};
use crate::state::signature::StateSignature;

/// One parsed UI dump for a package/activity.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub package: String,
    pub activity: String,
    pub tree: UiTree,
    signature: StateSignature,
}

impl Snapshot {
    pub fn parse(dom: &str, package: &str, activity: &str) -> Result<Self> {
        let tree = parse_hierarchy(dom)?;
        Ok(Self::from_tree(tree, package, activity))
    }

    pub fn from_tree(tree: UiTree, package: &str, activity: &str) -> Self {
        let signature = StateSignature::build(&tree, package, activity);
        Self {
            package: package.to_string(),
            activity: activity.to_string(),
            tree,
            signature,
        }
    }

    pub fn signature(&self) -> &StateSignature {
        &self.signature
    }
}
