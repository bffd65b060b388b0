pub mod parser;
pub mod tree;

pub use parser::parse_hierarchy;
pub use tree::{AttrMatch, NodeId, UiNode, UiTree};
