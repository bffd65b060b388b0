use regex::Regex;

/// Index of a node inside its [`UiTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone)]
pub struct UiNode {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl UiNode {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// First whitespace token of the raw `class` attribute.
    pub fn class(&self) -> Option<&str> {
        self.attr("class").and_then(|c| c.split_whitespace().next())
    }
}

/// Condition used by the attribute-based node search.
#[derive(Debug, Clone)]
pub enum AttrMatch {
    Equals { name: String, value: String },
    Contains { name: String, needle: String },
    /// Compares the first class token, like the widget records do.
    Class(String),
    Pattern { name: String, regex: Regex },
}

impl AttrMatch {
    pub fn equals(name: &str, value: &str) -> Self {
        AttrMatch::Equals {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    pub fn contains(name: &str, needle: &str) -> Self {
        AttrMatch::Contains {
            name: name.to_string(),
            needle: needle.to_string(),
        }
    }

    pub fn class(class: &str) -> Self {
        AttrMatch::Class(class.to_string())
    }

    pub fn pattern(name: &str, regex: Regex) -> Self {
        AttrMatch::Pattern {
            name: name.to_string(),
            regex,
        }
    }

    fn matches(&self, node: &UiNode) -> bool {
        match self {
            AttrMatch::Equals { name, value } => node.attr(name) == Some(value.as_str()),
            AttrMatch::Contains { name, needle } => node
                .attr(name)
                .map(|v| !v.is_empty() && v.contains(needle.as_str()))
                .unwrap_or(false),
            AttrMatch::Class(class) => node.class() == Some(class.as_str()),
            AttrMatch::Pattern { name, regex } => {
                node.attr(name).map(|v| regex.is_match(v)).unwrap_or(false)
            }
        }
    }
}

/// Arena-backed UI hierarchy. Node 0 is the root and ids follow document order.
#[derive(Debug, Clone)]
pub struct UiTree {
    nodes: Vec<UiNode>,
}

impl UiTree {
    /// Callers must guarantee `nodes` is non-empty, rooted at index 0, and
    /// that parent/children links are consistent.
    pub(crate) fn from_nodes(nodes: Vec<UiNode>) -> Self {
        Self { nodes }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> &UiNode {
        &self.nodes[id.0]
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id).attr(name)
    }

    pub fn class(&self, id: NodeId) -> Option<&str> {
        self.node(id).class()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn previous_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let siblings = self.children(parent);
        let pos = siblings.iter().position(|s| *s == id)?;
        pos.checked_sub(1).map(|p| siblings[p])
    }

    /// Ancestors from the immediate parent up to the root.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |p| self.parent(*p))
    }

    /// Every node in document order.
    pub fn all_nodes(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn find(&self, criteria: &[AttrMatch]) -> Option<NodeId> {
        self.all_nodes().find(|id| self.matches_all(*id, criteria))
    }

    pub fn find_all(&self, criteria: &[AttrMatch]) -> Vec<NodeId> {
        self.all_nodes()
            .filter(|id| self.matches_all(*id, criteria))
            .collect()
    }

    fn matches_all(&self, id: NodeId, criteria: &[AttrMatch]) -> bool {
        let node = self.node(id);
        criteria.iter().all(|c| c.matches(node))
    }
}
