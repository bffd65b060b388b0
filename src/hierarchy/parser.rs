use std::borrow::Cow;
use std::sync::LazyLock;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use regex::Regex;

use crate::error::{MatchError, Result};
use crate::hierarchy::tree::{NodeId, UiNode, UiTree};

// Decimal character references in dumps are almost always emoji.
static NUMERIC_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#\d+;").expect("numeric escape regex is valid"));

pub fn strip_numeric_escapes(dom: &str) -> Cow<'_, str> {
    NUMERIC_ESCAPE.replace_all(dom, "")
}

/// Parse a UI hierarchy dump into a [`UiTree`].
///
/// The whole document is rejected on any well-formedness problem; no partial
/// tree is ever returned.
pub fn parse_hierarchy(dom: &str) -> Result<UiTree> {
    let cleaned = strip_numeric_escapes(dom);
    let mut reader = Reader::from_str(&cleaned);

    let mut nodes: Vec<UiNode> = Vec::new();
    let mut open: Vec<NodeId> = Vec::new();

    loop {
        let position = reader.buffer_position();
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let id = push_node(&mut nodes, &open, &e, position)?;
                open.push(id);
            }
            Ok(Event::Empty(e)) => {
                push_node(&mut nodes, &open, &e, position)?;
            }
            Ok(Event::End(_)) => {
                open.pop();
            }
            Ok(Event::Text(e)) if open.is_empty() && !is_blank(&e) => {
                return Err(MatchError::parse(position, "text outside the root element"));
            }
            Ok(Event::CData(_)) if open.is_empty() => {
                return Err(MatchError::parse(position, "CDATA outside the root element"));
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(MatchError::parse(reader.error_position(), e.to_string())),
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(MatchError::parse(
            reader.buffer_position(),
            format!("element <{}> is never closed", nodes[unclosed.0].tag),
        ));
    }
    if nodes.is_empty() {
        return Err(MatchError::parse(0, "document has no root element"));
    }

    Ok(UiTree::from_nodes(nodes))
}

fn is_blank(text: &[u8]) -> bool {
    text.iter().all(u8::is_ascii_whitespace)
}

fn push_node(
    nodes: &mut Vec<UiNode>,
    open: &[NodeId],
    start: &BytesStart<'_>,
    position: u64,
) -> Result<NodeId> {
    let parent = open.last().copied();
    if parent.is_none() && !nodes.is_empty() {
        return Err(MatchError::parse(position, "document has more than one root element"));
    }

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| MatchError::parse(position, e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| MatchError::parse(position, e.to_string()))?
            .into_owned();
        attributes.push((key, value));
    }

    let id = NodeId(nodes.len());
    nodes.push(UiNode {
        tag: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
        attributes,
        parent,
        children: Vec::new(),
    });
    if let Some(p) = parent {
        nodes[p.0].children.push(id);
    }
    Ok(id)
}
