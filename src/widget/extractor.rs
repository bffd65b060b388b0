use crate::hierarchy::{NodeId, UiTree};
use crate::widget::widget_model::WidgetRecord;

const LIST_CONTAINERS: [&str; 1] = ["android.widget.ListView"];
const SIBLING_TEXT_CONTAINERS: [&str; 2] =
    ["android.widget.LinearLayout", "android.widget.RelativeLayout"];
const TEXT_INPUT_LAYOUT: &str = "TextInputLayout";

/// Ancestors above the parent inspected for a clickable list container.
const LIST_ANCESTOR_DEPTH: usize = 2;

/// Build the record for `id`, or `None` when the node is not enabled.
pub fn extract_widget(tree: &UiTree, id: NodeId) -> Option<WidgetRecord> {
    let pool = neighbor_pool(tree);
    extract_widget_with(tree, id, &pool)
}

/// Same as [`extract_widget`], reusing a pool built by [`neighbor_pool`].
pub fn extract_widget_with(
    tree: &UiTree,
    id: NodeId,
    pool: &[WidgetRecord],
) -> Option<WidgetRecord> {
    if !is_enabled(tree, id) {
        return None;
    }
    let mut record = describe_node(tree, id);
    record.atm_neighbor = neighbors_of(&record, pool);
    Some(record)
}

/// Shallow records of every enabled node, the candidates for neighbor sets.
pub fn neighbor_pool(tree: &UiTree) -> Vec<WidgetRecord> {
    tree.all_nodes()
        .filter(|id| is_enabled(tree, *id))
        .map(|id| describe_node(tree, id))
        .collect()
}

/// Widgets of the same class under a different resource id.
pub fn neighbors_of(record: &WidgetRecord, pool: &[WidgetRecord]) -> Vec<WidgetRecord> {
    pool.iter()
        .filter(|w| w.class == record.class && w.resource_id != record.resource_id)
        .map(WidgetRecord::shallow)
        .collect()
}

pub fn is_enabled(tree: &UiTree, id: NodeId) -> bool {
    tree.attr(id, "enabled") == Some("true")
}

/// Feature attributes and context of a node, without the enabled check and
/// without neighbors.
pub fn describe_node(tree: &UiTree, id: NodeId) -> WidgetRecord {
    let raw = |name: &str| tree.attr(id, name).unwrap_or("").to_string();

    let (id_prefix, resource_id) = split_resource_id(tree.attr(id, "resource-id").unwrap_or(""));

    let clickable = match tree.attr(id, "clickable") {
        Some("false") => propagate_clickable(tree, id).to_string(),
        other => other.unwrap_or("").to_string(),
    };

    WidgetRecord {
        class: tree.class(id).unwrap_or("").to_string(),
        resource_id,
        id_prefix,
        text: raw("text"),
        content_desc: raw("content-desc"),
        clickable,
        password: raw("password"),
        // uiautomator writes the flag as `NAF`
        naf: tree
            .attr(id, "naf")
            .or_else(|| tree.attr(id, "NAF"))
            .unwrap_or("")
            .to_string(),
        parent_text: parent_text(tree, id),
        sibling_text: sibling_text(tree, id),
        filename: filename(tree, id),
        ..WidgetRecord::default()
    }
}

/// Split `com.app:id/button_ok` into (`com.app:id/`, `button_ok`).
pub fn split_resource_id(raw: &str) -> (String, String) {
    match raw.rsplit_once('/') {
        Some((prefix, suffix)) => (format!("{prefix}/"), suffix.to_string()),
        None => (String::new(), raw.to_string()),
    }
}

/// Effective clickability of a node whose own `clickable` is `"false"`.
///
/// Rows of clickable lists report `false` on their children, so the parent
/// and a couple of list ancestors are consulted.
pub fn propagate_clickable(tree: &UiTree, id: NodeId) -> &'static str {
    let Some(parent) = tree.parent(id) else {
        return "false";
    };
    if tree.attr(parent, "clickable") == Some("true") {
        return "true";
    }

    let in_clickable_list = tree.ancestors(parent).take(LIST_ANCESTOR_DEPTH).any(|a| {
        tree.class(a).is_some_and(|c| LIST_CONTAINERS.contains(&c))
            && tree.attr(a, "clickable") == Some("true")
    });
    if in_clickable_list { "true" } else { "false" }
}

pub fn parent_text(tree: &UiTree, id: NodeId) -> String {
    let Some(parent) = tree.parent(id) else {
        return String::new();
    };
    let mut text = tree.attr(parent, "text").unwrap_or("").to_string();

    if let Some(grandparent) = tree.parent(parent) {
        let is_input_layout = tree
            .class(grandparent)
            .is_some_and(|c| c.ends_with(TEXT_INPUT_LAYOUT));
        let gp_text = tree.attr(grandparent, "text").unwrap_or("");
        if is_input_layout && !gp_text.is_empty() {
            text.push_str(gp_text);
        }
    }
    text
}

pub fn sibling_text(tree: &UiTree, id: NodeId) -> String {
    let in_layout = tree
        .parent(id)
        .and_then(|p| tree.class(p))
        .is_some_and(|c| SIBLING_TEXT_CONTAINERS.contains(&c));
    if !in_layout {
        return String::new();
    }

    tree.previous_sibling(id)
        .and_then(|s| tree.attr(s, "text"))
        .unwrap_or("")
        .to_string()
}

pub fn filename(tree: &UiTree, id: NodeId) -> String {
    if let Some(name) = tree.attr(id, "filename") {
        return name.to_string();
    }
    tree.attr(id, "src")
        .or_else(|| tree.attr(id, "href"))
        .map(last_segment)
        .unwrap_or("")
        .to_string()
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or("")
}
