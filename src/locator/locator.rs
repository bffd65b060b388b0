use regex::Regex;

use crate::error::{MatchError, Result};
use crate::hierarchy::{AttrMatch, UiTree};
use crate::widget::extractor::{describe_node, extract_widget, neighbor_pool, neighbors_of};
use crate::widget::widget_model::{BUTTON, EDIT_TEXT, IMAGE_BUTTON, WidgetRecord};

/// Pseudo attribute matching nodes whose text contains the value.
pub const TEXT_CONTAINS: &str = "text-contain";

/// Find the first node matching every criterion and extract it.
///
/// Criteria map an attribute name to a pattern. `+` and `?` are taken
/// literally; other regex syntax is kept. `resource-id` patterns must match at
/// the end of the id. Empty patterns are ignored, and `Ok(None)` is returned
/// when no criteria remain or nothing matches.
pub fn locate_widget(tree: &UiTree, criteria: &[(&str, &str)]) -> Result<Option<WidgetRecord>> {
    let mut matchers = Vec::new();
    for (attribute, pattern) in criteria.iter().filter(|(_, p)| !p.is_empty()) {
        let escaped = pattern.replace('+', r"\+").replace('?', r"\?");
        let source = if *attribute == "resource-id" {
            format!("{escaped}$")
        } else {
            escaped
        };
        let regex = Regex::new(&source).map_err(|source| MatchError::InvalidPattern {
            attribute: attribute.to_string(),
            source,
        })?;
        matchers.push(AttrMatch::pattern(attribute, regex));
    }

    if matchers.is_empty() {
        return Ok(None);
    }
    Ok(tree.find(&matchers).and_then(|id| extract_widget(tree, id)))
}

/// First node whose `attr` equals `value`, optionally of class `class`.
///
/// `attr` may be [`TEXT_CONTAINS`] for a substring match on the text. Unlike
/// the collector, disabled widgets are returned too.
pub fn find_widget_by_attr(
    tree: &UiTree,
    attr: &str,
    value: &str,
    class: Option<&str>,
) -> Option<WidgetRecord> {
    let mut criteria = vec![if attr == TEXT_CONTAINS {
        AttrMatch::contains("text", value)
    } else {
        AttrMatch::equals(attr, value)
    }];
    if let Some(class) = class {
        criteria.push(AttrMatch::class(class));
    }

    let id = tree.find(&criteria)?;
    let mut record = describe_node(tree, id);
    record.atm_neighbor = neighbors_of(&record, &neighbor_pool(tree));
    Some(record)
}

/// First ImageButton on the snapshot, else the first Button, else the first
/// EditText. `None` when that widget is disabled or none exists.
pub fn nearest_button(tree: &UiTree) -> Option<WidgetRecord> {
    [IMAGE_BUTTON, BUTTON, EDIT_TEXT]
        .into_iter()
        .find_map(|class| tree.find(&[AttrMatch::class(class)]))
        .and_then(|id| extract_widget(tree, id))
}
