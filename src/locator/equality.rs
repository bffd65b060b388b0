use crate::widget::widget_model::WidgetRecord;

/// Exact identity check between two records.
///
/// Compares class, full resource id (prefix included), text, content-desc,
/// clickable and password, plus package and activity unless
/// `ignore_activity` is set. `naf` and derived context fields are ignored.
pub fn is_equal(a: Option<&WidgetRecord>, b: Option<&WidgetRecord>, ignore_activity: bool) -> bool {
    let (Some(a), Some(b)) = (a, b) else {
        return false;
    };

    let same_identity = a.class == b.class
        && a.full_resource_id() == b.full_resource_id()
        && a.text == b.text
        && a.content_desc == b.content_desc
        && a.clickable == b.clickable
        && a.password == b.password;

    same_identity && (ignore_activity || (a.package == b.package && a.activity == b.activity))
}
