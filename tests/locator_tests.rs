use widget_migrate::MatchError;
use widget_migrate::hierarchy::parse_hierarchy;
use widget_migrate::locator::locator::TEXT_CONTAINS;
use widget_migrate::locator::{find_widget_by_attr, is_equal, locate_widget, nearest_button};

use crate::common::fixtures::{LOGIN_V1, dump};
use crate::common::utils::widget;

mod common;

// =========================================================================
// locate_widget
// =========================================================================

#[test]
fn resource_id_patterns_are_anchored_at_the_end() {
    let tree = parse_hierarchy(LOGIN_V1).unwrap();

    let found = locate_widget(&tree, &[("resource-id", "sign_in")]).unwrap().unwrap();
    assert_eq!(found.resource_id, "sign_in");
    assert_eq!(found.text, "Sign in");

    assert!(locate_widget(&tree, &[("resource-id", "sign")]).unwrap().is_none());
}

#[test]
fn all_criteria_must_match() {
    let tree = parse_hierarchy(LOGIN_V1).unwrap();

    let found = locate_widget(&tree, &[("class", "Button"), ("text", "Sign")]).unwrap().unwrap();
    assert_eq!(found.resource_id, "sign_in");

    let none = locate_widget(&tree, &[("class", "EditText"), ("text", "Sign")]).unwrap();
    assert!(none.is_none());
}

#[test]
fn plus_and_question_mark_are_literal() {
    let tree = parse_hierarchy(&dump(
        r#"<node resource-id="a" text="C++ Guide" class="android.widget.TextView" enabled="true"/>
           <node resource-id="b" text="Forgot password?" class="android.widget.TextView" enabled="true"/>"#,
    ))
    .unwrap();

    let cpp = locate_widget(&tree, &[("text", "C++")]).unwrap().unwrap();
    assert_eq!(cpp.resource_id, "a");
    let forgot = locate_widget(&tree, &[("text", "password?")]).unwrap().unwrap();
    assert_eq!(forgot.resource_id, "b");
}

#[test]
fn empty_criteria_locate_nothing() {
    let tree = parse_hierarchy(LOGIN_V1).unwrap();
    assert!(locate_widget(&tree, &[]).unwrap().is_none());
    assert!(locate_widget(&tree, &[("text", ""), ("resource-id", "")]).unwrap().is_none());
}

#[test]
fn invalid_pattern_is_reported() {
    let tree = parse_hierarchy(LOGIN_V1).unwrap();
    let err = locate_widget(&tree, &[("text", "(")]).unwrap_err();
    assert!(matches!(err, MatchError::InvalidPattern { ref attribute, .. } if attribute == "text"));
}

#[test]
fn disabled_match_is_not_extracted() {
    let tree = parse_hierarchy(&dump(
        r#"<node resource-id="x:id/off" text="Off" class="android.widget.Button" enabled="false"/>"#,
    ))
    .unwrap();
    assert!(locate_widget(&tree, &[("text", "Off")]).unwrap().is_none());
}

// =========================================================================
// Attribute lookups
// =========================================================================

#[test]
fn find_by_attribute_and_text_contains() {
    let tree = parse_hierarchy(LOGIN_V1).unwrap();

    let exact = find_widget_by_attr(&tree, "text", "Email", None).unwrap();
    assert_eq!(exact.resource_id, "email_label");

    let partial = find_widget_by_attr(&tree, TEXT_CONTAINS, "Sign", None).unwrap();
    assert_eq!(partial.resource_id, "sign_in");

    assert!(find_widget_by_attr(&tree, TEXT_CONTAINS, "Sign", Some("android.widget.TextView")).is_none());
}

#[test]
fn find_by_attribute_returns_disabled_widgets() {
    let tree = parse_hierarchy(&dump(
        r#"<node resource-id="x:id/off" text="Off" class="android.widget.Button" enabled="false" clickable="true"/>"#,
    ))
    .unwrap();
    let w = find_widget_by_attr(&tree, "text", "Off", Some("android.widget.Button")).unwrap();
    assert_eq!(w.resource_id, "off");
    assert_eq!(w.clickable, "true");
}

#[test]
fn nearest_button_prefers_image_buttons() {
    let login = parse_hierarchy(LOGIN_V1).unwrap();
    assert_eq!(nearest_button(&login).unwrap().resource_id, "sign_in");

    let with_icon = parse_hierarchy(&dump(
        r#"<node resource-id="b" class="android.widget.Button" enabled="true"/>
           <node resource-id="i" class="android.widget.ImageButton" enabled="true"/>"#,
    ))
    .unwrap();
    assert_eq!(nearest_button(&with_icon).unwrap().resource_id, "i");

    let bare = parse_hierarchy(&dump(r#"<node class="android.widget.TextView" enabled="true"/>"#)).unwrap();
    assert!(nearest_button(&bare).is_none());
}

// =========================================================================
// is_equal
// =========================================================================

#[test]
fn equality_on_identity_attributes() {
    let a = widget("android.widget.Button", "ok", "OK", true);
    let mut b = a.clone();
    b.naf = "true".into();
    b.parent_text = "Dialog".into();
    assert!(is_equal(Some(&a), Some(&b), false), "naf and context are ignored");

    assert!(!is_equal(None, Some(&b), false));
    assert!(!is_equal(Some(&a), None, true));

    let mut other_prefix = a.clone();
    other_prefix.id_prefix = "com.other:id/".into();
    assert!(!is_equal(Some(&a), Some(&other_prefix), false), "prefix is part of the id");

    let mut other_screen = a.clone();
    other_screen.activity = "com.example.app.MainActivity".into();
    assert!(!is_equal(Some(&a), Some(&other_screen), false));
    assert!(is_equal(Some(&a), Some(&other_screen), true));

    let mut relabeled = a.clone();
    relabeled.text = "Okay".into();
    assert!(!is_equal(Some(&a), Some(&relabeled), true));
}
