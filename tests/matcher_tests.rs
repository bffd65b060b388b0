use widget_migrate::config::MatchOptions;
use widget_migrate::matcher::CandidateMatcher;
use widget_migrate::matcher::matcher::passes_filters;
use widget_migrate::state::{Snapshot, StateCache, WidgetSignature};
use widget_migrate::widget::{RecordedAction, SourceWidget, WidgetRecord};

use crate::common::fixtures::{ACT, LOGIN_V1, PKG};
use crate::common::utils::{CountingOracle, JaccardOracle, widget};

mod common;

const EDIT_TEXT: &str = "android.widget.EditText";
const MULTI: &str = "android.widget.MultiAutoCompleteTextView";
const TEXT_VIEW: &str = "android.widget.TextView";
const BUTTON: &str = "android.widget.Button";
const IMAGE_BUTTON: &str = "android.widget.ImageButton";

fn source(record: WidgetRecord, action: &[&str]) -> SourceWidget {
    let action = (!action.is_empty()).then(|| RecordedAction::new(action.iter().copied()));
    SourceWidget::new(record, action)
}

fn matcher() -> CandidateMatcher<JaccardOracle> {
    CandidateMatcher::new(JaccardOracle, MatchOptions::default())
}

// =========================================================================
// Class compatibility
// =========================================================================

#[test]
fn buttons_match_buttons_and_optionally_text() {
    let src = source(widget(BUTTON, "ok", "OK", true), &["click"]);
    assert_eq!(matcher().target_classes(&src), vec![IMAGE_BUTTON, BUTTON]);

    let expanded = CandidateMatcher::new(
        JaccardOracle,
        MatchOptions {
            expand_button_to_text: true,
            ..MatchOptions::default()
        },
    );
    assert_eq!(expanded.target_classes(&src), vec![IMAGE_BUTTON, BUTTON, TEXT_VIEW]);
}

#[test]
fn text_view_rules() {
    let m = matcher();

    let plain = source(widget(TEXT_VIEW, "t", "Title", false), &["click"]);
    assert_eq!(m.target_classes(&plain), vec![TEXT_VIEW]);

    let clickable = source(widget(TEXT_VIEW, "t", "More", true), &["click"]);
    assert_eq!(m.target_classes(&clickable), vec![TEXT_VIEW, IMAGE_BUTTON, BUTTON]);

    let link = source(widget(TEXT_VIEW, "t", "https://example.com", true), &["click"]);
    assert_eq!(m.target_classes(&link), vec![TEXT_VIEW, IMAGE_BUTTON, BUTTON, EDIT_TEXT]);

    let waited = source(
        widget(TEXT_VIEW, "t", "Done", false),
        &["wait_until_text_presence", "10", "text", "Done"],
    );
    assert!(m.target_classes(&waited).contains(&EDIT_TEXT.to_string()));
}

#[test]
fn edit_text_rules() {
    let m = matcher();

    let plain = source(widget(EDIT_TEXT, "e", "", true), &["send_keys", "hello"]);
    assert_eq!(m.target_classes(&plain), vec![EDIT_TEXT, MULTI]);

    let url = source(widget(EDIT_TEXT, "e", "https://example.com", true), &["click"]);
    assert!(m.target_classes(&url).contains(&TEXT_VIEW.to_string()));

    let waited = source(widget(EDIT_TEXT, "e", "x", true), &["wait_until_text_presence"]);
    assert_eq!(m.target_classes(&waited), vec![EDIT_TEXT, MULTI, TEXT_VIEW]);
}

#[test]
fn other_classes_match_only_themselves() {
    let m = matcher();
    let multi = source(widget(MULTI, "m", "", true), &[]);
    assert_eq!(m.target_classes(&multi), vec![MULTI, EDIT_TEXT]);

    let check = source(widget("android.widget.CheckBox", "c", "", true), &[]);
    assert_eq!(m.target_classes(&check), vec!["android.widget.CheckBox"]);
}

// =========================================================================
// Hard filters
// =========================================================================

#[test]
fn password_mismatch_is_rejected() {
    let src = source(widget(EDIT_TEXT, "pw", "", true), &["send_keys"]);
    let mut candidate = widget(EDIT_TEXT, "pw", "", true);
    candidate.password = "true".into();
    assert!(!passes_filters(&src, &candidate));

    candidate.password = String::new();
    assert!(passes_filters(&src, &candidate), "undeclared password is not checked");
}

#[test]
fn clickability_exceptions_for_wait_and_swipe() {
    let text_view = widget(TEXT_VIEW, "t", "Done", true);
    let edit = widget(EDIT_TEXT, "t", "Done", true);
    let button = widget(BUTTON, "t", "Done", true);

    let click = source(widget(TEXT_VIEW, "t", "Done", false), &["click"]);
    assert!(!passes_filters(&click, &text_view));

    let wait = source(widget(TEXT_VIEW, "t", "Done", false), &["wait_until_element_presence"]);
    assert!(passes_filters(&wait, &text_view));
    assert!(passes_filters(&wait, &edit));
    assert!(!passes_filters(&wait, &button));

    let swipe = source(widget(TEXT_VIEW, "t", "Done", false), &["swipe_up"]);
    assert!(passes_filters(&swipe, &text_view));
    assert!(!passes_filters(&swipe, &edit));

    let no_action = source(widget(TEXT_VIEW, "t", "Done", false), &[]);
    assert!(!passes_filters(&no_action, &text_view));
}

// =========================================================================
// Ranking
// =========================================================================

#[test]
fn ranks_by_descending_score() {
    let src = source(widget(BUTTON, "sign_in", "Sign in", true), &["click"]);
    let mut locked = widget(BUTTON, "sign_in", "Sign in", true);
    locked.password = "true".into();
    let widgets = vec![
        widget(IMAGE_BUTTON, "sign_up", "Sign up", true),
        widget(TEXT_VIEW, "sign_in", "Sign in", true),
        locked,
        widget(BUTTON, "sign_in", "Sign in", true),
    ];

    let ranked = matcher().rank(&src, &widgets);
    let ids: Vec<(&str, &str)> = ranked
        .iter()
        .map(|r| (r.widget.class.as_str(), r.widget.resource_id.as_str()))
        .collect();
    assert_eq!(ids, vec![(BUTTON, "sign_in"), (IMAGE_BUTTON, "sign_up")]);
    assert_eq!(ranked[0].score, 1.0);
    assert_eq!(ranked[1].score, 0.5);
}

#[test]
fn equal_scores_keep_input_order() {
    let src = source(widget(BUTTON, "ok", "OK", true), &["click"]);
    let mut first = widget(BUTTON, "ok", "OK", true);
    first.naf = "first".into();
    let mut second = widget(IMAGE_BUTTON, "ok", "OK", true);
    second.naf = "second".into();

    let ranked = matcher().rank(&src, &[first, second]);
    let order: Vec<&str> = ranked.iter().map(|r| r.widget.naf.as_str()).collect();
    assert_eq!(order, vec!["first", "second"]);
}

#[test]
fn incomparable_candidates_are_left_out() {
    let src = source(widget(BUTTON, "", "Next", true), &["click"]);
    let mut icon = widget(BUTTON, "", "", true);
    icon.content_desc = "Next page".into();
    let zero = widget(BUTTON, "", "Back", true);

    let ranked = matcher().rank(&src, &[icon, zero]);
    assert_eq!(ranked.len(), 1, "no shared attribute with the icon");
    assert_eq!(ranked[0].widget.text, "Back");
    assert_eq!(ranked[0].score, 0.0, "comparable but dissimilar stays ranked");
}

#[test]
fn no_compatible_candidates_gives_empty_ranking() {
    let src = source(widget(EDIT_TEXT, "e", "", true), &["send_keys"]);
    let widgets = vec![widget(BUTTON, "e", "", true), widget(TEXT_VIEW, "e", "", true)];
    assert!(matcher().rank(&src, &widgets).is_empty());
}

// =========================================================================
// Most-similar cache
// =========================================================================

#[test]
fn best_match_is_memoized_per_state() {
    let snapshot = Snapshot::parse(LOGIN_V1, PKG, ACT).unwrap();
    let state = snapshot.signature();
    let widgets = vec![
        widget(BUTTON, "sign_in", "Sign in", true),
        widget(BUTTON, "help", "Help", true),
    ];
    let mut cache = StateCache::new();
    cache.store_widgets(state.clone(), widgets.clone());

    let oracle = CountingOracle::default();
    let m = CandidateMatcher::new(&oracle, MatchOptions::default());
    let src = source(widget(BUTTON, "sign_in", "Sign in", true), &["click"]);

    let first = m.best_match(&mut cache, state, &src, &widgets).unwrap();
    let calls = oracle.calls.get();
    assert!(calls > 0);
    assert_eq!(first.widget.resource_id, "sign_in");

    let key = WidgetSignature::of(&src.record);
    assert_eq!(cache.most_similar(state, &key).map(|(w, _)| w.resource_id.as_str()), Some("sign_in"));

    let second = m.best_match(&mut cache, state, &src, &widgets).unwrap();
    assert_eq!(second, first);
    assert_eq!(oracle.calls.get(), calls, "second lookup served from cache");
}
