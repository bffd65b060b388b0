use std::sync::LazyLock;

use regex::Regex;

use crate::widget::widget_model::{
    BUTTON, EDIT_TEXT, IMAGE_BUTTON, MULTI_AUTO_COMPLETE, SourceWidget, TEXT_VIEW,
};

static URL_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https://\w+\.\w+").expect("url regex is valid"));

pub fn looks_like_url(text: &str) -> bool {
    URL_TEXT.is_match(text)
}

/// Facts about a source widget that class rules can depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleContext {
    pub clickable: bool,
    pub url_text: bool,
    pub wait_for_text: bool,
    pub expand_button_to_text: bool,
}

impl RuleContext {
    pub fn of(source: &SourceWidget, expand_button_to_text: bool) -> Self {
        Self {
            clickable: source.record.is_clickable(),
            url_text: looks_like_url(&source.record.text),
            wait_for_text: source.action_is(|a| a.is_wait_for_text()),
            expand_button_to_text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    ExpandButtonToText,
    Clickable,
    ClickableWithUrlText,
    NotClickableWaitingForText,
    WaitingForText,
    UrlText,
}

impl Condition {
    pub fn holds(self, ctx: &RuleContext) -> bool {
        match self {
            Condition::ExpandButtonToText => ctx.expand_button_to_text,
            Condition::Clickable => ctx.clickable,
            Condition::ClickableWithUrlText => ctx.clickable && ctx.url_text,
            Condition::NotClickableWaitingForText => !ctx.clickable && ctx.wait_for_text,
            Condition::WaitingForText => ctx.wait_for_text,
            Condition::UrlText => ctx.url_text,
        }
    }
}

#[derive(Debug)]
pub struct Extension {
    pub when: Condition,
    pub add: &'static [&'static str],
}

/// Target classes acceptable for a group of source classes.
#[derive(Debug)]
pub struct ClassRule {
    pub sources: &'static [&'static str],
    pub targets: &'static [&'static str],
    pub extensions: &'static [Extension],
}

pub static CLASS_RULES: &[ClassRule] = &[
    ClassRule {
        sources: &[BUTTON, IMAGE_BUTTON],
        targets: &[IMAGE_BUTTON, BUTTON],
        extensions: &[Extension {
            when: Condition::ExpandButtonToText,
            add: &[TEXT_VIEW],
        }],
    },
    ClassRule {
        sources: &[TEXT_VIEW],
        targets: &[TEXT_VIEW],
        extensions: &[
            Extension {
                when: Condition::Clickable,
                add: &[IMAGE_BUTTON, BUTTON],
            },
            Extension {
                when: Condition::ClickableWithUrlText,
                add: &[EDIT_TEXT],
            },
            Extension {
                when: Condition::NotClickableWaitingForText,
                add: &[EDIT_TEXT],
            },
        ],
    },
    ClassRule {
        sources: &[EDIT_TEXT],
        targets: &[EDIT_TEXT, MULTI_AUTO_COMPLETE],
        extensions: &[
            Extension {
                when: Condition::WaitingForText,
                add: &[TEXT_VIEW],
            },
            Extension {
                when: Condition::UrlText,
                add: &[TEXT_VIEW],
            },
        ],
    },
    ClassRule {
        sources: &[MULTI_AUTO_COMPLETE],
        targets: &[MULTI_AUTO_COMPLETE, EDIT_TEXT],
        extensions: &[],
    },
];

/// Classes a target widget may have to be a candidate for `class`. Classes
/// without a rule only match themselves.
pub fn target_classes(class: &str, ctx: &RuleContext) -> Vec<String> {
    let Some(rule) = CLASS_RULES.iter().find(|r| r.sources.contains(&class)) else {
        return vec![class.to_string()];
    };

    let mut classes: Vec<String> = rule.targets.iter().map(|c| c.to_string()).collect();
    for ext in rule.extensions.iter().filter(|e| e.when.holds(ctx)) {
        for added in ext.add {
            if !classes.iter().any(|c| c == added) {
                classes.push(added.to_string());
            }
        }
    }
    classes
}
