const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "in", "into", "is",
    "it", "its", "of", "on", "or", "that", "the", "this", "to", "was", "were", "will", "with",
    "your", "you",
];

/// Split an attribute value into lowercase words.
///
/// Breaks on anything that is not alphanumeric and on camelCase humps, so
/// `btnSignIn`, `btn_sign_in` and `Btn sign-in` all give `[btn, sign, in]`.
/// Stopword removal never empties a non-empty sequence.
pub fn tokenize(value: &str, use_stopwords: bool) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in value.chars() {
        if !c.is_alphanumeric() {
            flush(&mut current, &mut words);
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower {
            flush(&mut current, &mut words);
        }
        prev_lower = c.is_lowercase() || c.is_numeric();
        current.extend(c.to_lowercase());
    }
    flush(&mut current, &mut words);

    if use_stopwords {
        let kept: Vec<String> = words
            .iter()
            .filter(|w| !STOPWORDS.contains(&w.as_str()))
            .cloned()
            .collect();
        if !kept.is_empty() {
            return kept;
        }
    }
    words
}

fn flush(current: &mut String, words: &mut Vec<String>) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

