/// Check whether a name could ever be produced by the tokenizer.
///
/// Names are one or more ASCII letters or digits; anything else (hyphens,
/// namespaces, whitespace) is never matched in markup.
pub fn is_valid_tag_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Render a closing tag for display, e.g. `</div>`
pub fn closing_tag(name: &str) -> String {
    format!("</{}>", name)
}

/// Render an opening tag for display, e.g. `<div>`
pub fn opening_tag(name: &str) -> String {
    format!("<{}>", name)
}
