//! Pattern-based extraction of tag-like tokens.
//!
//! This is not a markup parser. Each line is scanned for `<name` and
//! `</name>` with a single regular expression; text inside attributes,
//! strings or comments that happens to look like a tag is picked up too,
//! and names containing `-`, `.` or `:` are cut short or missed. That
//! approximation is accepted.

use regex::Regex;
use std::sync::LazyLock;
use tagbalance_types::TagEvent;

// Opening form is listed first so it wins at any position where both could
// start; `</` can never satisfy it because `/` is not alphanumeric.
static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([A-Za-z0-9]+)|</([A-Za-z0-9]+)>").unwrap());

/// Tokenize a single line. `line_no` is 1-based.
pub fn tokenize_line(line_no: usize, line: &str) -> Vec<TagEvent> {
    TAG_REGEX
        .captures_iter(line)
        .filter_map(|caps| {
            if let Some(open) = caps.get(1) {
                Some(TagEvent::open(open.as_str(), line_no))
            } else {
                caps.get(2)
                    .map(|close| TagEvent::close(close.as_str(), line_no))
            }
        })
        .collect()
}

/// Tokenize lines in order, numbering them from 1.
pub fn tokenize_lines<I, S>(lines: I) -> Vec<TagEvent>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .flat_map(|(idx, line)| tokenize_line(idx + 1, line.as_ref()))
        .collect()
}

/// Tokenize a whole buffer.
///
/// `\r\n`, `\n` and a lone `\r` all end a line.
pub fn tokenize(text: &str) -> Vec<TagEvent> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    tokenize_lines(normalized.lines())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_close_on_one_line() {
        let events = tokenize_line(1, "<div><span>text</span></div>");
        assert_eq!(
            events,
            vec![
                TagEvent::open("div", 1),
                TagEvent::open("span", 1),
                TagEvent::close("span", 1),
                TagEvent::close("div", 1),
            ]
        );
    }

    #[test]
    fn test_open_tag_without_closing_bracket() {
        // Multi-line JSX elements: the name is all that matters
        let events = tokenize_line(4, r#"<button className="btn""#);
        assert_eq!(events, vec![TagEvent::open("button", 4)]);
    }

    #[test]
    fn test_self_closing_syntax_is_just_an_open() {
        let events = tokenize_line(2, "<img src={logo} />");
        assert_eq!(events, vec![TagEvent::open("img", 2)]);
    }

    #[test]
    fn test_close_requires_bracket() {
        assert!(tokenize_line(1, "</div").is_empty());
        assert!(tokenize_line(1, "</ div>").is_empty());
    }

    #[test]
    fn test_non_alphanumeric_names_are_cut_short() {
        // Known limitation: hyphenated names yield their alphanumeric prefix
        let events = tokenize_line(1, "<my-widget></my-widget>");
        assert_eq!(events, vec![TagEvent::open("my", 1)]);
    }

    #[test]
    fn test_fragments_and_comparisons() {
        assert!(tokenize_line(1, "<></>").is_empty());
        assert!(tokenize_line(1, "if (a < b) {").is_empty());
        // `a <b` looks like a tag to a pattern scan
        assert_eq!(tokenize_line(1, "a <b"), vec![TagEvent::open("b", 1)]);
    }

    #[test]
    fn test_line_numbers_are_one_based() {
        let events = tokenize("<div>\n  <p>\n  </p>\r\n</div>\n");
        assert_eq!(
            events,
            vec![
                TagEvent::open("div", 1),
                TagEvent::open("p", 2),
                TagEvent::close("p", 3),
                TagEvent::close("div", 4),
            ]
        );
    }

    #[test]
    fn test_carriage_return_only_line_endings() {
        let events = tokenize("<div>\r<span>\r</div>\r");
        assert_eq!(
            events,
            vec![
                TagEvent::open("div", 1),
                TagEvent::open("span", 2),
                TagEvent::close("div", 3),
            ]
        );
    }

    #[test]
    fn test_mixed_line_endings() {
        let events = tokenize("<p>\r\n<nav>\r</nav>\n</p>");
        let lines: Vec<usize> = events.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize_lines(Vec::<String>::new()).is_empty());
    }
}
