// Engine module - Core checking logic (tokenize, validate, report)
// This layer sits between raw text (runtime) and CLI presentation

pub mod report;
pub mod tokenizer;
pub mod validator;

pub use report::{BalanceReport, DiagnosticCounts, SUCCESS_MESSAGE};
pub use tokenizer::{tokenize, tokenize_line, tokenize_lines};
pub use validator::{Validator, validate};

use tagbalance_types::TagSets;

// Façade API - Stable public interface for runtime and CLI layers

/// Check tag balance of a whole text buffer.
///
/// Never fails: malformed input simply yields diagnostics.
pub fn check_text(text: &str, sets: &TagSets) -> BalanceReport {
    let events = tokenize(text);
    BalanceReport::from_events(&events, sets)
}

/// Check tag balance of already-split lines (terminators excluded).
pub fn check_lines<I, S>(lines: I, sets: &TagSets) -> BalanceReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let events = tokenize_lines(lines);
    BalanceReport::from_events(&events, sets)
}
