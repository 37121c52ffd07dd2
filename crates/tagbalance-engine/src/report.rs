use crate::validator::validate;
use serde::{Deserialize, Serialize};
use tagbalance_types::{Diagnostic, DiagnosticKind, TagEvent, TagSets};

/// Printed instead of an empty diagnostic list.
pub const SUCCESS_MESSAGE: &str = "Tags look balanced (for tracked tags)";

/// Outcome of checking one input buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceReport {
    /// Every tag-like token the tokenizer found.
    pub events_scanned: usize,
    /// Tokens whose name is tracked or self-closing.
    pub tracked_events: usize,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticCounts {
    pub unexpected_close: usize,
    pub mismatch: usize,
    pub unclosed: usize,
}

impl BalanceReport {
    pub fn from_events(events: &[TagEvent], sets: &TagSets) -> Self {
        Self {
            events_scanned: events.len(),
            tracked_events: events.iter().filter(|e| sets.is_known(&e.name)).count(),
            diagnostics: validate(events, sets),
        }
    }

    pub fn is_balanced(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn counts(&self) -> DiagnosticCounts {
        self.diagnostics
            .iter()
            .fold(DiagnosticCounts::default(), |mut acc, d| {
                match d.kind() {
                    DiagnosticKind::UnexpectedClose => acc.unexpected_close += 1,
                    DiagnosticKind::Mismatch => acc.mismatch += 1,
                    DiagnosticKind::Unclosed => acc.unclosed += 1,
                }
                acc
            })
    }

    /// One line per diagnostic, or the success message when there are none.
    pub fn lines(&self) -> Vec<String> {
        if self.is_balanced() {
            vec![SUCCESS_MESSAGE.to_string()]
        } else {
            self.diagnostics.iter().map(|d| d.to_string()).collect()
        }
    }
}
