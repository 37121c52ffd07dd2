use crate::{closing_tag, opening_tag};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A nesting defect found while checking tag balance.
///
/// Diagnostics describe the input, not a failure of the checker. They are
/// reported in the order they were discovered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A tracked closing tag arrived while no tag was open.
    UnexpectedClose { tag: String, line: usize },

    /// A tracked closing tag did not match the most recently opened tag.
    ///
    /// The opener is consumed regardless.
    Mismatch {
        expected_tag: String,
        expected_open_line: usize,
        got_tag: String,
        got_line: usize,
    },

    /// A tracked tag was still open at end of input.
    Unclosed { tag: String, line: usize },
}

impl Diagnostic {
    /// Line at which the defect is reported.
    ///
    /// This is the closing line for unexpected closes and mismatches, and the
    /// opening line for unclosed tags.
    pub fn line(&self) -> usize {
        match self {
            Diagnostic::UnexpectedClose { line, .. } => *line,
            Diagnostic::Mismatch { got_line, .. } => *got_line,
            Diagnostic::Unclosed { line, .. } => *line,
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Diagnostic::UnexpectedClose { .. } => DiagnosticKind::UnexpectedClose,
            Diagnostic::Mismatch { .. } => DiagnosticKind::Mismatch,
            Diagnostic::Unclosed { .. } => DiagnosticKind::Unclosed,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnexpectedClose { tag, line } => {
                write!(
                    f,
                    "Error: Unexpected closing tag {} at line {}",
                    closing_tag(tag),
                    line
                )
            }
            Diagnostic::Mismatch {
                expected_tag,
                expected_open_line,
                got_tag,
                got_line,
            } => write!(
                f,
                "Error: Mismatched tag at line {}. Expected {} (opened at line {}) but got {}",
                got_line,
                closing_tag(expected_tag),
                expected_open_line,
                closing_tag(got_tag)
            ),
            Diagnostic::Unclosed { tag, line } => {
                write!(
                    f,
                    "Error: Unclosed tag {} opened at line {}",
                    opening_tag(tag),
                    line
                )
            }
        }
    }
}

/// Category of a [`Diagnostic`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    UnexpectedClose,
    Mismatch,
    Unclosed,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::UnexpectedClose => write!(f, "unexpected_close"),
            DiagnosticKind::Mismatch => write!(f, "mismatch"),
            DiagnosticKind::Unclosed => write!(f, "unclosed"),
        }
    }
}
