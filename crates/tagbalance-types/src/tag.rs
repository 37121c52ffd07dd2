use crate::{closing_tag, opening_tag};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a tag occurrence opens or closes an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    Open,
    Close,
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagKind::Open => write!(f, "open"),
            TagKind::Close => write!(f, "close"),
        }
    }
}

/// A tag-like token found in the input.
///
/// Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagEvent {
    pub kind: TagKind,
    pub name: String,
    pub line: usize,
}

impl TagEvent {
    pub fn open(name: impl Into<String>, line: usize) -> Self {
        Self {
            kind: TagKind::Open,
            name: name.into(),
            line,
        }
    }

    pub fn close(name: impl Into<String>, line: usize) -> Self {
        Self {
            kind: TagKind::Close,
            name: name.into(),
            line,
        }
    }

    pub fn is_open(&self) -> bool {
        self.kind == TagKind::Open
    }

    pub fn is_close(&self) -> bool {
        self.kind == TagKind::Close
    }
}

impl fmt::Display for TagEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TagKind::Open => write!(f, "{} (line {})", opening_tag(&self.name), self.line),
            TagKind::Close => write!(f, "{} (line {})", closing_tag(&self.name), self.line),
        }
    }
}

/// A pending open tag waiting on the validator stack for its close.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenTag {
    pub name: String,
    pub line: usize,
}

impl OpenTag {
    pub fn new(name: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            line,
        }
    }
}

impl From<&TagEvent> for OpenTag {
    fn from(event: &TagEvent) -> Self {
        Self {
            name: event.name.clone(),
            line: event.line,
        }
    }
}
