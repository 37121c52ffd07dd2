use crate::{Error, Result, is_valid_tag_name};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Tag names that take part in balance checking by default.
pub const DEFAULT_TRACKED: &[&str] = &[
    "div", "header", "nav", "Link", "span", "h1", "h2", "p", "button", "form", "section",
];

/// Tag names that never expect a closing tag by default.
///
/// Mostly void HTML elements plus icon and widget components that are
/// always written self-closing.
pub const DEFAULT_SELF_CLOSING: &[&str] = &[
    "img",
    "br",
    "hr",
    "input",
    "Bell",
    "LogOut",
    "Menu",
    "X",
    "SchoolSwitcher",
    "FeedbackManager",
    "SubscriptionBlockBanner",
    "Book",
    "Users",
    "DollarSign",
    "FileText",
    "LayoutDashboard",
    "Landmark",
    "MessageSquare",
    "BarChart2",
    "Loader2",
    "GoogleMeetAuth",
    "FeedbackPopup",
];

/// The two name sets that drive a check.
///
/// Names are case-sensitive. A name present in both sets is treated as
/// self-closing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSets {
    #[serde(default = "default_tracked")]
    pub tracked: BTreeSet<String>,
    #[serde(default = "default_self_closing")]
    pub self_closing: BTreeSet<String>,
}

fn default_tracked() -> BTreeSet<String> {
    DEFAULT_TRACKED.iter().map(|s| s.to_string()).collect()
}

fn default_self_closing() -> BTreeSet<String> {
    DEFAULT_SELF_CLOSING.iter().map(|s| s.to_string()).collect()
}

impl Default for TagSets {
    fn default() -> Self {
        Self {
            tracked: default_tracked(),
            self_closing: default_self_closing(),
        }
    }
}

impl TagSets {
    /// Sets with no names at all; nothing is tracked.
    pub fn empty() -> Self {
        Self {
            tracked: BTreeSet::new(),
            self_closing: BTreeSet::new(),
        }
    }

    pub fn new<T, S>(tracked: T, self_closing: S) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            tracked: tracked.into_iter().map(Into::into).collect(),
            self_closing: self_closing.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_tracked(&self, name: &str) -> bool {
        self.tracked.contains(name)
    }

    pub fn is_self_closing(&self, name: &str) -> bool {
        self.self_closing.contains(name)
    }

    /// Whether the name is known to either set.
    pub fn is_known(&self, name: &str) -> bool {
        self.is_tracked(name) || self.is_self_closing(name)
    }

    pub fn track(&mut self, name: impl Into<String>) {
        self.tracked.insert(name.into());
    }

    pub fn mark_self_closing(&mut self, name: impl Into<String>) {
        self.self_closing.insert(name.into());
    }

    /// Reject names the tokenizer could never produce.
    pub fn validate(&self) -> Result<()> {
        for name in self.tracked.iter().chain(self.self_closing.iter()) {
            if !is_valid_tag_name(name) {
                return Err(Error::InvalidTagName(name.clone()));
            }
        }
        Ok(())
    }
}
