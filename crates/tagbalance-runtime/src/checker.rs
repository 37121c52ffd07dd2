use crate::Result;
use crate::source::{Source, read_source};
use serde::Serialize;
use tagbalance_engine::{BalanceReport, check_text};
use tagbalance_types::TagSets;

/// Report for one checked source.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: String,
    #[serde(flatten)]
    pub report: BalanceReport,
}

impl FileReport {
    pub fn is_balanced(&self) -> bool {
        self.report.is_balanced()
    }
}

/// Runs checks with one fixed set of tag names.
///
/// Every call starts from an empty stack; nothing carries over between
/// sources.
pub struct Checker {
    sets: TagSets,
}

impl Checker {
    pub fn new(sets: TagSets) -> Self {
        Self { sets }
    }

    pub fn check_str(&self, name: impl Into<String>, text: &str) -> FileReport {
        FileReport {
            path: name.into(),
            report: check_text(text, &self.sets),
        }
    }

    pub fn check_source(&self, source: &Source) -> Result<FileReport> {
        let text = read_source(source)?;
        let report = self.check_str(source.to_string(), &text);
        log::info!(
            "{}: {} tag event(s), {} diagnostic(s)",
            report.path,
            report.report.events_scanned,
            report.report.diagnostics.len()
        );
        Ok(report)
    }

    /// Check sources in order, stopping at the first one that cannot be read.
    pub fn check_all(&self, sources: &[Source]) -> Result<Vec<FileReport>> {
        sources.iter().map(|s| self.check_source(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_str_uses_configured_sets() {
        let checker = Checker::new(TagSets::new(["main"], Vec::<String>::new()));
        let report = checker.check_str("inline", "<main>\n<div>\n");
        assert_eq!(report.path, "inline");
        assert_eq!(report.report.diagnostics.len(), 1);
    }

    #[test]
    fn test_no_state_between_checks() {
        let checker = Checker::new(TagSets::default());
        let first = checker.check_str("a", "<div>");
        let second = checker.check_str("b", "</div>");
        assert_eq!(first.report.diagnostics.len(), 1);
        // The first buffer's open div must not satisfy this close
        assert_eq!(second.report.diagnostics.len(), 1);
        assert!(!second.is_balanced());
    }
}
