use serde::Serialize;
use tagbalance_engine::DiagnosticCounts;
use tagbalance_types::Diagnostic;

#[derive(Debug, Clone, Serialize)]
pub struct CheckResultViewModel {
    pub files: Vec<FileCheckViewModel>,
    pub balanced: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct FileCheckViewModel {
    pub path: String,
    pub balanced: bool,
    pub events_scanned: usize,
    pub tracked_events: usize,
    pub counts: DiagnosticCounts,
    pub diagnostics: Vec<Diagnostic>,
}
