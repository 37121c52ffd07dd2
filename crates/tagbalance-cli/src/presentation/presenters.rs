use super::view_models::{CheckResultViewModel, FileCheckViewModel};
use tagbalance_runtime::FileReport;

pub fn present_check(reports: &[FileReport]) -> CheckResultViewModel {
    let files: Vec<FileCheckViewModel> = reports.iter().map(present_file).collect();
    let balanced = files.iter().all(|f| f.balanced);
    CheckResultViewModel { files, balanced }
}

fn present_file(report: &FileReport) -> FileCheckViewModel {
    FileCheckViewModel {
        path: report.path.clone(),
        balanced: report.is_balanced(),
        events_scanned: report.report.events_scanned,
        tracked_events: report.report.tracked_events,
        counts: report.report.counts(),
        diagnostics: report.report.diagnostics.clone(),
    }
}
