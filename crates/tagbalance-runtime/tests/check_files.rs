// Integration tests for the complete flow: file on disk → config → engine → report
use tagbalance_runtime::{Checker, Config, Error, Source};
use tagbalance_types::Diagnostic;
use tempfile::TempDir;

#[test]
fn test_check_files_with_config() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        "[tags]\ntracked = [\"main\", \"div\"]\nself_closing = [\"br\"]\n",
    )?;
    let good = temp_dir.path().join("good.html");
    std::fs::write(&good, "<main>\n  <div>one<br>two</div>\n</main>\n")?;
    let bad = temp_dir.path().join("bad.html");
    std::fs::write(&bad, "<main>\n  <div>\n</main>\n")?;

    let config = Config::load_from(&config_path)?;
    let checker = Checker::new(config.tags);
    let reports = checker.check_all(&[Source::File(good), Source::File(bad)])?;

    assert_eq!(reports.len(), 2);
    assert!(reports[0].is_balanced());
    assert_eq!(
        reports[1].report.diagnostics,
        vec![
            Diagnostic::Mismatch {
                expected_tag: "div".to_string(),
                expected_open_line: 2,
                got_tag: "main".to_string(),
                got_line: 3,
            },
            Diagnostic::Unclosed {
                tag: "main".to_string(),
                line: 1,
            },
        ]
    );
    Ok(())
}

#[test]
fn test_missing_file_stops_the_run() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let present = temp_dir.path().join("present.jsx");
    std::fs::write(&present, "<div></div>")?;

    let checker = Checker::new(Default::default());
    let err = checker
        .check_all(&[
            Source::File(present),
            Source::File(temp_dir.path().join("missing.jsx")),
        ])
        .unwrap_err();
    assert!(matches!(err, Error::SourceNotFound(_)));
    Ok(())
}
