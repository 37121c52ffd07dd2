//! Assertions over `tagbalance check --format json` output.

use anyhow::{Context, Result};
use serde_json::Value;

fn files(json: &Value) -> Result<&Vec<Value>> {
    json["files"]
        .as_array()
        .context("Expected 'files' array in JSON")
}

/// Assert that the output covers the expected number of files.
pub fn assert_file_count(json: &Value, expected: usize) -> Result<()> {
    let files = files(json)?;
    if files.len() != expected {
        anyhow::bail!("Expected {} files, got {}", expected, files.len());
    }
    Ok(())
}

/// Assert the overall `balanced` flag.
pub fn assert_balanced(json: &Value, expected: bool) -> Result<()> {
    let balanced = json["balanced"]
        .as_bool()
        .context("Expected 'balanced' bool in JSON")?;
    if balanced != expected {
        anyhow::bail!("Expected balanced={}, got {}", expected, balanced);
    }
    Ok(())
}

/// Assert the diagnostic kinds reported for one file, in order.
pub fn assert_diagnostic_kinds(json: &Value, file_index: usize, expected: &[&str]) -> Result<()> {
    let file = files(json)?
        .get(file_index)
        .with_context(|| format!("No file at index {}", file_index))?;
    let diagnostics = file["diagnostics"]
        .as_array()
        .context("Expected 'diagnostics' array in file entry")?;

    let kinds: Vec<&str> = diagnostics
        .iter()
        .enumerate()
        .map(|(i, d)| {
            d["kind"]
                .as_str()
                .with_context(|| format!("Diagnostic {} missing kind", i))
        })
        .collect::<Result<_>>()?;

    if kinds != expected {
        anyhow::bail!("Expected diagnostics {:?}, got {:?}", expected, kinds);
    }
    Ok(())
}
