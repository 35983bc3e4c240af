use crate::error::{Error, Result};
use crate::types::golangci::LintResult;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Reads the report from `path`, or from stdin when `path` is `None` or `-`.
pub fn load(path: Option<&Path>) -> Result<LintResult> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path).map_err(|source| Error::InputRead {
                path: path.display().to_string(),
                source,
            })?;
            read_report(BufReader::new(file))
        }
        _ => read_report(io::stdin().lock()),
    }
}

pub fn read_report<R: Read>(reader: R) -> Result<LintResult> {
    let result: LintResult = serde_json::from_reader(reader)?;
    if let Some(error) = result.report.error.as_deref().filter(|e| !e.is_empty()) {
        tracing::warn!("golangci-lint reported an error: {error}");
    }
    for warning in &result.report.warnings {
        tracing::warn!(tag = %warning.tag, "golangci-lint warning: {}", warning.text);
    }
    Ok(result)
}
