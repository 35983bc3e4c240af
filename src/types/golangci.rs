//! Decoded form of `golangci-lint run --out-format json`.
//!
//! Only the fields the converter reads are modelled; everything else in the
//! document is ignored by serde.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LintResult {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub report: ReportData,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Issue {
    pub from_linter: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub pos: Position,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Position {
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub line: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReportData {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub linters: Vec<LinterInfo>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub warnings: Vec<Warning>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LinterInfo {
    pub name: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub enabled_by_default: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Warning {
    #[serde(default)]
    pub tag: String,
    pub text: String,
}

impl Issue {
    pub fn file_path(&self) -> &str {
        &self.pos.filename
    }

    pub fn line(&self) -> u64 {
        self.pos.line
    }

    /// `<file>:<line>`, used when reporting this issue in diagnostics.
    pub fn location(&self) -> String {
        format!("{}:{}", self.file_path(), self.line())
    }
}

// golangci-lint encodes an empty Go slice as `null`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
