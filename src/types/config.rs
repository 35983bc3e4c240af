use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConverterConfig {
    pub normalize: Option<NormalizeConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NormalizeConfig {
    pub unknown_linter: Option<UnknownLinterPolicy>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub order: Option<RecordOrder>,
}

/// What to do with an issue whose `FromLinter` is missing from `Report.Linters`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownLinterPolicy {
    #[default]
    Fail,
    Synthesize,
}

/// Order in which virtual tests are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordOrder {
    /// Sorted by linter name.
    #[default]
    Name,
    /// As listed in `Report.Linters`.
    Report,
}

impl ConverterConfig {
    pub fn unknown_linter(&self) -> UnknownLinterPolicy {
        self.normalize
            .as_ref()
            .and_then(|normalize| normalize.unknown_linter)
            .unwrap_or_default()
    }

    pub fn order(&self) -> RecordOrder {
        self.output
            .as_ref()
            .and_then(|output| output.order)
            .unwrap_or_default()
    }
}
