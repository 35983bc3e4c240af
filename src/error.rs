use crate::exit_code;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("reading results: {path}: {source}")]
    InputRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("reading results: decoding input: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("issue at {location} references unknown linter: {linter}")]
    UnknownLinter { linter: String, location: String },

    #[error("writing service messages: {0}")]
    Write(#[source] std::io::Error),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InputRead { .. } | Error::Decode(_) | Error::UnknownLinter { .. } => {
                exit_code::INPUT_FAILURE
            }
            Error::Write(_) => exit_code::OUTPUT_FAILURE,
            Error::ConfigNotFound(_) | Error::ConfigParse(_) | Error::Io(_) => {
                exit_code::CONFIG_FAILURE
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
