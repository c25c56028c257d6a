//! Errors the `colorful` binary can exit with.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: picker error (bad surface size, disabled RGB channel)
//! - 11: I/O error (config read, snapshot write)
//! - 12: input error (malformed `--pointer`, unparsable config, dropped write)
//! - 13: JSON output failure

use std::path::PathBuf;

use colorful_core::{Channel, PickerError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Picker(PickerError),

    #[error("{0}")]
    Io(String),

    /// A `--pointer` argument that is not `SURFACE:X,Y`.
    #[error("invalid --pointer '{spec}': {reason}")]
    Pointer { spec: String, reason: String },

    /// A config file that exists but does not parse or validate as JSON.
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// A channel value the model refused (NaN, or an infinite hue).
    #[error("--{} {value} was not applied: value is not a number", channel.name())]
    Rejected { channel: Channel, value: f64 },

    #[error("failed to write JSON output: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Picker(_) => 10,
            CliError::Io(_) => 11,
            CliError::Pointer { .. } | CliError::Config { .. } | CliError::Rejected { .. } => 12,
            CliError::Serialization(_) => 13,
        }
    }

    /// Short machine-readable category, reported in `--json` mode.
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::Picker(_) => "picker",
            CliError::Io(_) => "io",
            CliError::Pointer { .. } => "pointer",
            CliError::Config { .. } => "config",
            CliError::Rejected { .. } => "rejected",
            CliError::Serialization(_) => "serialization",
        }
    }

    /// The error object printed to stderr in `--json` mode.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": self.to_string(),
            "kind": self.kind(),
            "exit_code": self.exit_code(),
        })
    }
}

impl From<PickerError> for CliError {
    fn from(e: PickerError) -> Self {
        match e {
            PickerError::Io(msg) => CliError::Io(msg),
            other => CliError::Picker(other),
        }
    }
}
