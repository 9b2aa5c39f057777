//! Error taxonomy for the API reference pipeline.
//!
//! Every variant is terminal: `main` surfaces it through anyhow and the
//! process exits non-zero without writing the output file.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot find analyzer configuration file {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("failed to start {program}")]
    ToolSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {}", exit_label(.code))]
    ToolExecutionFailed { program: String, code: Option<i32> },

    #[error("analyzer did not produce {}", .0.display())]
    MissingDump(PathBuf),

    #[error("invalid documentation dump: {0}")]
    InvalidDump(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid root namespace pattern")]
    Pattern(#[from] regex::Error),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {}", code),
        None => "a signal".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, Error>;
