//! # CLI Error Type
//!
//! Unified error type for subcommands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Subcommand                                                             │
//! │  Result<String, CliError>                                               │
//! │       │                                                                 │
//! │       ├── Job file unreadable?  ─── CliError::Io / CliError::Json       │
//! │       ├── Bad input?            ─── CliError::Validation                │
//! │       ├── Storage failed?       ─── CliError::Db                        │
//! │       ▼                                                                 │
//! │  main: "error: <message>" on stderr, exit code 1                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use thiserror::Error;
use tilequote_core::{CoreError, ValidationError};
use tilequote_db::DbError;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not encode output: {0}")]
    Json(#[from] serde_json::Error),

    /// Nothing measured yet, so there is no quote to send.
    #[error("Add some measurements before sharing a quote")]
    NothingToShare,

    #[error("Could not read a number from '{0}'")]
    Unrecognised(String),

    #[error("No working document stored")]
    NoWorkspace,
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
