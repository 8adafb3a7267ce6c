//! Errors for loading and configuring a social network from outside input.
//!
//! Graph and friendship operations themselves never error; they report
//! failure through `bool`/`Option`/sentinels. Only file and settings input
//! can fail in ways worth a typed error.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scenario JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("friendship {index} references user #{user}, but only {user_count} users are defined")]
    UnknownUser {
        index: usize,
        user: usize,
        user_count: usize,
    },

    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
}

pub type Result<T> = std::result::Result<T, NetworkError>;
