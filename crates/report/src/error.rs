// Copyright 2025 Million Hello Challenge Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for report generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a report run.
///
/// Tolerated document drift (missing timestamp, missing hardware table,
/// short table lines) never surfaces here.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The input document could not be read.
    #[error("failed to read {}", path.display())]
    Read {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The output file or its parent directory could not be written.
    #[error("failed to write {}", path.display())]
    Write {
        /// Path that was being written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A mandatory section header is absent from the document.
    #[error("could not find section \"{0}\"")]
    MissingSection(&'static str),

    /// A numeric cell of a results row could not be parsed.
    #[error("line {line}: column `{column}` has invalid value {value:?}: {reason}")]
    InvalidCell {
        /// 1-based line number in the input document.
        line: usize,
        /// Name of the offending column.
        column: &'static str,
        /// The raw cell text.
        value: String,
        /// Why the cell was rejected.
        reason: String,
    },

    /// The HTML template did not contain the data placeholder exactly once.
    #[error("template must contain the data placeholder exactly once, found {found}")]
    Placeholder {
        /// Number of occurrences found.
        found: usize,
    },

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for report operations.
pub type Result<T> = std::result::Result<T, ReportError>;
