//! Error types for setlist-core.
//!
//! Per-row decode failures are not errors: malformed rows are dropped during
//! normalization. These variants cover values handed in by callers, such as a
//! window typed on the command line.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A trailing window string could not be parsed.
    #[error("Invalid window '{input}': expected a week count or 'all'")]
    InvalidWindow { input: String },

    /// A caller-supplied value failed validation.
    #[error("Validation error: {0}")]
    Validation(String),
}
