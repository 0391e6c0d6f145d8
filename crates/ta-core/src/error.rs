//! Shared error type for parsing and configuration.
//!
//! Sub-crates define their own error enums and wrap `CoreError` via `From`
//! where a core parse can fail inside them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `ta-core`.
pub type CoreResult<T> = Result<T, CoreError>;
