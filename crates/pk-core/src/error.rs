//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `PkError` as one variant
//! via `#[from]`, so configuration failures surface unchanged at the top.

use thiserror::Error;

/// The top-level error type for `pk-core`.
#[derive(Debug, Error)]
pub enum PkError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown allocation mode {0:?} (expected FCFS, AUCTION or PRIORITY)")]
    UnknownMode(String),
}

/// Shorthand result type for `pk-core`.
pub type PkResult<T> = Result<T, PkError>;
