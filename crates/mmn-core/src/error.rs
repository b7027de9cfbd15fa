//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `MmnError` as one
//! variant via `From`, so configuration failures surface unchanged.

use thiserror::Error;

/// The top-level error type for `mmn-core`.
#[derive(Debug, Error)]
pub enum MmnError {
    #[error("invalid {name} = {value}: {reason}")]
    InvalidParameter {
        name:   &'static str,
        value:  String,
        reason: &'static str,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

impl MmnError {
    pub(crate) fn invalid(name: &'static str, value: impl ToString, reason: &'static str) -> Self {
        MmnError::InvalidParameter { name, value: value.to_string(), reason }
    }
}

/// Shorthand result type for all `mmn-*` crates.
pub type MmnResult<T> = Result<T, MmnError>;
