//! Error types for decoding results off the wire.

use thiserror::Error;

use crate::result::ResultKind;

/// Errors that can occur while decoding an execution result.
///
/// A failed *evaluation* is not one of these: it decodes successfully into
/// [`ResultValue::Error`](crate::result::ResultValue::Error).
#[derive(Error, Debug)]
pub enum WireError {
    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected result type '{class}' at {path}")]
    UnknownClass { class: String, path: String },

    #[error("Missing result type at {path}")]
    MissingType { path: String },

    #[error("Missing {field} for {kind} result at {path}")]
    MissingPayload {
        kind: ResultKind,
        field: &'static str,
        path: String,
    },
}

pub type Result<T> = std::result::Result<T, WireError>;
