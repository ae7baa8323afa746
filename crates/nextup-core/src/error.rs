//! Core error types for nextup-core.
//!
//! Boundary failures are values, never panics: every engine entry point
//! returns a structured error the caller can render as an error envelope.

use thiserror::Error;

/// Errors surfaced by the engine boundary.
///
/// Per-task irregularities (bad dates, missing fields) never produce an
/// error; they are absorbed by the normalizer. Only container-level
/// problems and an empty suggestion input reach the caller.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The input container could not be interpreted as a task list.
    #[error("invalid payload: {message}")]
    InvalidPayload { message: String },

    /// Suggest was called with zero tasks.
    #[error("no tasks provided - nothing to suggest")]
    NothingToSuggest,

    /// A strategy key did not match any known strategy.
    ///
    /// Only produced when the policy enables strict strategy parsing;
    /// the default policy falls back to its default strategy instead.
    #[error("unknown strategy: {key}")]
    UnknownStrategy { key: String },
}

/// Errors from loading a scoring policy file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The TOML document could not be parsed
    #[error("failed to parse policy file: {0}")]
    ParseFailed(String),

    /// A key parsed but holds an unusable value
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for EngineError
pub type Result<T, E = EngineError> = std::result::Result<T, E>;
