//! Error types shared by the cut-list crates.

use thiserror::Error;

/// Errors raised at the parsing, configuration and lookup boundaries.
///
/// Accumulation, ordering and export never fail; they are pure in-memory
/// transformations. Only inputs coming from users or configuration files
/// go through this type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A dimension is negative, NaN or infinite.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// A textual value could not be parsed.
    #[error("failed to parse {0}")]
    ParseError(String),

    /// A configuration value is inconsistent or malformed.
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// A part definition was not found.
    #[error("not found: {0}")]
    NotFound(String),
}

/// Result alias using the crate [`enum@Error`].
pub type Result<T> = std::result::Result<T, Error>;
