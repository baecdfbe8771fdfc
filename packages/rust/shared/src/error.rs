//! Error types for metaparser.
//!
//! Library crates use [`MetaparserError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.
//!
//! Fetch failures and parse failures are separate domains: a fetch failure
//! is always a [`FetchError`], a parse failure is always
//! [`MetaparserError::Parse`]. Neither carries a partial result.

use std::path::PathBuf;

/// Top-level error type for all metaparser operations.
#[derive(Debug, thiserror::Error)]
pub enum MetaparserError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Network/HTTP failure while retrieving a document.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The tokenizer could not read the byte stream.
    #[error("parse error: {source}")]
    Parse { source: std::io::Error },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Data validation error (bad CLI input, unsupported value, etc.).
    #[error("validation error: {message}")]
    Validation { message: String },
}

/// Failures of the HTTP fetch collaborator.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The target could not be turned into a URL.
    #[error("invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// Connection, TLS, timeout or body read failure.
    #[error("network error: {url}: {message}")]
    Transport { url: String, message: String },

    /// The server answered with a non-2xx status.
    #[error("{url}: HTTP {status}")]
    Status { url: String, status: u16 },

    /// The body reached the configured size cap.
    #[error("{url}: body too large (limit {limit} bytes)")]
    BodyTooLarge { url: String, limit: u64 },

    /// The server answered 2xx with no body.
    #[error("{url}: empty response")]
    EmptyBody { url: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, MetaparserError>;

impl MetaparserError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Wrap a tokenizer read fault.
    pub fn parse(source: std::io::Error) -> Self {
        Self::Parse { source }
    }

    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for failures of the fetch collaborator.
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }

    /// True for failures of the document parse itself.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

impl FetchError {
    /// Create a transport error for `url`.
    pub fn transport(url: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Transport {
            url: url.into(),
            message: err.to_string(),
        }
    }
}
