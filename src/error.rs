//! Error types for catalog fetch and export operations.

use http::StatusCode;
use thiserror::Error;

/// Result type alias using the crate's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the metadata retriever and the export helpers.
///
/// The first three variants are the caller-facing taxonomy: callers are
/// expected to match on them (for example to distinguish a revoked token from
/// an exhausted quota). The remaining variants wrap the plumbing underneath.
#[derive(Debug, Error)]
pub enum Error {
    /// No usable credential material was supplied.
    ///
    /// Raised before any network activity takes place.
    #[error("authentication required: {0}")]
    Authentication(String),

    /// The catalog API answered a required request with a non-success status.
    ///
    /// The message is taken from the API's structured error body when one is
    /// present, and falls back to the HTTP status' canonical reason otherwise.
    #[error("YouTube API error: {status} - {message}")]
    RemoteApi {
        /// HTTP status returned by the API.
        status: StatusCode,
        /// Human-readable message extracted from the error response.
        message: String,
    },

    /// A channel lookup matched no channels.
    #[error("no channel found for {0}")]
    NotFound(String),

    /// Failure below HTTP status semantics: connect, body read, JSON decode.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Serialization error while producing the JSON export.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error while writing the JSON export.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
