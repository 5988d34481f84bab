//! Error types for the harvester.
//!
//! Everything that can go wrong between reading the catalog page and writing
//! the JSON plan is a `HarvesterError`. Pattern misses in course titles are not
//! errors; they simply produce empty requirements.

use thiserror::Error;

/// Main error type for the harvester library.
#[derive(Debug, Error)]
pub enum HarvesterError {
    /// The source argument is neither a usable URL nor a file path.
    #[error("Invalid catalog source: '{0}'. Expected an http(s) URL or a path to an HTML file")]
    InvalidSource(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to download the catalog page.
    #[error("Failed to download catalog page {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// All retry attempts failed.
    #[error("Download failed after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },

    /// Response body exceeds the configured limit.
    #[error("Response from {url} is too large: {size} bytes (limit {limit} bytes)")]
    ResponseTooLarge { url: String, size: u64, limit: u64 },

    /// Expected catalog element is absent.
    #[error("Missing required catalog element: {element} in {context}")]
    MissingElement { element: String, context: String },

    /// Expected attribute is absent on a catalog element.
    #[error("Missing required attribute '{attribute}' on {element}")]
    MissingAttribute { attribute: String, element: String },

    /// An "or" continuation appeared before any requirement was opened.
    #[error("Continuation option '{course}' has no preceding requirement to extend")]
    OrphanContinuation { course: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Result type alias for harvester operations.
pub type Result<T> = std::result::Result<T, HarvesterError>;
