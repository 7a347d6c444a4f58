// Error types for the ERP end-to-end suite

use crate::constants::CrudAction;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for suite operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by actions, fixtures and the batch runner
#[derive(Debug, Error)]
pub enum Error {
    /// Browser automation failure (locator timeout, closed page, protocol error)
    #[error("Browser automation error: {0}")]
    Driver(#[from] playwright_rs::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid or missing configuration value
    ///
    /// Raised when an `ERP_*` environment variable cannot be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A fixture file could not be read or parsed
    #[error("Failed to load test data from '{}': {source}", path.display())]
    TestData {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    /// Navigation inside the ERP did not reach the expected screen
    #[error("Navigation failed: {0}")]
    Navigation(String),

    /// A UI check (toast, field value, validation message) did not hold
    #[error("Assertion failed: {0}")]
    Assertion(String),

    /// One or more records of a batch failed
    ///
    /// Only produced after every record was processed and the summary exported.
    #[error("{entity} {} failed for: {}", action.noun(), records.join(", "))]
    BatchFailed {
        entity: String,
        action: CrudAction,
        records: Vec<String>,
    },

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }
}
