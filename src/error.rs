//! Error types for perf-visual

use thiserror::Error;

/// Failure to turn one raw cell into a number
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CleanError {
    /// The unit keyword does not occur in the cell
    #[error("value {value:?} does not contain unit {unit:?}")]
    MissingUnit {
        /// The raw cell
        value: String,
        /// The unit keyword that was expected
        unit: String,
    },

    /// The text before the unit is not a number
    #[error("unable to parse {text:?} as a number")]
    NotNumeric {
        /// The trimmed text that failed to parse
        text: String,
    },
}

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON syntax error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Top-level JSON value cannot be read as a table
    #[error("unsupported JSON layout: {0}")]
    UnsupportedShape(String),

    /// A cell holds something other than a string or null
    #[error("column {column:?}, run {run}: expected a string, found {found}")]
    NonStringCell {
        /// Metric name
        column: String,
        /// Run label
        run: String,
        /// JSON type that was found
        found: &'static str,
    },

    /// A cell could not be cleaned
    #[error("column {column:?}, run {run}: {source}")]
    Clean {
        /// Metric name
        column: String,
        /// Run label
        run: String,
        /// Underlying parse failure
        #[source]
        source: CleanError,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
