//! Error types for BarberFlow
//!
//! A single error enum covers the whole crate. None of these conditions is
//! fatal to aggregation: parse failures of persisted data are recovered by
//! the persistence adapter, invalid records are excluded and counted, and
//! only CLI-level failures (unknown id, unwritable data directory) end a run.
//!
//! # Error Categories
//!
//! - **Persisted data**: unparseable JSON, records that fail validation
//! - **Input validation**: negative or oversized values, malformed dates, missing fields
//! - **Lookups**: unknown or duplicated identifiers
//! - **Storage / export**: I/O failures of the key-value store or CSV writer

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the tracker
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    /// Persisted data under a key is not valid JSON of the expected shape
    ///
    /// Recovered by the persistence adapter, which falls back to empty state.
    #[error("Failed to parse stored data under '{key}': {message}")]
    Parse {
        /// Storage key that held the data
        key: String,
        /// Description of the parse failure
        message: String,
    },

    /// One element of a persisted list could not be accepted
    ///
    /// The element is excluded; the rest of the list loads normally.
    #[error("Invalid record at index {index} under '{key}': {message}")]
    InvalidRecord {
        key: String,
        index: usize,
        message: String,
    },

    /// A required field is missing or blank
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// A date string does not parse
    #[error("Invalid date '{value}'")]
    InvalidDate { value: String },

    /// Monetary values must be non-negative
    #[error("Value must not be negative, got {value}")]
    NegativeValue { value: Decimal },

    /// Monetary values are bounded so they persist exactly and sum safely
    #[error("Value {value} exceeds the maximum of {max}")]
    ValueOutOfRange { value: Decimal, max: Decimal },

    #[error("Transaction {id} not found")]
    TransactionNotFound { id: String },

    #[error("Product {id} not found")]
    ProductNotFound { id: String },

    /// An identifier already present in the list was seen again
    #[error("Duplicate identifier {id}")]
    DuplicateId { id: String },

    /// Storage keys are restricted to a safe character set
    #[error("Invalid storage key '{key}'")]
    InvalidKey { key: String },

    /// The key-value store failed to read or write
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// Writing the statement export failed
    #[error("Export error: {message}")]
    Export { message: String },

    /// Writing rendered output failed
    #[error("Output error: {message}")]
    Output { message: String },
}

impl From<std::io::Error> for TrackerError {
    fn from(error: std::io::Error) -> Self {
        TrackerError::Storage {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for TrackerError {
    fn from(error: csv::Error) -> Self {
        TrackerError::Export {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl TrackerError {
    pub fn parse(key: &str, message: impl Into<String>) -> Self {
        TrackerError::Parse {
            key: key.to_string(),
            message: message.into(),
        }
    }

    pub fn invalid_record(key: &str, index: usize, message: impl Into<String>) -> Self {
        TrackerError::InvalidRecord {
            key: key.to_string(),
            index,
            message: message.into(),
        }
    }

    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        TrackerError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn invalid_date(value: &str) -> Self {
        TrackerError::InvalidDate {
            value: value.to_string(),
        }
    }

    pub fn negative_value(value: Decimal) -> Self {
        TrackerError::NegativeValue { value }
    }

    pub fn value_out_of_range(value: Decimal) -> Self {
        TrackerError::ValueOutOfRange {
            value,
            max: crate::types::transaction::MAX_VALUE,
        }
    }

    pub fn transaction_not_found(id: &str) -> Self {
        TrackerError::TransactionNotFound { id: id.to_string() }
    }

    pub fn product_not_found(id: &str) -> Self {
        TrackerError::ProductNotFound { id: id.to_string() }
    }

    pub fn duplicate_id(id: &str) -> Self {
        TrackerError::DuplicateId { id: id.to_string() }
    }

    pub fn output(error: std::io::Error) -> Self {
        TrackerError::Output {
            message: error.to_string(),
        }
    }

    pub fn invalid_key(key: &str) -> Self {
        TrackerError::InvalidKey {
            key: key.to_string(),
        }
    }
}
