//! Core traits
//!
//! This module defines the trait abstraction over the key-value cache the
//! persistence adapter writes to, so that the in-memory store used by tests
//! and the directory-backed store used by the CLI are interchangeable.

use crate::types::TrackerError;

/// String-keyed, string-valued storage
///
/// Implementations can be in-memory (using HashMap) or backed by files.
/// The aggregation functions never see this trait; only the persistence
/// adapter does.
pub trait KeyValueStore {
    /// Read the value under `key`, `None` when absent
    fn get(&self, key: &str) -> Result<Option<String>, TrackerError>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), TrackerError>;

    /// Remove `key`; removing an absent key is not an error
    fn delete(&mut self, key: &str) -> Result<(), TrackerError>;
}
