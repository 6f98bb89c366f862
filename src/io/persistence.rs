//! Persistence adapter
//!
//! Loads and saves the transaction list, the product list and the theme
//! preference through a [`KeyValueStore`]. Lists are stored as JSON arrays
//! under version-suffixed keys; the theme is stored as a bare string.
//!
//! # Recovery
//!
//! Loading never fails:
//! - a missing key yields an empty list (or the light theme)
//! - a value that is not a JSON array, or a store that cannot be read, yields
//!   an empty list and a warning
//! - array elements that do not deserialize, or that violate an invariant,
//!   are excluded and reported in the [`LoadReport`]
//! - a repeated identifier keeps the first occurrence and reports the rest

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;

use crate::core::state::AppState;
use crate::core::traits::KeyValueStore;
use crate::types::{check_amount, Product, Theme, TrackerError, Transaction};

pub const TRANSACTIONS_KEY: &str = "barberflow-transactions-v3";
pub const PRODUCTS_KEY: &str = "barberflow-products-v3";
pub const THEME_KEY: &str = "barberflow-theme";

/// A record that can be validated after deserialization
pub trait StoredRecord: DeserializeOwned + Serialize {
    fn id(&self) -> &str;

    /// Invariants serde cannot express
    fn check(&self) -> Result<(), TrackerError>;
}

impl StoredRecord for Transaction {
    fn id(&self) -> &str {
        &self.id
    }

    fn check(&self) -> Result<(), TrackerError> {
        check_amount(self.value)
    }
}

impl StoredRecord for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn check(&self) -> Result<(), TrackerError> {
        check_amount(self.price)
    }
}

/// Outcome of loading one list
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport<T> {
    /// Accepted records in stored order
    pub records: Vec<T>,

    /// Why each excluded element was left out
    pub rejected: Vec<TrackerError>,

    /// Set when the whole value had to be discarded
    pub parse_error: Option<TrackerError>,
}

impl<T> LoadReport<T> {
    fn empty() -> Self {
        LoadReport {
            records: Vec::new(),
            rejected: Vec::new(),
            parse_error: None,
        }
    }

    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }
}

/// Summary of a full state load
#[derive(Debug, Clone, PartialEq)]
pub struct LoadSummary {
    pub transactions_rejected: usize,
    pub products_rejected: usize,
    pub parse_errors: Vec<TrackerError>,
}

/// Adapter between the state container and a key-value store
pub struct PersistenceAdapter<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> PersistenceAdapter<S> {
    pub fn new(store: S) -> Self {
        PersistenceAdapter { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn load_transactions(&self) -> LoadReport<Transaction> {
        self.load_list(TRANSACTIONS_KEY)
    }

    pub fn load_products(&self) -> LoadReport<Product> {
        self.load_list(PRODUCTS_KEY)
    }

    /// Stored theme, light when absent or unrecognised
    pub fn load_theme(&self) -> Theme {
        match self.store.get(THEME_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring stored theme");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read theme");
                Theme::default()
            }
        }
    }

    /// Load everything into a fresh state container
    pub fn load_state(&self) -> (AppState, LoadSummary) {
        let transactions = self.load_transactions();
        let products = self.load_products();
        let theme = self.load_theme();

        let summary = LoadSummary {
            transactions_rejected: transactions.rejected_count(),
            products_rejected: products.rejected_count(),
            parse_errors: transactions
                .parse_error
                .into_iter()
                .chain(products.parse_error)
                .collect(),
        };
        tracing::info!(
            transactions = transactions.records.len(),
            products = products.records.len(),
            %theme,
            "loaded state"
        );

        (
            AppState::from_parts(transactions.records, products.records, theme),
            summary,
        )
    }

    pub fn save_transactions(&mut self, transactions: &[Transaction]) -> Result<(), TrackerError> {
        self.save_list(TRANSACTIONS_KEY, transactions)
    }

    pub fn save_products(&mut self, products: &[Product]) -> Result<(), TrackerError> {
        self.save_list(PRODUCTS_KEY, products)
    }

    pub fn save_theme(&mut self, theme: Theme) -> Result<(), TrackerError> {
        self.store.set(THEME_KEY, theme.as_str())
    }

    /// Remove every key the adapter owns
    pub fn clear(&mut self) -> Result<(), TrackerError> {
        for key in [TRANSACTIONS_KEY, PRODUCTS_KEY, THEME_KEY] {
            self.store.delete(key)?;
        }
        tracing::info!("cleared stored state");
        Ok(())
    }

    fn save_list<T: StoredRecord>(&mut self, key: &str, records: &[T]) -> Result<(), TrackerError> {
        let payload = serde_json::to_string(records)
            .map_err(|e| TrackerError::Storage {
                message: format!("failed to serialize '{}': {}", key, e),
            })?;
        self.store.set(key, &payload)?;
        tracing::debug!(key, records = records.len(), "saved list");
        Ok(())
    }

    fn load_list<T: StoredRecord>(&self, key: &str) -> LoadReport<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return LoadReport::empty(),
            Err(e) => {
                tracing::warn!(key, error = %e, "could not read stored list, starting empty");
                return LoadReport {
                    parse_error: Some(e),
                    ..LoadReport::empty()
                };
            }
        };

        let elements = match serde_json::from_str::<Vec<Value>>(&raw) {
            Ok(elements) => elements,
            Err(e) => {
                let error = TrackerError::parse(key, e.to_string());
                tracing::warn!(key, error = %error, "stored list is malformed, starting empty");
                return LoadReport {
                    parse_error: Some(error),
                    ..LoadReport::empty()
                };
            }
        };

        let mut report = LoadReport::empty();
        let mut seen = HashSet::new();

        for (index, element) in elements.into_iter().enumerate() {
            let record = match serde_json::from_value::<T>(element) {
                Ok(record) => record,
                Err(e) => {
                    report
                        .rejected
                        .push(TrackerError::invalid_record(key, index, e.to_string()));
                    continue;
                }
            };
            if let Err(e) = record.check() {
                report
                    .rejected
                    .push(TrackerError::invalid_record(key, index, e.to_string()));
                continue;
            }
            // First occurrence wins
            if !seen.insert(record.id().to_string()) {
                report.rejected.push(TrackerError::duplicate_id(record.id()));
                continue;
            }
            report.records.push(record);
        }

        if !report.rejected.is_empty() {
            tracing::warn!(
                key,
                rejected = report.rejected.len(),
                "excluded invalid records"
            );
            for error in &report.rejected {
                tracing::debug!(key, error = %error, "rejected record");
            }
        }

        report
    }
}
