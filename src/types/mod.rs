//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: transaction records, drafts and classifications
//! - `product`: products kept in stock
//! - `service`: services offered and their list prices
//! - `view`: date filter, theme and view selectors
//! - `error`: error type for the tracker

pub mod error;
pub mod product;
pub mod service;
pub mod transaction;
pub mod view;

pub use error::TrackerError;
pub use product::{Product, ProductDraft, ProductId};
pub use service::ServiceType;
pub use transaction::{
    check_amount, format_date, parse_date, validate_amount, Category, Transaction,
    TransactionDraft, TransactionId, TransactionType, MAX_VALUE, VALUE_DECIMAL_PLACES,
};
pub use view::{DateFilter, Theme, ViewType};
