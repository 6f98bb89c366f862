//! BarberFlow Library
//! # Overview
//!
//! Finance tracking for a barbershop: income and expense records, a product
//! list and the service price table, persisted to a key-value cache and
//! summarised on a dashboard.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Transaction, Product, ServiceType, etc.)
//! - [`core`] - Business logic components:
//!   - [`core::aggregation`] - Date-window filtering, category grouping and totals
//!   - [`core::dashboard`] - Dashboard figures built from the aggregation functions
//!   - [`core::form`] - Controlled form for a new service record
//!   - [`core::state`] - Application state and update dispatch
//! - [`io`] - Key-value storage, persistence adapter and CSV export
//! - [`view`] - Plain-text rendering and pt-BR formatting
//! - [`cli`] - CLI arguments parsing and command execution
//!
//! # Date Windows
//!
//! - **WEEK**: the reference date and the six days before it
//! - **MONTH**: the reference date and the twenty-nine days before it
//! - **ALL**: every record, regardless of date
//!
//! Records whose date does not parse are left out of the bounded windows and
//! counted, so the caller can report them.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;
pub mod view;

pub use crate::core::{
    build_dashboard, compute_totals, filter_by_date_window, group_by_category, Action, AppState,
    KeyValueStore,
};
pub use crate::io::{FileStore, MemoryStore, PersistenceAdapter};
pub use crate::types::{
    Category, DateFilter, Product, ServiceType, Theme, TrackerError, Transaction, TransactionType,
};
