//! Core business logic module
//!
//! This module contains the core components:
//! - `traits` - Trait abstraction over the key-value cache
//! - `aggregation` - Date-window filtering, category grouping and totals
//! - `dashboard` - Composition of the aggregation functions for the dashboard
//! - `form` - Controlled cut form
//! - `state` - Application state container and update dispatch

pub mod aggregation;
pub mod dashboard;
pub mod form;
pub mod state;
pub mod traits;

pub use aggregation::{
    compute_totals, count_by_category, daily_income_series, filter_by_date_window,
    group_by_category, CategoryTotal, DailyTotal, DateWindow, FilteredTransactions, Totals,
};
pub use dashboard::{build_dashboard, DashboardSummary};
pub use form::CutForm;
pub use state::{Action, AppState, Change};
pub use traits::KeyValueStore;
