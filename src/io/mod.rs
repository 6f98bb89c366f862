//! I/O module
//!
//! Handles persistence and export.
//!
//! # Components
//!
//! - `storage` - Key-value store implementations (memory, directory-backed)
//! - `persistence` - Load/save of lists and theme under versioned keys
//! - `csv_format` - CSV export of the statement

pub mod csv_format;
pub mod persistence;
pub mod storage;

pub use csv_format::write_statement_csv;
pub use persistence::{LoadReport, LoadSummary, PersistenceAdapter};
pub use storage::{FileStore, MemoryStore};
