//! View layer
//!
//! Text rendering of the figures produced by the core module:
//! - `format` - Currency and date formatting
//! - `render` - Dashboard, statement and catalogue output

pub mod format;
pub mod render;

pub use format::{format_currency, format_day_label, format_statement_date};
pub use render::{
    render_dashboard, render_products, render_services, render_statement, render_theme,
};
