//! CSV export of the statement
//!
//! Writes transactions with columns: id, date, type, category, value,
//! description, customer. Rows keep the order they are given in (the
//! statement's newest-first order); values are written with two decimals.
//!
//! The function is pure apart from writing to the provided writer.

use std::io::Write;

use crate::types::{Transaction, TrackerError};

/// Write transactions to CSV format
///
/// # Arguments
///
/// * `transactions` - Records to export, in output order
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(TrackerError::Export)` if a write error occurred
pub fn write_statement_csv<'a, I>(transactions: I, output: &mut dyn Write) -> Result<(), TrackerError>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record([
        "id",
        "date",
        "type",
        "category",
        "value",
        "description",
        "customer",
    ])?;

    for tx in transactions {
        writer.write_record(&[
            tx.id.clone(),
            tx.date.clone(),
            tx.tx_type.to_string(),
            tx.category.to_string(),
            format!("{:.2}", tx.value),
            tx.description.clone(),
            tx.customer_name.clone().unwrap_or_default(),
        ])?;
    }

    writer.flush().map_err(|e| TrackerError::Export {
        message: format!("Failed to flush output: {}", e),
    })?;
    Ok(())
}
