//! Transaction-related types for BarberFlow
//!
//! This module defines the transaction record as it is persisted, the draft
//! shape used to create or replace one, and the enumerations that classify it.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use clap::ValueEnum;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::TrackerError;

/// Transaction identifier
///
/// Opaque string. Records created by this crate carry a simple-form UUID,
/// records imported from older caches may carry anything else.
pub type TransactionId = String;

/// Storage format of a transaction date
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest monetary value a record may carry (one trillion)
///
/// Values are persisted as JSON numbers; up to this bound and with at most
/// [`VALUE_DECIMAL_PLACES`] decimals they survive the trip through `f64`
/// unchanged, and sums over any realistic list stay far from overflow.
pub const MAX_VALUE: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Decimal places accepted on new or edited values
pub const VALUE_DECIMAL_PLACES: u32 = 2;

/// Whether a transaction brings money in or takes it out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    /// Money received; adds to profit
    Income,

    /// Money spent; subtracts from profit
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Income => write!(f, "INCOME"),
            TransactionType::Expense => write!(f, "EXPENSE"),
        }
    }
}

/// Coarse classification of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    /// A service rendered in the chair
    Service,

    /// A product sold or bought
    Product,

    /// Anything else (rent, utilities, ...)
    Other,
}

impl Category {
    /// Human-facing label used by the dashboard
    pub fn label(self) -> &'static str {
        match self {
            Category::Service => "Serviços",
            Category::Product => "Produtos",
            Category::Other => "Outros",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Service => write!(f, "SERVICE"),
            Category::Product => write!(f, "PRODUCT"),
            Category::Other => write!(f, "OTHER"),
        }
    }
}

/// A single recorded income or expense event
///
/// The date is kept exactly as stored so that records with a malformed date
/// survive loading and can be reported by the aggregation functions instead
/// of being silently lost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier within the list
    pub id: TransactionId,

    /// Calendar date, normally `YYYY-MM-DD`
    pub date: String,

    /// Income or expense
    #[serde(rename = "type")]
    pub tx_type: TransactionType,

    /// Service, product or other
    pub category: Category,

    /// Non-negative monetary value, currency-agnostic
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,

    /// Free text; for services this is the service label
    pub description: String,

    /// Customer served, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
}

impl Transaction {
    /// Build a stored transaction from a draft and an identifier
    pub fn from_draft(id: TransactionId, draft: TransactionDraft) -> Self {
        Transaction {
            id,
            date: draft.date,
            tx_type: draft.tx_type,
            category: draft.category,
            value: draft.value.round_dp(VALUE_DECIMAL_PLACES),
            description: draft.description,
            customer_name: draft.customer_name,
        }
    }

    /// Parse the stored date
    pub fn parsed_date(&self) -> Result<NaiveDate, TrackerError> {
        parse_date(&self.date)
    }

    /// Value with the sign implied by the transaction type
    pub fn signed_value(&self) -> Decimal {
        match self.tx_type {
            TransactionType::Income => self.value,
            TransactionType::Expense => -self.value,
        }
    }

    /// Turn the record back into a draft, e.g. to edit it
    pub fn to_draft(&self) -> TransactionDraft {
        TransactionDraft {
            date: self.date.clone(),
            tx_type: self.tx_type,
            category: self.category,
            value: self.value,
            description: self.description.clone(),
            customer_name: self.customer_name.clone(),
        }
    }
}

/// Everything a transaction carries except its identifier
///
/// Produced by the entry form and consumed by the state container, which
/// assigns the identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub date: String,
    pub tx_type: TransactionType,
    pub category: Category,
    pub value: Decimal,
    pub description: String,
    pub customer_name: Option<String>,
}

impl TransactionDraft {
    /// Check the invariants a record must satisfy before entering the list
    ///
    /// # Errors
    ///
    /// - `NegativeValue` if the value is below zero
    /// - `ValueOutOfRange` if the value exceeds [`MAX_VALUE`]
    /// - `Validation` if the value has more than two decimal places
    /// - `InvalidDate` if the date does not parse
    pub fn validate(&self) -> Result<(), TrackerError> {
        validate_amount(self.value)?;
        parse_date(&self.date)?;
        Ok(())
    }
}

/// Range check applied to every stored monetary value
///
/// # Errors
///
/// - `NegativeValue` if the value is below zero
/// - `ValueOutOfRange` if the value exceeds [`MAX_VALUE`]
pub fn check_amount(value: Decimal) -> Result<(), TrackerError> {
    if value < Decimal::ZERO {
        return Err(TrackerError::negative_value(value));
    }
    if value > MAX_VALUE {
        return Err(TrackerError::value_out_of_range(value));
    }
    Ok(())
}

/// [`check_amount`] plus the precision limit for values about to be written
pub fn validate_amount(value: Decimal) -> Result<(), TrackerError> {
    check_amount(value)?;
    if value.normalize().scale() > VALUE_DECIMAL_PLACES {
        return Err(TrackerError::validation(
            "value",
            format!("at most {} decimal places, got {}", VALUE_DECIMAL_PLACES, value),
        ));
    }
    Ok(())
}

/// Parse a stored date string into a calendar date
///
/// Accepts plain ISO dates, ISO date-times without offset and RFC 3339
/// timestamps; only the calendar date part is kept.
///
/// # Errors
///
/// Returns `TrackerError::InvalidDate` if none of the accepted forms match.
pub fn parse_date(raw: &str) -> Result<NaiveDate, TrackerError> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(datetime.date());
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Ok(datetime.date_naive());
    }
    Err(TrackerError::invalid_date(raw))
}

/// Format a calendar date the way transactions store it
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
