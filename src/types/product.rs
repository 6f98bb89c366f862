//! Product types
//!
//! Products sold over the counter (pomades, shampoos, ...). They follow the
//! same ownership model as transactions: created from a draft, replaced whole
//! by id, deleted explicitly.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::TrackerError;
use super::transaction::{validate_amount, VALUE_DECIMAL_PLACES};

/// Product identifier (opaque string)
pub type ProductId = String;

/// A product kept in stock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,

    /// Non-negative unit price
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Units on the shelf; older caches may omit it
    #[serde(default)]
    pub stock: u32,
}

impl Product {
    /// Build a stored product from a draft and an identifier
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> Self {
        Product {
            id,
            name: draft.name,
            price: draft.price.round_dp(VALUE_DECIMAL_PLACES),
            stock: draft.stock,
        }
    }

    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            price: self.price,
            stock: self.stock,
        }
    }
}

/// Product fields without the identifier
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: Decimal,
    pub stock: u32,
}

impl ProductDraft {
    /// # Errors
    ///
    /// - `Validation` if the name is blank
    /// - `NegativeValue` / `ValueOutOfRange` if the price is out of range
    /// - `Validation` if the price has more than two decimal places
    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.name.trim().is_empty() {
            return Err(TrackerError::validation("name", "product name is required"));
        }
        validate_amount(self.price)
    }
}
