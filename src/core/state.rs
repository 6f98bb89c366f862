//! Application state container
//!
//! `AppState` exclusively owns the transaction and product lists together
//! with the UI selections (theme, view, date filter, record being edited).
//! Every mutation goes through [`AppState::dispatch`], which validates the
//! action, applies it and reports which slice of state changed so the caller
//! knows what to persist.
//!
//! # Identifiers
//!
//! New records receive a random identifier. Identifiers are unique across
//! each list at all times: loading drops duplicates, and dispatch never
//! introduces one.

use uuid::Uuid;

use crate::types::{
    DateFilter, Product, ProductDraft, ProductId, Theme, TrackerError, Transaction,
    TransactionDraft, TransactionId, ViewType,
};

/// An update request for the state container
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Create (no id) or fully replace (id) a transaction
    SaveTransaction {
        draft: TransactionDraft,
        id: Option<TransactionId>,
    },
    DeleteTransaction(TransactionId),
    StartEditing(TransactionId),
    CancelEditing,
    /// Create (no id) or fully replace (id) a product
    SaveProduct {
        draft: ProductDraft,
        id: Option<ProductId>,
    },
    DeleteProduct(ProductId),
    SetView(ViewType),
    SetDateFilter(DateFilter),
    SetTheme(Theme),
    ToggleTheme,
}

/// Slice of state touched by an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Transactions,
    Products,
    Theme,
    /// View, filter or editing selection; nothing to persist
    Ui,
}

/// Top-level application state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    transactions: Vec<Transaction>,
    products: Vec<Product>,
    theme: Theme,
    view: ViewType,
    date_filter: DateFilter,
    editing: Option<TransactionId>,
}

impl AppState {
    /// Create an empty state with default selections
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state from already-loaded lists
    ///
    /// The lists are expected to have unique identifiers; the persistence
    /// adapter guarantees it.
    pub fn from_parts(transactions: Vec<Transaction>, products: Vec<Product>, theme: Theme) -> Self {
        AppState {
            transactions,
            products,
            theme,
            ..Self::default()
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn view(&self) -> ViewType {
        self.view
    }

    pub fn date_filter(&self) -> DateFilter {
        self.date_filter
    }

    /// The transaction currently being edited, if any
    pub fn editing(&self) -> Option<&Transaction> {
        let id = self.editing.as_deref()?;
        self.transaction(id)
    }

    pub fn transaction(&self, id: &str) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| tx.id == id)
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Apply an action
    ///
    /// # Returns
    ///
    /// * `Ok(Change)` - The slice of state that changed
    /// * `Err(TrackerError)` - The action was rejected; state is unchanged
    ///
    /// # Errors
    ///
    /// - Draft validation failures (`NegativeValue`, `InvalidDate`, `Validation`)
    /// - `TransactionNotFound` / `ProductNotFound` for unknown identifiers
    pub fn dispatch(&mut self, action: Action) -> Result<Change, TrackerError> {
        match action {
            Action::SaveTransaction { draft, id } => self.save_transaction(draft, id),
            Action::DeleteTransaction(id) => self.delete_transaction(&id),
            Action::StartEditing(id) => {
                if self.transaction(&id).is_none() {
                    return Err(TrackerError::transaction_not_found(&id));
                }
                self.editing = Some(id);
                Ok(Change::Ui)
            }
            Action::CancelEditing => {
                self.editing = None;
                Ok(Change::Ui)
            }
            Action::SaveProduct { draft, id } => self.save_product(draft, id),
            Action::DeleteProduct(id) => self.delete_product(&id),
            Action::SetView(view) => {
                self.view = view;
                Ok(Change::Ui)
            }
            Action::SetDateFilter(filter) => {
                self.date_filter = filter;
                Ok(Change::Ui)
            }
            Action::SetTheme(theme) => {
                self.theme = theme;
                Ok(Change::Theme)
            }
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
                Ok(Change::Theme)
            }
        }
    }

    fn save_transaction(
        &mut self,
        draft: TransactionDraft,
        id: Option<TransactionId>,
    ) -> Result<Change, TrackerError> {
        draft.validate()?;

        match id {
            Some(id) => {
                let slot = self
                    .transactions
                    .iter_mut()
                    .find(|tx| tx.id == id)
                    .ok_or_else(|| TrackerError::transaction_not_found(&id))?;
                tracing::info!(id = %id, "replacing transaction");
                *slot = Transaction::from_draft(id, draft);
            }
            None => {
                let id = self.fresh_id(|state, id| state.transaction(id).is_some());
                tracing::info!(id = %id, value = %draft.value, "recording transaction");
                // Newest first
                self.transactions.insert(0, Transaction::from_draft(id, draft));
            }
        }

        self.editing = None;
        self.view = ViewType::Statement;
        Ok(Change::Transactions)
    }

    fn delete_transaction(&mut self, id: &str) -> Result<Change, TrackerError> {
        let index = self
            .transactions
            .iter()
            .position(|tx| tx.id == id)
            .ok_or_else(|| TrackerError::transaction_not_found(id))?;
        self.transactions.remove(index);
        if self.editing.as_deref() == Some(id) {
            self.editing = None;
        }
        tracing::info!(id, "deleted transaction");
        Ok(Change::Transactions)
    }

    fn save_product(
        &mut self,
        draft: ProductDraft,
        id: Option<ProductId>,
    ) -> Result<Change, TrackerError> {
        draft.validate()?;

        match id {
            Some(id) => {
                let slot = self
                    .products
                    .iter_mut()
                    .find(|product| product.id == id)
                    .ok_or_else(|| TrackerError::product_not_found(&id))?;
                tracing::info!(id = %id, "replacing product");
                *slot = Product::from_draft(id, draft);
            }
            None => {
                let id = self.fresh_id(|state, id| state.product(id).is_some());
                tracing::info!(id = %id, name = %draft.name, "adding product");
                self.products.insert(0, Product::from_draft(id, draft));
            }
        }

        Ok(Change::Products)
    }

    fn delete_product(&mut self, id: &str) -> Result<Change, TrackerError> {
        let index = self
            .products
            .iter()
            .position(|product| product.id == id)
            .ok_or_else(|| TrackerError::product_not_found(id))?;
        self.products.remove(index);
        tracing::info!(id, "deleted product");
        Ok(Change::Products)
    }

    fn fresh_id<F>(&self, taken: F) -> String
    where
        F: Fn(&Self, &str) -> bool,
    {
        loop {
            let id = generate_id();
            if !taken(self, &id) {
                return id;
            }
        }
    }
}

/// Random opaque identifier for a new record
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}
