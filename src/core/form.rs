//! Cut form
//!
//! Controlled form used to record a service rendered. The form owns its field
//! values; every edit goes through a setter so the coupling between the
//! selected service and the value stays in one place.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::types::{
    format_date, validate_amount, Category, ServiceType, TrackerError, TransactionDraft,
    TransactionType,
};

/// Field values of the cut form
#[derive(Debug, Clone, PartialEq)]
pub struct CutForm {
    customer: String,
    date: NaiveDate,
    service: ServiceType,
    value: Decimal,
}

impl CutForm {
    /// Fresh form: no customer, dated `today`, a plain cut at list price
    pub fn new(today: NaiveDate) -> Self {
        let service = ServiceType::Cut;
        CutForm {
            customer: String::new(),
            date: today,
            service,
            value: service.price(),
        }
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn service(&self) -> ServiceType {
        self.service
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    pub fn set_customer(&mut self, customer: impl Into<String>) {
        self.customer = customer.into();
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Select a service
    ///
    /// The value follows the service's list price. Services without a fixed
    /// price keep whatever value was already typed.
    pub fn select_service(&mut self, service: ServiceType) {
        self.service = service;
        let price = service.price();
        if !price.is_zero() {
            self.value = price;
        }
    }

    /// Override the value (discounts, tips, custom work)
    pub fn set_value(&mut self, value: Decimal) {
        self.value = value;
    }

    /// Validate the fields and produce an income draft
    ///
    /// # Errors
    ///
    /// - `Validation` if the customer name is blank
    /// - `NegativeValue` / `ValueOutOfRange` if the value is out of range
    /// - `Validation` if the value has more than two decimal places
    pub fn submit(&self) -> Result<TransactionDraft, TrackerError> {
        let customer = self.customer.trim();
        if customer.is_empty() {
            return Err(TrackerError::validation(
                "customer",
                "customer name is required",
            ));
        }
        validate_amount(self.value)?;

        Ok(TransactionDraft {
            date: format_date(self.date),
            tx_type: TransactionType::Income,
            category: Category::Service,
            value: self.value,
            description: self.service.label().to_string(),
            customer_name: Some(customer.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
    }

    #[test]
    fn test_new_form_defaults() {
        let form = CutForm::new(today());
        assert_eq!(form.customer(), "");
        assert_eq!(form.date(), today());
        assert_eq!(form.service(), ServiceType::Cut);
        assert_eq!(form.value(), Decimal::new(25, 0));
    }

    #[rstest]
    #[case::beard(ServiceType::Beard, 20)]
    #[case::combo(ServiceType::CutBeardEyebrow, 50)]
    #[case::others_keeps_value(ServiceType::Others, 25)]
    fn test_select_service_updates_value(#[case] service: ServiceType, #[case] expected: i64) {
        let mut form = CutForm::new(today());
        form.select_service(service);
        assert_eq!(form.service(), service);
        assert_eq!(form.value(), Decimal::new(expected, 0));
    }

    #[test]
    fn test_others_keeps_typed_value() {
        let mut form = CutForm::new(today());
        form.set_value(Decimal::new(80, 0));
        form.select_service(ServiceType::Others);
        assert_eq!(form.value(), Decimal::new(80, 0));
    }

    #[test]
    fn test_submit_builds_service_income() {
        let mut form = CutForm::new(today());
        form.set_customer("  Carlos ");
        form.select_service(ServiceType::CutBeard);

        let draft = form.submit().unwrap();
        assert_eq!(draft.date, "2026-10-15");
        assert_eq!(draft.tx_type, TransactionType::Income);
        assert_eq!(draft.category, Category::Service);
        assert_eq!(draft.value, Decimal::new(45, 0));
        assert_eq!(draft.description, "Corte + Barba");
        assert_eq!(draft.customer_name.as_deref(), Some("Carlos"));
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank("   ")]
    fn test_submit_requires_customer(#[case] customer: &str) {
        let mut form = CutForm::new(today());
        form.set_customer(customer);
        assert!(matches!(
            form.submit(),
            Err(TrackerError::Validation { ref field, .. }) if field == "customer"
        ));
    }

    #[test]
    fn test_submit_rejects_negative_value() {
        let mut form = CutForm::new(today());
        form.set_customer("Ana");
        form.set_value(Decimal::new(-5, 0));
        assert!(matches!(
            form.submit(),
            Err(TrackerError::NegativeValue { .. })
        ));
    }

    #[test]
    fn test_submit_rejects_oversized_value() {
        let mut form = CutForm::new(today());
        form.set_customer("Ana");
        form.set_value(Decimal::from_scientific("5e28").unwrap());
        assert!(matches!(
            form.submit(),
            Err(TrackerError::ValueOutOfRange { .. })
        ));
    }

    #[test]
    fn test_submit_accepts_free_service() {
        let mut form = CutForm::new(today());
        form.set_customer("Ana");
        form.set_value(Decimal::ZERO);
        assert_eq!(form.submit().unwrap().value, Decimal::ZERO);
    }
}
