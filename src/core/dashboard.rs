//! Dashboard composition
//!
//! Builds the figures shown on the dashboard out of the aggregation
//! functions: the stat cards and the category breakdown follow the selected
//! date filter, while the daily income chart always covers the last seven
//! days of the unfiltered list.

use chrono::NaiveDate;

use crate::core::aggregation::{
    compute_totals, count_by_category, daily_income_series, filter_by_date_window,
    group_by_category, CategoryTotal, DailyTotal, Totals,
};
use crate::types::{Category, DateFilter, Transaction};

/// Days covered by the daily income chart
pub const DAILY_CHART_DAYS: u64 = 7;

/// Everything the dashboard view renders
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub filter: DateFilter,
    pub reference: NaiveDate,

    /// Income, expenses and real profit within the filter window
    pub totals: Totals,

    /// Services rendered within the filter window
    pub service_count: usize,

    /// Income per day, oldest first
    pub daily_income: Vec<DailyTotal>,

    /// Category breakdown within the filter window
    pub categories: Vec<CategoryTotal>,

    /// Records left out of the window because of malformed dates
    pub excluded: usize,
}

/// Compose the dashboard for a filter and reference date
pub fn build_dashboard(
    transactions: &[Transaction],
    filter: DateFilter,
    reference: NaiveDate,
) -> DashboardSummary {
    let filtered = filter_by_date_window(transactions, filter, reference);

    DashboardSummary {
        filter,
        reference,
        totals: compute_totals(filtered.iter()),
        service_count: count_by_category(filtered.iter(), Category::Service),
        daily_income: daily_income_series(transactions, reference, DAILY_CHART_DAYS),
        categories: group_by_category(filtered.iter()),
        excluded: filtered.excluded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionType;
    use rust_decimal::Decimal;

    fn tx(date: &str, tx_type: TransactionType, category: Category, value: i64) -> Transaction {
        Transaction {
            id: format!("{}-{}", date, value),
            date: date.to_string(),
            tx_type,
            category,
            value: Decimal::new(value, 0),
            description: String::new(),
            customer_name: None,
        }
    }

    #[test]
    fn test_dashboard_uses_filter_for_cards_only() {
        let transactions = vec![
            tx("2026-10-15", TransactionType::Income, Category::Service, 25),
            tx("2026-10-14", TransactionType::Income, Category::Service, 45),
            tx("2026-10-13", TransactionType::Expense, Category::Product, 30),
            tx("2026-10-01", TransactionType::Income, Category::Service, 50),
            tx("sometime", TransactionType::Income, Category::Other, 5),
        ];
        let reference = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();

        let summary = build_dashboard(&transactions, DateFilter::Week, reference);

        assert_eq!(summary.totals.income, Decimal::new(70, 0));
        assert_eq!(summary.totals.expense, Decimal::new(30, 0));
        assert_eq!(summary.totals.profit, Decimal::new(40, 0));
        assert_eq!(summary.service_count, 2);
        assert_eq!(summary.excluded, 1);
        assert_eq!(summary.categories.len(), 2);

        assert_eq!(summary.daily_income.len(), DAILY_CHART_DAYS as usize);
        assert_eq!(summary.daily_income[6].total, Decimal::new(25, 0));
        assert_eq!(summary.daily_income[5].total, Decimal::new(45, 0));
    }

    #[test]
    fn test_daily_chart_ignores_filter() {
        let transactions = vec![tx("2026-10-12", TransactionType::Income, Category::Service, 25)];
        let reference = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();

        let week = build_dashboard(&transactions, DateFilter::Week, reference);
        let all = build_dashboard(&transactions, DateFilter::All, reference);
        assert_eq!(week.daily_income, all.daily_income);
    }

    #[test]
    fn test_empty_dashboard() {
        let reference = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        let summary = build_dashboard(&[], DateFilter::Month, reference);

        assert_eq!(summary.totals, Totals::default());
        assert_eq!(summary.service_count, 0);
        assert!(summary.categories.is_empty());
        assert!(summary
            .daily_income
            .iter()
            .all(|point| point.total == Decimal::ZERO));
    }
}
