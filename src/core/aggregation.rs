//! Transaction aggregation and filtering
//!
//! Pure functions over an immutable snapshot of the transaction list:
//! - [`filter_by_date_window`] scopes the list to a [`DateFilter`] window
//! - [`group_by_category`] sums values per category in first-seen order
//! - [`compute_totals`] derives income, expense and profit
//! - [`daily_income_series`] buckets income per calendar day
//!
//! No function here mutates its input, reads the clock or touches storage.
//! The reference date is always passed in by the caller. Sums saturate at
//! `Decimal::MAX` instead of overflowing.
//!
//! # Windows
//!
//! Bounded windows are rolling and inclusive on both ends:
//! - `WEEK`: `[reference - 6 days, reference]`
//! - `MONTH`: `[reference - 29 days, reference]`
//!
//! Dates after the reference date fall outside both.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use crate::types::{Category, DateFilter, Transaction, TransactionType};

/// Inclusive calendar-date range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Window of `days` calendar days ending at `end`
    ///
    /// `days` is clamped to at least one so the window always contains `end`.
    pub fn trailing(end: NaiveDate, days: u64) -> Self {
        let span = days.max(1) - 1;
        let start = end.checked_sub_days(Days::new(span)).unwrap_or(NaiveDate::MIN);
        DateWindow { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl DateFilter {
    /// Number of days covered by the filter, `None` for `ALL`
    pub fn span_days(self) -> Option<u64> {
        match self {
            DateFilter::Week => Some(7),
            DateFilter::Month => Some(30),
            DateFilter::All => None,
        }
    }

    /// Window implied by the filter at a reference date, `None` for `ALL`
    pub fn window(self, reference: NaiveDate) -> Option<DateWindow> {
        self.span_days()
            .map(|days| DateWindow::trailing(reference, days))
    }
}

/// Result of a date-window filter
///
/// Holds borrowed records in input order plus the number of records that were
/// dropped because their date could not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredTransactions<'a> {
    pub transactions: Vec<&'a Transaction>,
    pub excluded: usize,
}

impl<'a> FilteredTransactions<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a Transaction> + '_ {
        self.transactions.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Clone the borrowed records into an owned list
    pub fn to_owned_list(&self) -> Vec<Transaction> {
        self.iter().cloned().collect()
    }
}

/// Sum of values for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Decimal,
}

/// Income, expense and profit over a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub profit: Decimal,
}

/// Income received on one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: Decimal,
}

/// Keep the transactions whose date falls within the filter's window
///
/// # Arguments
///
/// * `transactions` - The full transaction list
/// * `filter` - Window selector
/// * `reference` - The "today" the window ends at
///
/// # Returns
///
/// The matching records in input order. With `ALL` every record is returned
/// and nothing is excluded; with a bounded window records whose date does not
/// parse are left out and counted in `excluded`.
pub fn filter_by_date_window(
    transactions: &[Transaction],
    filter: DateFilter,
    reference: NaiveDate,
) -> FilteredTransactions<'_> {
    let Some(window) = filter.window(reference) else {
        return FilteredTransactions {
            transactions: transactions.iter().collect(),
            excluded: 0,
        };
    };

    let mut kept = Vec::new();
    let mut excluded = 0;

    for tx in transactions {
        match tx.parsed_date() {
            Ok(date) if window.contains(date) => kept.push(tx),
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(id = %tx.id, error = %e, "excluding transaction with malformed date");
                excluded += 1;
            }
        }
    }

    if excluded > 0 {
        tracing::warn!(excluded, %filter, "transactions with malformed dates left out of window");
    }

    FilteredTransactions {
        transactions: kept,
        excluded,
    }
}

/// Sum transaction values per category
///
/// Categories appear once each, in the order they are first seen in the
/// input. Grouping ignores the transaction type; filter by type upstream for
/// an income-only breakdown. Categories summing to zero are kept.
pub fn group_by_category<'a, I>(transactions: I) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for tx in transactions {
        match totals.iter_mut().find(|entry| entry.category == tx.category) {
            Some(entry) => entry.total = entry.total.saturating_add(tx.value),
            None => totals.push(CategoryTotal {
                category: tx.category,
                total: tx.value,
            }),
        }
    }

    totals
}

/// Income, expense and profit (income - expense); no rounding
pub fn compute_totals<'a, I>(transactions: I) -> Totals
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals = Totals::default();

    for tx in transactions {
        match tx.tx_type {
            TransactionType::Income => totals.income = totals.income.saturating_add(tx.value),
            TransactionType::Expense => totals.expense = totals.expense.saturating_add(tx.value),
        }
    }

    totals.profit = totals.income.saturating_sub(totals.expense);
    totals
}

/// Number of transactions in a category
pub fn count_by_category<'a, I>(transactions: I, category: Category) -> usize
where
    I: IntoIterator<Item = &'a Transaction>,
{
    transactions
        .into_iter()
        .filter(|tx| tx.category == category)
        .count()
}

/// Income per day for the `days` days ending at `reference`, oldest first
///
/// Every day of the range gets a point, zero when nothing was received.
/// Records with malformed dates are skipped.
pub fn daily_income_series<'a, I>(transactions: I, reference: NaiveDate, days: u64) -> Vec<DailyTotal>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let window = DateWindow::trailing(reference, days);
    let mut series: Vec<DailyTotal> = window
        .start
        .iter_days()
        .take_while(|date| *date <= window.end)
        .map(|date| DailyTotal {
            date,
            total: Decimal::ZERO,
        })
        .collect();

    for tx in transactions {
        if tx.tx_type != TransactionType::Income {
            continue;
        }
        let Ok(date) = tx.parsed_date() else {
            continue;
        };
        if !window.contains(date) {
            continue;
        }
        // Points are contiguous from window.start
        let offset = (date - window.start).num_days() as usize;
        if let Some(point) = series.get_mut(offset) {
            point.total = point.total.saturating_add(tx.value);
        }
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tx(
        id: &str,
        date: &str,
        tx_type: TransactionType,
        category: Category,
        value: i64,
    ) -> Transaction {
        Transaction {
            id: id.to_string(),
            date: date.to_string(),
            tx_type,
            category,
            value: Decimal::new(value, 0),
            description: String::new(),
            customer_name: None,
        }
    }

    fn ids(filtered: &FilteredTransactions<'_>) -> Vec<String> {
        filtered.iter().map(|tx| tx.id.clone()).collect()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx("a", "2026-10-15", TransactionType::Income, Category::Service, 25),
            tx("b", "2026-10-09", TransactionType::Income, Category::Service, 45),
            tx("c", "2026-10-08", TransactionType::Expense, Category::Product, 60),
            tx("d", "2026-09-16", TransactionType::Income, Category::Product, 35),
            tx("e", "2026-09-15", TransactionType::Expense, Category::Other, 800),
            tx("f", "2026-10-16", TransactionType::Income, Category::Service, 30),
        ]
    }

    #[test]
    fn test_week_scenario_keeps_only_recent_record() {
        let day0 = day(2026, 10, 15);
        let transactions = vec![
            tx("1", "2026-10-15", TransactionType::Income, Category::Service, 25),
            tx("2", "2026-10-05", TransactionType::Expense, Category::Product, 10),
        ];

        let filtered = filter_by_date_window(&transactions, DateFilter::Week, day0);
        assert_eq!(ids(&filtered), vec!["1"]);
        assert_eq!(filtered.excluded, 0);

        let grouped = group_by_category(filtered.iter());
        assert_eq!(
            grouped,
            vec![CategoryTotal {
                category: Category::Service,
                total: Decimal::new(25, 0),
            }]
        );
    }

    #[rstest]
    #[case::week(DateFilter::Week, &["a", "b"])]
    #[case::month(DateFilter::Month, &["a", "b", "c", "d"])]
    #[case::all(DateFilter::All, &["a", "b", "c", "d", "e", "f"])]
    fn test_window_bounds(#[case] filter: DateFilter, #[case] expected: &[&str]) {
        let transactions = sample();
        let filtered = filter_by_date_window(&transactions, filter, day(2026, 10, 15));
        assert_eq!(ids(&filtered), expected);
    }

    #[test]
    fn test_filter_all_is_identity() {
        let transactions = sample();
        let filtered = filter_by_date_window(&transactions, DateFilter::All, day(2000, 1, 1));
        assert_eq!(filtered.to_owned_list(), transactions);
    }

    #[rstest]
    #[case(DateFilter::Week)]
    #[case(DateFilter::Month)]
    #[case(DateFilter::All)]
    fn test_filter_is_ordered_subsequence(#[case] filter: DateFilter) {
        let transactions = sample();
        let filtered = filter_by_date_window(&transactions, filter, day(2026, 10, 15));

        let mut cursor = transactions.iter();
        for kept in filtered.iter() {
            assert!(cursor.any(|original| std::ptr::eq(original, kept)));
        }
    }

    #[rstest]
    #[case(DateFilter::Week)]
    #[case(DateFilter::Month)]
    #[case(DateFilter::All)]
    fn test_empty_input(#[case] filter: DateFilter) {
        let filtered = filter_by_date_window(&[], filter, day(2026, 10, 15));
        assert!(filtered.is_empty());
        assert_eq!(filtered.excluded, 0);
        assert!(group_by_category(filtered.iter()).is_empty());
        assert_eq!(compute_totals(filtered.iter()), Totals::default());
    }

    #[test]
    fn test_malformed_dates_are_excluded_and_counted() {
        let transactions = vec![
            tx("ok", "2026-10-14", TransactionType::Income, Category::Service, 25),
            tx("bad", "14/10/2026", TransactionType::Income, Category::Service, 25),
            tx("empty", "", TransactionType::Expense, Category::Other, 5),
        ];

        let filtered = filter_by_date_window(&transactions, DateFilter::Week, day(2026, 10, 15));
        assert_eq!(ids(&filtered), vec!["ok"]);
        assert_eq!(filtered.excluded, 2);

        let all = filter_by_date_window(&transactions, DateFilter::All, day(2026, 10, 15));
        assert_eq!(all.len(), 3);
        assert_eq!(all.excluded, 0);
    }

    #[test]
    fn test_datetime_strings_use_their_calendar_date() {
        let transactions = vec![tx(
            "iso",
            "2026-10-09T22:00:00",
            TransactionType::Income,
            Category::Service,
            25,
        )];
        let filtered = filter_by_date_window(&transactions, DateFilter::Week, day(2026, 10, 15));
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_group_by_category_first_seen_order() {
        let transactions = vec![
            tx("1", "2026-10-15", TransactionType::Expense, Category::Other, 100),
            tx("2", "2026-10-15", TransactionType::Income, Category::Service, 25),
            tx("3", "2026-10-15", TransactionType::Income, Category::Other, 7),
            tx("4", "2026-10-15", TransactionType::Income, Category::Service, 45),
        ];

        let grouped = group_by_category(&transactions);
        assert_eq!(
            grouped,
            vec![
                CategoryTotal {
                    category: Category::Other,
                    total: Decimal::new(107, 0),
                },
                CategoryTotal {
                    category: Category::Service,
                    total: Decimal::new(70, 0),
                },
            ]
        );
    }

    #[test]
    fn test_zero_value_category_is_kept() {
        let transactions = vec![
            tx("1", "2026-10-15", TransactionType::Income, Category::Service, 25),
            tx("2", "2026-10-15", TransactionType::Income, Category::Product, 0),
        ];

        let grouped = group_by_category(&transactions);
        assert!(grouped.contains(&CategoryTotal {
            category: Category::Product,
            total: Decimal::ZERO,
        }));
        assert_eq!(grouped.len(), 2);
    }

    #[test]
    fn test_group_totals_preserve_grand_total() {
        let transactions = sample();
        let grand_total: Decimal = transactions.iter().map(|tx| tx.value).sum();
        let grouped_total: Decimal = group_by_category(&transactions)
            .iter()
            .map(|entry| entry.total)
            .sum();

        assert_eq!(grouped_total, grand_total);
    }

    #[test]
    fn test_each_category_appears_once() {
        let grouped = group_by_category(&sample());
        for category in [Category::Service, Category::Product, Category::Other] {
            assert_eq!(
                grouped.iter().filter(|entry| entry.category == category).count(),
                1
            );
        }
    }

    #[test]
    fn test_compute_totals() {
        let transactions = sample();
        let filtered = filter_by_date_window(&transactions, DateFilter::Month, day(2026, 10, 15));
        let totals = compute_totals(filtered.iter());

        assert_eq!(totals.income, Decimal::new(105, 0));
        assert_eq!(totals.expense, Decimal::new(60, 0));
        assert_eq!(totals.profit, Decimal::new(45, 0));
    }

    #[test]
    fn test_compute_totals_does_not_round() {
        let mut a = tx("a", "2026-10-15", TransactionType::Income, Category::Service, 0);
        a.value = Decimal::new(10005, 3);
        let mut b = tx("b", "2026-10-15", TransactionType::Expense, Category::Other, 0);
        b.value = Decimal::new(3333, 4);

        let totals = compute_totals([&a, &b]);
        assert_eq!(totals.profit, Decimal::new(96717, 4));
    }

    #[test]
    fn test_profit_can_be_negative() {
        let transactions = vec![
            tx("1", "2026-10-15", TransactionType::Income, Category::Service, 25),
            tx("2", "2026-10-15", TransactionType::Expense, Category::Other, 100),
        ];
        assert_eq!(compute_totals(&transactions).profit, Decimal::new(-75, 0));
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let transactions = sample();
        let reference = day(2026, 10, 15);

        let first = filter_by_date_window(&transactions, DateFilter::Month, reference);
        let second = filter_by_date_window(&transactions, DateFilter::Month, reference);
        assert_eq!(first, second);
        assert_eq!(group_by_category(first.iter()), group_by_category(second.iter()));
        assert_eq!(compute_totals(first.iter()), compute_totals(second.iter()));
    }

    #[test]
    fn test_count_by_category() {
        assert_eq!(count_by_category(&sample(), Category::Service), 3);
        assert_eq!(count_by_category(&sample(), Category::Other), 1);
        assert_eq!(count_by_category(&Vec::<Transaction>::new(), Category::Service), 0);
    }

    #[test]
    fn test_daily_income_series() {
        let transactions = vec![
            tx("1", "2026-10-15", TransactionType::Income, Category::Service, 25),
            tx("2", "2026-10-15", TransactionType::Income, Category::Service, 20),
            tx("3", "2026-10-09", TransactionType::Income, Category::Service, 30),
            tx("4", "2026-10-12", TransactionType::Expense, Category::Other, 99),
            tx("5", "2026-10-08", TransactionType::Income, Category::Service, 50),
            tx("6", "garbage", TransactionType::Income, Category::Service, 50),
        ];

        let series = daily_income_series(&transactions, day(2026, 10, 15), 7);
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].date, day(2026, 10, 9));
        assert_eq!(series[0].total, Decimal::new(30, 0));
        assert_eq!(series[3].date, day(2026, 10, 12));
        assert_eq!(series[3].total, Decimal::ZERO);
        assert_eq!(series[6].date, day(2026, 10, 15));
        assert_eq!(series[6].total, Decimal::new(45, 0));
    }

    #[test]
    fn test_window_across_month_boundary() {
        let window = DateFilter::Month.window(day(2026, 3, 1)).unwrap();
        assert_eq!(window.start, day(2026, 1, 31));
        assert_eq!(window.end, day(2026, 3, 1));
    }

    #[test]
    fn test_sums_saturate_instead_of_overflowing() {
        let huge = Decimal::from_scientific("5e28").unwrap();
        let mut transactions = vec![
            tx("a", "2026-10-15", TransactionType::Income, Category::Service, 0),
            tx("b", "2026-10-15", TransactionType::Income, Category::Service, 0),
        ];
        for t in &mut transactions {
            t.value = huge;
        }
        let reference = day(2026, 10, 15);

        let totals = compute_totals(&transactions);
        assert_eq!(totals.income, Decimal::MAX);
        assert_eq!(totals.profit, Decimal::MAX);

        let groups = group_by_category(&transactions);
        assert_eq!(groups[0].total, Decimal::MAX);

        let series = daily_income_series(&transactions, reference, 7);
        assert_eq!(series[6].total, Decimal::MAX);
    }
}
