//! Plain-text rendering of the dashboard, statement and catalogues
//!
//! Every function writes to the provided writer and does nothing else; the
//! figures come from [`crate::core`].

use clap::ValueEnum;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::io::{self, Write};

use crate::core::aggregation::{DailyTotal, FilteredTransactions};
use crate::core::dashboard::DashboardSummary;
use crate::types::{Product, ServiceType, Theme, TransactionType};
use crate::view::format::{format_currency, format_day_label, format_statement_date};

/// Width of the longest bar on the daily chart
const CHART_WIDTH: usize = 30;

pub fn render_dashboard(summary: &DashboardSummary, output: &mut dyn Write) -> io::Result<()> {
    writeln!(
        output,
        "DASHBOARD ({}, até {})",
        summary.filter,
        summary.reference.format("%d/%m/%Y")
    )?;
    writeln!(output)?;
    writeln!(output, "  Faturamento   {}", format_currency(summary.totals.income))?;
    writeln!(output, "  Despesas      {}", format_currency(summary.totals.expense))?;
    writeln!(output, "  Lucro Real    {}", format_currency(summary.totals.profit))?;
    writeln!(output, "  Atendimentos  {}", summary.service_count)?;

    writeln!(output)?;
    writeln!(output, "Faturamento diário")?;
    render_daily_chart(&summary.daily_income, output)?;

    writeln!(output)?;
    writeln!(output, "Por categoria")?;
    if summary.categories.is_empty() {
        writeln!(output, "  (sem registros)")?;
    }
    for entry in &summary.categories {
        writeln!(
            output,
            "  {:<10} {}",
            entry.category.label(),
            format_currency(entry.total)
        )?;
    }

    if summary.excluded > 0 {
        writeln!(output)?;
        writeln!(
            output,
            "{} registro(s) com data inválida fora do período",
            summary.excluded
        )?;
    }
    Ok(())
}

fn render_daily_chart(points: &[DailyTotal], output: &mut dyn Write) -> io::Result<()> {
    let max = points
        .iter()
        .map(|point| point.total)
        .max()
        .unwrap_or(Decimal::ZERO);

    for point in points {
        let bar = if max.is_zero() {
            0
        } else {
            // Ratio first; it is at most one
            (point.total / max * Decimal::from(CHART_WIDTH))
                .round()
                .to_usize()
                .unwrap_or(0)
        };
        writeln!(
            output,
            "  {}  {:<width$}  {}",
            format_day_label(point.date),
            "#".repeat(bar),
            format_currency(point.total),
            width = CHART_WIDTH
        )?;
    }
    Ok(())
}

/// Statement table: date, id, description, signed value
pub fn render_statement(filtered: &FilteredTransactions<'_>, output: &mut dyn Write) -> io::Result<()> {
    writeln!(output, "{:<9} {:<32} {:<30} {:>14}", "Data", "Id", "Descrição", "Valor")?;

    if filtered.is_empty() {
        writeln!(output, "(sem registros)")?;
    }

    for tx in filtered.iter() {
        let description = match &tx.customer_name {
            Some(customer) if !customer.is_empty() => format!("{} ({})", tx.description, customer),
            _ => tx.description.clone(),
        };
        let mut value = format_currency(tx.signed_value());
        if tx.tx_type == TransactionType::Income {
            value.insert(0, '+');
        }
        writeln!(
            output,
            "{:<9} {:<32} {:<30} {:>14}",
            format_statement_date(&tx.date),
            tx.id,
            description,
            value
        )?;
    }

    if filtered.excluded > 0 {
        writeln!(
            output,
            "{} registro(s) com data inválida omitido(s)",
            filtered.excluded
        )?;
    }
    Ok(())
}

/// Service price table
pub fn render_services(output: &mut dyn Write) -> io::Result<()> {
    for service in ServiceType::ALL {
        let name = service
            .to_possible_value()
            .map(|value| value.get_name().to_string())
            .unwrap_or_default();
        writeln!(
            output,
            "{:<20} {:<30} {}",
            name,
            service.label(),
            format_currency(service.price())
        )?;
    }
    Ok(())
}

pub fn render_products(products: &[Product], output: &mut dyn Write) -> io::Result<()> {
    if products.is_empty() {
        writeln!(output, "(nenhum produto)")?;
        return Ok(());
    }
    for product in products {
        writeln!(
            output,
            "{:<32} {:<30} {:>14} {:>6}",
            product.id,
            product.name,
            format_currency(product.price),
            product.stock
        )?;
    }
    Ok(())
}

pub fn render_theme(theme: Theme, output: &mut dyn Write) -> io::Result<()> {
    let label = match theme {
        Theme::Light => "Claro",
        Theme::Dark => "Escuro",
    };
    writeln!(output, "Tema: {} ({})", label, theme)
}
