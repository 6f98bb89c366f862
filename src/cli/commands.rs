//! Command execution
//!
//! Each run loads the stored state, turns the requested command into one or
//! more dispatched actions, persists whatever slice of state changed and
//! renders the view the state ends up on.

use chrono::{Local, NaiveDate};
use std::fs::File;
use std::io::Write;

use super::args::{AddArgs, CliArgs, Command, CutArgs, EditArgs, ProductCommand, ThemeMode};
use crate::core::{
    build_dashboard, filter_by_date_window, Action, AppState, Change, CutForm, KeyValueStore,
};
use crate::io::{write_statement_csv, FileStore, PersistenceAdapter};
use crate::types::{format_date, ProductDraft, Theme, TrackerError, TransactionDraft, ViewType};
use crate::view::{render_dashboard, render_products, render_services, render_statement, render_theme};

/// Run the parsed command line against the configured data directory
///
/// # Errors
///
/// Returns the first error raised by validation, storage or output.
pub fn run(args: &CliArgs, output: &mut dyn Write) -> Result<(), TrackerError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let mut adapter = PersistenceAdapter::new(FileStore::new(&args.data_dir));
    execute(args.command.clone(), today, &mut adapter, output)
}

/// Execute one command against any key-value store
///
/// `today` is the reference date for date windows and the default date of
/// new records.
pub fn execute<S: KeyValueStore>(
    command: Command,
    today: NaiveDate,
    adapter: &mut PersistenceAdapter<S>,
    output: &mut dyn Write,
) -> Result<(), TrackerError> {
    tracing::debug!(?command, %today, "executing command");
    let (mut state, summary) = adapter.load_state();
    if summary.transactions_rejected > 0 || summary.products_rejected > 0 {
        tracing::warn!(
            transactions = summary.transactions_rejected,
            products = summary.products_rejected,
            "stored records were skipped"
        );
    }

    match command {
        Command::Dashboard(filter) => {
            state.dispatch(Action::SetDateFilter(filter.filter))?;
            state.dispatch(Action::SetView(ViewType::Dashboard))?;
            render_current_view(&state, today, output)
        }
        Command::Statement(filter) => {
            state.dispatch(Action::SetDateFilter(filter.filter))?;
            state.dispatch(Action::SetView(ViewType::Statement))?;
            render_current_view(&state, today, output)
        }
        Command::Cut(cut) => {
            state.dispatch(Action::SetView(ViewType::Cut))?;
            let draft = fill_cut_form(cut, today).submit()?;
            record_transaction(&mut state, adapter, draft, today, output)
        }
        Command::Add(add) => {
            let draft = add_draft(add, today);
            record_transaction(&mut state, adapter, draft, today, output)
        }
        Command::Edit(edit) => {
            state.dispatch(Action::StartEditing(edit.id.clone()))?;
            let current = state
                .editing()
                .map(|tx| tx.to_draft())
                .ok_or_else(|| TrackerError::transaction_not_found(&edit.id))?;
            let id = edit.id.clone();
            let draft = apply_edit(current, edit);
            apply(&mut state, adapter, Action::SaveTransaction { draft, id: Some(id.clone()) })?;
            writeln!(output, "Atualizado: {}", id).map_err(TrackerError::output)?;
            render_current_view(&state, today, output)
        }
        Command::Delete { id } => {
            apply(&mut state, adapter, Action::DeleteTransaction(id.clone()))?;
            writeln!(output, "Removido: {}", id).map_err(TrackerError::output)
        }
        Command::Export { filter, output: path } => {
            let filtered = filter_by_date_window(state.transactions(), filter.filter, today);
            match path {
                Some(path) => {
                    let mut file = File::create(&path).map_err(|e| TrackerError::Export {
                        message: format!("cannot create {}: {}", path.display(), e),
                    })?;
                    write_statement_csv(filtered.iter(), &mut file)?;
                    tracing::info!(path = %path.display(), records = filtered.len(), "exported statement");
                    writeln!(
                        output,
                        "{} registro(s) exportado(s) para {}",
                        filtered.len(),
                        path.display()
                    )
                    .map_err(TrackerError::output)
                }
                None => write_statement_csv(filtered.iter(), output),
            }
        }
        Command::Services => render_services(output).map_err(TrackerError::output),
        Command::Product(product) => execute_product(product, &mut state, adapter, output),
        Command::Theme { mode } => {
            let action = match mode {
                None => None,
                Some(ThemeMode::Light) => Some(Action::SetTheme(Theme::Light)),
                Some(ThemeMode::Dark) => Some(Action::SetTheme(Theme::Dark)),
                Some(ThemeMode::Toggle) => Some(Action::ToggleTheme),
            };
            if let Some(action) = action {
                apply(&mut state, adapter, action)?;
            }
            render_theme(state.theme(), output).map_err(TrackerError::output)
        }
        Command::Reset { yes } => {
            if !yes {
                return Err(TrackerError::validation(
                    "reset",
                    "pass --yes to delete all stored data",
                ));
            }
            adapter.clear()?;
            writeln!(output, "Dados apagados").map_err(TrackerError::output)
        }
    }
}

fn execute_product<S: KeyValueStore>(
    command: ProductCommand,
    state: &mut AppState,
    adapter: &mut PersistenceAdapter<S>,
    output: &mut dyn Write,
) -> Result<(), TrackerError> {
    match command {
        ProductCommand::List => {}
        ProductCommand::Add { name, price, stock } => {
            let draft = ProductDraft { name, price, stock };
            apply(state, adapter, Action::SaveProduct { draft, id: None })?;
        }
        ProductCommand::Edit {
            id,
            name,
            price,
            stock,
        } => {
            let mut draft = state
                .product(&id)
                .map(|product| product.to_draft())
                .ok_or_else(|| TrackerError::product_not_found(&id))?;
            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(price) = price {
                draft.price = price;
            }
            if let Some(stock) = stock {
                draft.stock = stock;
            }
            apply(state, adapter, Action::SaveProduct { draft, id: Some(id) })?;
        }
        ProductCommand::Delete { id } => {
            apply(state, adapter, Action::DeleteProduct(id))?;
        }
    }
    render_products(state.products(), output).map_err(TrackerError::output)
}

fn fill_cut_form(cut: CutArgs, today: NaiveDate) -> CutForm {
    let mut form = CutForm::new(today);
    form.set_customer(cut.customer);
    if let Some(date) = cut.date {
        form.set_date(date);
    }
    form.select_service(cut.service);
    if let Some(value) = cut.value {
        form.set_value(value);
    }
    form
}

fn add_draft(add: AddArgs, today: NaiveDate) -> TransactionDraft {
    TransactionDraft {
        date: format_date(add.date.unwrap_or(today)),
        tx_type: add.tx_type,
        category: add.category,
        value: add.value,
        description: add.description,
        customer_name: add.customer.filter(|name| !name.trim().is_empty()),
    }
}

fn apply_edit(mut draft: TransactionDraft, edit: EditArgs) -> TransactionDraft {
    if let Some(tx_type) = edit.tx_type {
        draft.tx_type = tx_type;
    }
    if let Some(category) = edit.category {
        draft.category = category;
    }
    if let Some(value) = edit.value {
        draft.value = value;
    }
    if let Some(description) = edit.description {
        draft.description = description;
    }
    if let Some(customer) = edit.customer {
        let customer = customer.trim().to_string();
        draft.customer_name = (!customer.is_empty()).then_some(customer);
    }
    if let Some(date) = edit.date {
        draft.date = format_date(date);
    }
    draft
}

fn record_transaction<S: KeyValueStore>(
    state: &mut AppState,
    adapter: &mut PersistenceAdapter<S>,
    draft: TransactionDraft,
    today: NaiveDate,
    output: &mut dyn Write,
) -> Result<(), TrackerError> {
    apply(state, adapter, Action::SaveTransaction { draft, id: None })?;
    // New records are prepended
    if let Some(tx) = state.transactions().first() {
        writeln!(output, "Registrado: {}", tx.id).map_err(TrackerError::output)?;
    }
    render_current_view(state, today, output)
}

/// Dispatch an action and persist the slice of state it changed
fn apply<S: KeyValueStore>(
    state: &mut AppState,
    adapter: &mut PersistenceAdapter<S>,
    action: Action,
) -> Result<(), TrackerError> {
    match state.dispatch(action)? {
        Change::Transactions => adapter.save_transactions(state.transactions()),
        Change::Products => adapter.save_products(state.products()),
        Change::Theme => adapter.save_theme(state.theme()),
        Change::Ui => Ok(()),
    }
}

fn render_current_view(
    state: &AppState,
    today: NaiveDate,
    output: &mut dyn Write,
) -> Result<(), TrackerError> {
    let rendered = match state.view() {
        ViewType::Dashboard => {
            let summary = build_dashboard(state.transactions(), state.date_filter(), today);
            render_dashboard(&summary, output)
        }
        ViewType::Statement => {
            let filtered = filter_by_date_window(state.transactions(), state.date_filter(), today);
            render_statement(&filtered, output)
        }
        ViewType::Cut => Ok(()),
    };
    rendered.map_err(TrackerError::output)
}
