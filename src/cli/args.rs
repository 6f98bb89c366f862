use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::types::{Category, DateFilter, ServiceType, TransactionType};

/// Finance tracker for a barbershop
#[derive(Parser, Debug)]
#[command(name = "barberflow")]
#[command(about = "Track barbershop income, expenses and products", long_about = None)]
pub struct CliArgs {
    /// Directory holding the stored lists and preferences
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        env = "BARBERFLOW_DATA_DIR",
        default_value = ".barberflow",
        global = true
    )]
    pub data_dir: PathBuf,

    /// Reference date for date windows and new records (default: today)
    #[arg(long, value_name = "YYYY-MM-DD", env = "BARBERFLOW_TODAY", global = true)]
    pub today: Option<NaiveDate>,

    /// Log level written to stderr (error, warn, info, debug, trace)
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        env = "BARBERFLOW_LOG",
        default_value = "warn",
        global = true
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Show income, expenses, profit and charts
    Dashboard(FilterArgs),

    /// Record a service rendered
    Cut(CutArgs),

    /// Record any income or expense
    Add(AddArgs),

    /// Replace fields of an existing transaction
    Edit(EditArgs),

    /// Delete a transaction
    Delete {
        /// Transaction identifier
        id: String,
    },

    /// List transactions, newest first
    Statement(FilterArgs),

    /// Write the statement as CSV
    Export {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output file (default: stdout)
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List services and their prices
    Services,

    /// Manage products
    #[command(subcommand)]
    Product(ProductCommand),

    /// Show or change the theme
    Theme {
        #[arg(value_enum)]
        mode: Option<ThemeMode>,
    },

    /// Delete all stored data
    Reset {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct FilterArgs {
    /// Date window
    #[arg(long, value_enum, default_value = "month")]
    pub filter: DateFilter,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct CutArgs {
    /// Customer name
    #[arg(long)]
    pub customer: String,

    /// Service rendered
    #[arg(long, value_enum, default_value = "cut")]
    pub service: ServiceType,

    /// Charged value (default: the service's list price)
    #[arg(long, allow_negative_numbers = true)]
    pub value: Option<Decimal>,

    /// Date of the service (default: reference date)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct AddArgs {
    #[arg(long = "type", value_enum)]
    pub tx_type: TransactionType,

    #[arg(long, value_enum)]
    pub category: Category,

    #[arg(long, allow_negative_numbers = true)]
    pub value: Decimal,

    #[arg(long)]
    pub description: String,

    #[arg(long)]
    pub customer: Option<String>,

    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct EditArgs {
    /// Transaction identifier
    pub id: String,

    #[arg(long = "type", value_enum)]
    pub tx_type: Option<TransactionType>,

    #[arg(long, value_enum)]
    pub category: Option<Category>,

    #[arg(long, allow_negative_numbers = true)]
    pub value: Option<Decimal>,

    #[arg(long)]
    pub description: Option<String>,

    /// New customer name; an empty string removes it
    #[arg(long)]
    pub customer: Option<String>,

    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ProductCommand {
    /// List products
    List,

    /// Add a product
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, allow_negative_numbers = true)]
        price: Decimal,
        #[arg(long, default_value_t = 0)]
        stock: u32,
    },

    /// Replace fields of a product
    Edit {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, allow_negative_numbers = true)]
        price: Option<Decimal>,
        #[arg(long)]
        stock: Option<u32>,
    },

    /// Delete a product
    Delete { id: String },
}

/// Theme change requested on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeMode {
    Light,
    Dark,
    Toggle,
}
