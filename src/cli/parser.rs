use crate::export::{ExportFormat, SheetKind};
use clap::{Parser, Subcommand};

/// Command-line interface definition for ApotekHjelper
#[derive(Parser)]
#[command(
    name = "apotekhjelper",
    version = env!("CARGO_PKG_VERSION"),
    about = "Pharmacy helper: shared todos, faulty goods register and product expiry tracking",
    long_about = None
)]
pub struct Cli {
    /// Override workbook path (useful for tests or a shared workbook)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Shared password for the data commands
    #[arg(
        global = true,
        long = "password",
        env = "APOTEKHJELPER_PASSWORD",
        hide_env_values = true
    )]
    pub password: Option<String>,

    /// Pin "today" (YYYY-MM-DD) for deterministic output
    #[arg(global = true, long = "today", hide = true)]
    pub today: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration, the workbook and the sheet headers
    Init {
        #[arg(long = "secret", help = "Shared password to store in the configuration")]
        secret: Option<String>,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration (password masked)")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Shared todo list
    Todo {
        #[command(subcommand)]
        action: TodoAction,
    },

    /// Faulty goods register
    Errors {
        #[command(subcommand)]
        action: ErrorsAction,
    },

    /// Product expiry tracker
    Expiry {
        #[command(subcommand)]
        action: ExpiryAction,
    },

    /// Export a whole sheet
    Export {
        #[arg(long, value_enum)]
        sheet: SheetKind,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Absolute path of the output file")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum TodoAction {
    /// Add a todo
    Add { text: String },

    /// List todos
    List,

    /// Delete a todo by id
    Del { id: String },
}

#[derive(Subcommand)]
pub enum ErrorsAction {
    /// Register faulty goods
    Add {
        #[arg(long, help = "Product number (required)")]
        sku: String,

        #[arg(long, help = "Product name (required)")]
        name: String,

        #[arg(long, help = "Date of the case (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long, default_value_t = 1, help = "Number of faulty items (at least 1)")]
        count: u32,

        #[arg(long, default_value = "New", help = "New, InProgress or Done")]
        status: String,

        #[arg(long, default_value = "")]
        comment: String,
    },

    /// List cases matching the filters
    List {
        #[arg(long, short, help = "Search SKU / name / comment")]
        query: Option<String>,

        #[arg(
            long = "status",
            help = "Allowed status (repeatable, default: New and InProgress)"
        )]
        status: Vec<String>,

        #[arg(long = "show-done", help = "Include cases marked Done")]
        show_done: bool,

        #[arg(
            long,
            value_name = "N",
            help = "Show only the first N rows (bare --limit uses shortlist_size from the config)"
        )]
        limit: Option<Option<usize>>,
    },

    /// Change the status of a case
    SetStatus { id: String, status: String },

    /// Mark a case as Done
    Done { id: String },

    /// Delete a case
    Del {
        id: String,

        #[arg(long, short = 'y', help = "Confirm deletion without prompting")]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ExpiryAction {
    /// Track a product batch
    Add {
        #[arg(long)]
        sku: String,

        #[arg(long)]
        name: String,

        #[arg(long, help = "Expiry date (YYYY-MM-DD)")]
        expiry: String,

        #[arg(long, default_value = "")]
        location: String,
    },

    /// List products soonest to expire first
    List {
        #[arg(long, conflicts_with = "all", help = "Show items expiring within N days")]
        within: Option<i64>,

        #[arg(long, help = "No upper bound on days left")]
        all: bool,

        #[arg(long = "no-expired", help = "Hide already expired items")]
        no_expired: bool,

        #[arg(long = "include-unknown", help = "Include items with an unknown expiry date")]
        include_unknown: bool,

        #[arg(long, short, help = "Search SKU / name / location")]
        query: Option<String>,

        #[arg(long = "status", help = "Allowed status (repeatable)")]
        status: Vec<String>,
    },

    /// Delete a product by id
    Del { id: String },

    /// Delete every expired product
    Purge {
        #[arg(long, short = 'y', help = "Confirm without prompting")]
        yes: bool,
    },
}
