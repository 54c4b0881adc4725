//! ApotekHjelper library root.
//! Exposes the sheet row store, its backends, the derived views and the CLI
//! dispatcher used by main.rs.

pub mod backend;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod session;
pub mod store;
pub mod ui;
pub mod utils;
pub mod views;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use session::Session;

/// Log the session in with the password given on the command line.
fn login(cli: &Cli, cfg: &Config, session: &mut Session) -> AppResult<()> {
    let input = cli.password.as_deref().ok_or(AppError::NotAuthenticated)?;
    session.login(input, &cfg.password)
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, session: &mut Session) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        _ => {
            login(cli, cfg, session)?;
            match &cli.command {
                Commands::Todo { .. } => cli::commands::todo::handle(cli, cfg, session),
                Commands::Errors { .. } => cli::commands::errors::handle(cli, cfg, session),
                Commands::Expiry { .. } => cli::commands::expiry::handle(cli, cfg, session),
                Commands::Export { .. } => cli::commands::export::handle(cli, cfg, session),
                Commands::Log { .. } => cli::commands::log::handle(cli, cfg, session),
                Commands::Init { .. } | Commands::Config { .. } => Ok(()),
            }
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    let mut session = Session::new();
    dispatch(&cli, &cfg, &mut session)
}
