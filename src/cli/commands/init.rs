use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file
///  - the SQLite workbook and its migrations
///  - the header rows of the three sheets
pub fn handle(cli: &Cli) -> AppResult<()> {
    let Commands::Init { secret } = &cli.command else {
        return Ok(());
    };

    let cfg = Config::init_all(cli.db.clone(), secret.clone())?;

    println!("⚙️  Initializing ApotekHjelper…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Workbook    : {}", cfg.database);

    let pool = DbPool::new(&cfg.database)?;

    // open() writes the header of an empty sheet and rejects a wrong one
    pool.todos(&cfg)?;
    pool.faulty(&cfg)?;
    pool.products(&cfg)?;

    audit(
        &pool.conn,
        "init",
        "workbook",
        &format!("Workbook initialized at {}", cfg.database),
    );

    if cfg.password.is_empty() {
        warning("No password configured: data commands stay locked until `init --secret` is run.");
    }

    success("ApotekHjelper initialization completed!");
    Ok(())
}
