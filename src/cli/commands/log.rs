use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::session::Session;

pub fn handle(cli: &Cli, cfg: &Config, session: &Session) -> AppResult<()> {
    session.require_login()?;

    if matches!(cli.command, Commands::Log { print: true }) {
        let pool = DbPool::new(&cfg.database)?;
        LogLogic::print_log(&pool)?;
    }

    Ok(())
}
