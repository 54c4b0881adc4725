use super::today;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::session::Session;
use crate::ui::messages::success;

pub fn handle(cli: &Cli, cfg: &Config, session: &Session) -> AppResult<()> {
    session.require_login()?;

    if let Commands::Export {
        sheet,
        format,
        file,
        force,
    } = &cli.command
    {
        let pool = DbPool::new(&cfg.database)?;
        let n = ExportLogic::export(&pool, cfg, *sheet, *format, file, *force, today(cli)?)?;

        audit(
            &pool.conn,
            "export",
            sheet.as_str(),
            &format!("{} rows as {} to {}", n, format.as_str(), file),
        );
        success(format!("{} export completed: {} ({} rows)", sheet.as_str(), file, n));
    }
    Ok(())
}
