use super::report_missing;
use crate::cli::parser::{Cli, Commands, TodoAction};
use crate::config::Config;
use crate::core::todos::TodoLogic;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::session::Session;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{GREY, paint};

pub fn handle(cli: &Cli, cfg: &Config, session: &Session) -> AppResult<()> {
    session.require_login()?;

    let Commands::Todo { action } = &cli.command else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;
    let mut store = pool.todos(cfg)?;

    match action {
        TodoAction::Add { text } => {
            let todo = TodoLogic::add(&mut store, text)?;
            audit(&pool.conn, "add", &cfg.sheets.todos, &todo.text);
            success(format!("Added todo (id: {})", todo.id));
        }

        TodoAction::List => {
            header("✅ ApotekHjelper todos");
            let todos = TodoLogic::list(&mut store)?;

            if todos.is_empty() {
                info("No todos yet. Add one with `apotekhjelper todo add <text>`");
            } else {
                for t in &todos {
                    println!("• {}  {}", t.text, paint(GREY, &t.id));
                }
            }
        }

        TodoAction::Del { id } => {
            if report_missing(TodoLogic::delete(&mut store, id))? {
                audit(&pool.conn, "del", &cfg.sheets.todos, id);
                success(format!("Deleted todo {}", id));
            }
        }
    }

    Ok(())
}
