use super::{report_missing, today};
use crate::cli::parser::{Cli, Commands, ErrorsAction};
use crate::config::Config;
use crate::core::faulty::{FaultyLogic, NewFaulty};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{FaultyItem, FaultyStatus};
use crate::session::Session;
use crate::ui::messages::{header, info, success};
use crate::ui::prompt::confirm;
use crate::utils::colors::{color_for_faulty, colorize_optional, paint};
use crate::utils::date;
use crate::utils::table::{Column, Table};
use crate::views::{FaultyFilter, build_faulty_view};

fn parse_status(s: &str) -> AppResult<FaultyStatus> {
    FaultyStatus::from_input(s).ok_or_else(|| AppError::InvalidStatus(s.to_string()))
}

fn render(items: &[FaultyItem]) -> String {
    let mut table = Table::new(vec![
        Column::new("date", 10),
        Column::new("sku", 14),
        Column::new("name", 28),
        Column::new("count", 5),
        Column::new("status", 11),
        Column::new("comment", 36),
        Column::new("id", 36),
    ]);

    for it in items {
        table.add_row(vec![
            colorize_optional(&crate::store::record::date_text(&it.date)),
            it.sku.clone(),
            it.name.clone(),
            it.bad_count.clone(),
            paint(color_for_faulty(it.status), it.status.label()),
            colorize_optional(&it.comment),
            it.id.clone(),
        ]);
    }
    table.render()
}

pub fn handle(cli: &Cli, cfg: &Config, session: &Session) -> AppResult<()> {
    session.require_login()?;

    let Commands::Errors { action } = &cli.command else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;
    let mut store = pool.faulty(cfg)?;
    let sheet = &cfg.sheets.errors;

    match action {
        ErrorsAction::Add {
            sku,
            name,
            date: date_str,
            count,
            status,
            comment,
        } => {
            let d = match date_str {
                Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
                None => today(cli)?,
            };

            let item = FaultyLogic::add(
                &mut store,
                NewFaulty {
                    date: d,
                    sku: sku.clone(),
                    name: name.clone(),
                    count: *count,
                    status: parse_status(status)?,
                    comment: comment.clone(),
                },
            )?;

            audit(&pool.conn, "add", sheet, &format!("{} {}", item.sku, item.name));
            success(format!("Registered {} (id: {})", item.name, item.id));
        }

        ErrorsAction::List {
            query,
            status,
            show_done,
            limit,
        } => {
            let mut filter = FaultyFilter {
                query: query.clone().unwrap_or_default(),
                show_done: *show_done,
                ..FaultyFilter::default()
            };
            if !status.is_empty() {
                filter.statuses = status
                    .iter()
                    .map(|s| parse_status(s))
                    .collect::<AppResult<Vec<_>>>()?;
            }

            let matching = build_faulty_view(store.load_all()?, &filter);
            let total = matching.len();

            // the header always counts every match; --limit only cuts the table
            filter.limit = limit.map(|n| n.unwrap_or_else(|| cfg.shortlist_size.clamp(5, 100)));
            let view = build_faulty_view(matching, &filter);

            header(format!("🧾 Faulty goods ({} rows)", total));
            if view.is_empty() {
                info("No rows match the filter.");
            } else {
                print!("{}", render(&view));
                if view.len() < total {
                    info(format!("Showing the first {} of {} rows.", view.len(), total));
                }
            }
        }

        ErrorsAction::SetStatus { id, status } => {
            let st = parse_status(status)?;
            if report_missing(FaultyLogic::set_status(&mut store, id, st))? {
                audit(&pool.conn, "status", sheet, &format!("{} → {}", id, st.to_sheet_str()));
                success(format!("Status of {} set to {}", id, st.label()));
            }
        }

        ErrorsAction::Done { id } => {
            if report_missing(FaultyLogic::set_status(&mut store, id, FaultyStatus::Done))? {
                audit(&pool.conn, "status", sheet, &format!("{} → Done", id));
                success(format!("Case {} marked as Done", id));
            }
        }

        ErrorsAction::Del { id, yes } => {
            if !*yes && !confirm(&format!("Delete case {}? This action is irreversible.", id)) {
                info("Operation cancelled.");
                return Ok(());
            }

            if report_missing(FaultyLogic::delete(&mut store, id))? {
                audit(&pool.conn, "del", sheet, id);
                success(format!("Deleted case {}", id));
            }
        }
    }

    Ok(())
}
