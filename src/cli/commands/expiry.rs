use super::{report_missing, today};
use crate::cli::parser::{Cli, Commands, ExpiryAction};
use crate::config::Config;
use crate::core::expiry::ExpiryLogic;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::session::Session;
use crate::store::record::date_text;
use crate::ui::messages::{header, info, success};
use crate::ui::prompt::confirm;
use crate::utils::colors::{color_for_expiry, colorize_optional, paint};
use crate::utils::date;
use crate::utils::table::{Column, Table};
use crate::views::{ExpiryFilter, ExpiryRow, ExpiryStatus, build_expiry_view};

fn render(rows: &[ExpiryRow]) -> String {
    let mut table = Table::new(vec![
        Column::new("sku", 14),
        Column::new("name", 28),
        Column::new("expiry", 10),
        Column::new("days_left", 9),
        Column::new("status", 13),
        Column::new("location", 20),
        Column::new("id", 36),
    ]);

    for r in rows {
        let p = &r.product;
        table.add_row(vec![
            p.sku.clone(),
            p.name.clone(),
            colorize_optional(&date_text(&p.expiry_date)),
            colorize_optional(&r.days_left.map(|d| d.to_string()).unwrap_or_default()),
            paint(color_for_expiry(r.status), r.status.label()),
            colorize_optional(&p.location),
            p.id.clone(),
        ]);
    }
    table.render()
}

pub fn handle(cli: &Cli, cfg: &Config, session: &Session) -> AppResult<()> {
    session.require_login()?;

    let Commands::Expiry { action } = &cli.command else {
        return Ok(());
    };

    let pool = DbPool::new(&cfg.database)?;
    let mut store = pool.products(cfg)?;
    let sheet = &cfg.sheets.products;
    let today = today(cli)?;

    match action {
        ExpiryAction::Add {
            sku,
            name,
            expiry,
            location,
        } => {
            let d = date::parse_date(expiry).ok_or_else(|| AppError::InvalidDate(expiry.clone()))?;
            let p = ExpiryLogic::add(&mut store, sku, name, d, location)?;

            audit(&pool.conn, "add", sheet, &format!("{} {} ({})", p.sku, p.name, expiry));
            success(format!("Tracking {} (id: {})", p.name, p.id));
        }

        ExpiryAction::List {
            within,
            all,
            no_expired,
            include_unknown,
            query,
            status,
        } => {
            let statuses = status
                .iter()
                .map(|s| {
                    ExpiryStatus::from_input(s).ok_or_else(|| AppError::InvalidStatus(s.clone()))
                })
                .collect::<AppResult<Vec<_>>>()?;

            let filter = ExpiryFilter {
                within_days: if *all {
                    None
                } else {
                    Some(within.unwrap_or(cfg.default_within_days))
                },
                include_expired: !*no_expired,
                include_unknown: *include_unknown,
                query: query.clone().unwrap_or_default(),
                statuses,
            };

            let view = build_expiry_view(store.load_all()?, today, &filter);

            header(format!("📦 Expiry products ({} rows, today {})", view.len(), today));
            if view.is_empty() {
                info("No products match the filter.");
            } else {
                print!("{}", render(&view));
            }
        }

        ExpiryAction::Del { id } => {
            if report_missing(ExpiryLogic::delete(&mut store, id))? {
                audit(&pool.conn, "del", sheet, id);
                success(format!("Deleted product {}", id));
            }
        }

        ExpiryAction::Purge { yes } => {
            let expired = ExpiryLogic::expired(&mut store, today)?;
            if expired.is_empty() {
                info("No expired products.");
                return Ok(());
            }

            if !*yes
                && !confirm(&format!(
                    "Delete {} expired products? This action is irreversible.",
                    expired.len()
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }

            let n = ExpiryLogic::purge_expired(&mut store, today)?;
            audit(
                &pool.conn,
                "purge",
                sheet,
                &format!("{} products expired before {}", n, today),
            );
            success(format!("Deleted {} expired products", n));
        }
    }

    Ok(())
}
