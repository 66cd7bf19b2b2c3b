use crate::cli::commands::{open_store, selected_modes};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::range::resolve_range;
use crate::core::report::{prayer_table, service_table};
use crate::core::summary::{filter_prayers, filter_services};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::RecordKind;
use crate::ui::messages::{info, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { kind, range, modes } = cmd {
        let window = resolve_range(range.as_deref())?;
        let pool = DbPool::new(&cfg.database_path())?;
        let store = open_store(&pool, cfg);

        match kind {
            RecordKind::Service => {
                let all = store.service_records()?;
                if all.is_empty() {
                    info("No service recorded yet.");
                    return Ok(());
                }
                let rows = filter_services(&all, window);
                if rows.is_empty() {
                    warning("No service data for this period.");
                } else {
                    print!("{}", service_table(&rows));
                }
            }
            RecordKind::Prayer => {
                let all = store.prayer_records()?;
                if all.is_empty() {
                    info("No prayer meeting recorded yet.");
                    return Ok(());
                }
                let rows = filter_prayers(&all, window, &selected_modes(modes));
                if rows.is_empty() {
                    warning("No prayer data for this period / mode.");
                } else {
                    print!("{}", prayer_table(&rows));
                }
            }
        }
    }
    Ok(())
}
