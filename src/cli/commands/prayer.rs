use crate::cli::commands::{open_store, parse_date_arg};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::prayer_table;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::PrayerRecord;
use crate::ui::messages::{error, success};

/// Validate then upsert a prayer record (one per date + mode).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Prayer {
        date,
        mode,
        total,
        male,
        female,
    } = cmd
    {
        let record = PrayerRecord {
            event_date: parse_date_arg(date)?,
            mode: *mode,
            total_attendance: *total,
            male_count: *male,
            female_count: *female,
        };

        if let Err(e) = record.validate() {
            error(format!("Check the counts: {e}"));
            return Err(e.into());
        }

        let pool = DbPool::new(&cfg.database_path())?;
        let store = open_store(&pool, cfg);
        let outcome = store.save_prayer(&record)?;

        success(format!(
            "Prayer meeting {} ({}) {}.",
            record.event_date,
            record.mode.label(),
            outcome.as_str()
        ));

        let stored: Vec<PrayerRecord> = store
            .prayer_records()?
            .iter()
            .filter(|r| r.key() == record.key())
            .cloned()
            .collect();
        print!("{}", prayer_table(&stored));
    }

    Ok(())
}
