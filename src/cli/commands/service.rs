use crate::cli::commands::{open_store, parse_date_arg};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::service_table;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::ServiceRecord;
use crate::ui::messages::{error, success};

/// Validate then upsert a service record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Service {
        date,
        site,
        total,
        male,
        female,
        salvation,
        new_people,
    } = cmd
    {
        //
        // 1. Build and check the record before touching the database
        //
        let record = ServiceRecord {
            event_date: parse_date_arg(date)?,
            site_attendance: *site,
            total_attendance: *total,
            male_count: *male,
            female_count: *female,
            salvation_calls: *salvation,
            new_people: *new_people,
        };

        if let Err(e) = record.validate() {
            error(format!("Check the counts: {e}"));
            return Err(e.into());
        }

        //
        // 2. Upsert
        //
        let pool = DbPool::new(&cfg.database_path())?;
        let store = open_store(&pool, cfg);
        let outcome = store.save_service(&record)?;

        success(format!(
            "Service {} {}.",
            record.event_date,
            outcome.as_str()
        ));

        //
        // 3. Show the stored row
        //
        let stored: Vec<ServiceRecord> = store
            .service_records()?
            .iter()
            .filter(|r| r.event_date == record.event_date)
            .cloned()
            .collect();
        print!("{}", service_table(&stored));
    }

    Ok(())
}
