use crate::cli::commands::open_store;
use crate::config::Config;
use crate::core::report::{
    PrayerChart, ServiceChart, prayer_chart, prayer_kpis, service_chart, service_kpis,
};
use crate::core::summary::{PrayerSummary, ServiceSummary};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::bold;

/// Overview of everything recorded so far.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database_path())?;
    let store = open_store(&pool, cfg);

    header("Services");
    let services = store.service_records()?;
    if services.is_empty() {
        info("No service recorded yet.");
    } else {
        print!("{}", service_kpis(&ServiceSummary::from_records(&services)));
        println!("\n{}", bold("Attendance trend"));
        print!(
            "{}",
            service_chart(&services, ServiceChart::Attendance, cfg.chart_width)
        );
    }

    println!();
    header("Prayer meetings");
    let prayers = store.prayer_records()?;
    if prayers.is_empty() {
        info("No prayer meeting recorded yet.");
    } else {
        print!("{}", prayer_kpis(&PrayerSummary::from_records(&prayers)));
        println!("\n{}", bold("On site vs remote"));
        print!(
            "{}",
            prayer_chart(&prayers, PrayerChart::Mode, cfg.chart_width)
        );
    }

    Ok(())
}
