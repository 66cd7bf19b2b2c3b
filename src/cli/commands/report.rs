use crate::cli::commands::{open_store, selected_modes};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::range::{DateRange, resolve_range};
use crate::core::report::{PrayerChart, ServiceChart, prayer_report, service_report};
use crate::core::summary::{filter_prayers, filter_services};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::RecordKind;
use crate::ui::messages::warning;
use clap::ValueEnum;

fn parse_chart<T: ValueEnum>(raw: Option<&str>, default: T) -> AppResult<T> {
    match raw {
        None => Ok(default),
        Some(s) => T::from_str(s, true).map_err(|_| {
            let expected: Vec<String> = T::value_variants()
                .iter()
                .filter_map(|v| v.to_possible_value())
                .map(|v| v.get_name().to_string())
                .collect();
            AppError::InvalidChart(format!("{s} (expected one of: {})", expected.join(", ")))
        }),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        kind,
        range,
        modes,
        chart,
        details,
    } = cmd
    {
        let window = resolve_range(range.as_deref())?;
        let pool = DbPool::new(&cfg.database_path())?;
        let store = open_store(&pool, cfg);

        match kind {
            RecordKind::Service => {
                let chart = parse_chart(chart.as_deref(), ServiceChart::Attendance)?;
                let all = store.service_records()?;
                if all.is_empty() {
                    warning("No service data. Add one with `ejp-analytics service`.");
                    return Ok(());
                }

                // no --range: the whole recorded period
                let window =
                    window.or_else(|| DateRange::spanning(all.iter().map(|r| r.event_date)));
                let rows = filter_services(&all, window);
                if rows.is_empty() {
                    warning("No service data for this period.");
                    return Ok(());
                }
                print!(
                    "{}",
                    service_report(&rows, window, chart, *details, cfg.chart_width)
                );
            }
            RecordKind::Prayer => {
                let chart = parse_chart(chart.as_deref(), PrayerChart::Trend)?;
                let all = store.prayer_records()?;
                if all.is_empty() {
                    warning("No prayer data. Add one with `ejp-analytics prayer`.");
                    return Ok(());
                }

                let window =
                    window.or_else(|| DateRange::spanning(all.iter().map(|r| r.event_date)));
                let rows = filter_prayers(&all, window, &selected_modes(modes));
                if rows.is_empty() {
                    warning("No prayer data for this period / mode.");
                    return Ok(());
                }
                print!(
                    "{}",
                    prayer_report(&rows, window, chart, *details, cfg.chart_width)
                );
            }
        }
    }
    Ok(())
}
