pub mod config;
pub mod dashboard;
pub mod db;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod prayer;
pub mod report;
pub mod service;

use crate::config::Config;
use crate::core::cache;
use crate::core::store::AttendanceStore;
use crate::db::pool::DbPool;
use crate::db::repository::SqliteAttendanceRepository;
use crate::errors::{AppError, AppResult};
use crate::models::PrayerMode;
use crate::utils::date;
use chrono::NaiveDate;

/// Store over the opened database, sharing the process-wide cache.
pub(crate) fn open_store<'a>(
    pool: &'a DbPool,
    cfg: &Config,
) -> AttendanceStore<'static, SqliteAttendanceRepository<'a>> {
    AttendanceStore::new(
        SqliteAttendanceRepository::new(&pool.conn),
        cache::global(),
        cfg.cache_invalidation,
    )
}

/// `--mode` values; nothing given means every mode.
pub(crate) fn selected_modes(modes: &[PrayerMode]) -> Vec<PrayerMode> {
    if modes.is_empty() {
        return PrayerMode::ALL.to_vec();
    }
    let mut out = modes.to_vec();
    out.sort();
    out.dedup();
    out
}

pub(crate) fn parse_date_arg(s: &str) -> AppResult<NaiveDate> {
    date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_mode_means_all_modes() {
        assert_eq!(selected_modes(&[]), PrayerMode::ALL.to_vec());
        assert_eq!(
            selected_modes(&[PrayerMode::Remote, PrayerMode::Remote]),
            vec![PrayerMode::Remote]
        );
    }

    #[test]
    fn bad_dates_are_reported_verbatim() {
        match parse_date_arg("2026-02-30") {
            Err(AppError::InvalidDate(s)) => assert_eq!(s, "2026-02-30"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
