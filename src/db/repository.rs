//! Attendance repository contract and its SQLite implementation.
//!
//! Reads return whole tables ordered by date. Writes are insert-or-replace
//! keyed on the natural key of each table: every non-key column takes the
//! new value, nothing is merged or accumulated.

use crate::errors::{AppError, AppResult};
use crate::models::{PrayerMode, PrayerRecord, ServiceRecord};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Row, params};

const SERVICE_SELECT_SQL: &str = "SELECT
    event_date,
    site_attendance,
    total_attendance,
    male_count,
    female_count,
    salvation_calls,
    new_people
FROM service_records
ORDER BY event_date ASC";

const PRAYER_SELECT_SQL: &str = "SELECT
    event_date,
    mode,
    total_attendance,
    male_count,
    female_count
FROM prayer_records
ORDER BY event_date ASC, mode ASC";

/// What an upsert did to the natural key it targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Replaced,
}

impl UpsertOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpsertOutcome::Inserted => "created",
            UpsertOutcome::Replaced => "updated",
        }
    }
}

/// Data access for both attendance streams.
pub trait AttendanceRepository {
    fn list_service_records(&self) -> AppResult<Vec<ServiceRecord>>;
    fn list_prayer_records(&self) -> AppResult<Vec<PrayerRecord>>;
    fn upsert_service_record(&self, record: &ServiceRecord) -> AppResult<UpsertOutcome>;
    fn upsert_prayer_record(&self, record: &PrayerRecord) -> AppResult<UpsertOutcome>;
}

/// SQLite-backed repository borrowing an already migrated connection.
pub struct SqliteAttendanceRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAttendanceRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl AttendanceRepository for SqliteAttendanceRepository<'_> {
    fn list_service_records(&self) -> AppResult<Vec<ServiceRecord>> {
        let mut stmt = self.conn.prepare_cached(SERVICE_SELECT_SQL)?;
        let rows = stmt.query_map([], map_service_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }

        log::debug!(
            "event=list module=repo table=service_records rows={}",
            out.len()
        );
        Ok(out)
    }

    fn list_prayer_records(&self) -> AppResult<Vec<PrayerRecord>> {
        let mut stmt = self.conn.prepare_cached(PRAYER_SELECT_SQL)?;
        let rows = stmt.query_map([], map_prayer_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }

        log::debug!(
            "event=list module=repo table=prayer_records rows={}",
            out.len()
        );
        Ok(out)
    }

    fn upsert_service_record(&self, record: &ServiceRecord) -> AppResult<UpsertOutcome> {
        record.validate()?;

        let date_str = format_date(&record.event_date);
        let tx = self.conn.unchecked_transaction()?;

        let existed = tx
            .query_row(
                "SELECT 1 FROM service_records WHERE event_date = ?1",
                [&date_str],
                |_| Ok(()),
            )
            .optional()?
            .is_some();

        tx.execute(
            "INSERT INTO service_records (
                event_date,
                site_attendance,
                total_attendance,
                male_count,
                female_count,
                salvation_calls,
                new_people
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            ON CONFLICT (event_date) DO UPDATE SET
                site_attendance  = excluded.site_attendance,
                total_attendance = excluded.total_attendance,
                male_count       = excluded.male_count,
                female_count     = excluded.female_count,
                salvation_calls  = excluded.salvation_calls,
                new_people       = excluded.new_people",
            params![
                date_str,
                record.site_attendance,
                record.total_attendance,
                record.male_count,
                record.female_count,
                record.salvation_calls,
                record.new_people,
            ],
        )?;

        tx.commit()?;

        let outcome = outcome_of(existed);
        log::info!(
            "event=upsert module=repo table=service_records key={} outcome={}",
            date_str,
            outcome.as_str()
        );
        Ok(outcome)
    }

    fn upsert_prayer_record(&self, record: &PrayerRecord) -> AppResult<UpsertOutcome> {
        record.validate()?;

        let date_str = format_date(&record.event_date);
        let mode = record.mode.to_db_str();
        let tx = self.conn.unchecked_transaction()?;

        let existed = tx
            .query_row(
                "SELECT 1 FROM prayer_records WHERE event_date = ?1 AND mode = ?2",
                params![date_str, mode],
                |_| Ok(()),
            )
            .optional()?
            .is_some();

        tx.execute(
            "INSERT INTO prayer_records (
                event_date,
                mode,
                total_attendance,
                male_count,
                female_count
            ) VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT (event_date, mode) DO UPDATE SET
                total_attendance = excluded.total_attendance,
                male_count       = excluded.male_count,
                female_count     = excluded.female_count",
            params![
                date_str,
                mode,
                record.total_attendance,
                record.male_count,
                record.female_count,
            ],
        )?;

        tx.commit()?;

        let outcome = outcome_of(existed);
        log::info!(
            "event=upsert module=repo table=prayer_records key={}/{} outcome={}",
            date_str,
            mode,
            outcome.as_str()
        );
        Ok(outcome)
    }
}

fn outcome_of(existed: bool) -> UpsertOutcome {
    if existed {
        UpsertOutcome::Replaced
    } else {
        UpsertOutcome::Inserted
    }
}

fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses a stored date, dropping any time-of-day component
/// (`2026-01-04`, `2026-01-04 00:00:00`, `2026-01-04T00:00:00+01:00`).
pub fn parse_stored_date(raw: &str) -> Option<NaiveDate> {
    let head = raw.trim().get(..10)?;
    NaiveDate::parse_from_str(head, "%Y-%m-%d").ok()
}

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

fn read_date(row: &Row) -> rusqlite::Result<NaiveDate> {
    let date_str: String = row.get("event_date")?;
    parse_stored_date(&date_str).ok_or_else(|| conversion_error(0, AppError::InvalidDate(date_str)))
}

fn map_service_row(row: &Row) -> rusqlite::Result<ServiceRecord> {
    Ok(ServiceRecord {
        event_date: read_date(row)?,
        site_attendance: row.get("site_attendance")?,
        total_attendance: row.get("total_attendance")?,
        male_count: row.get("male_count")?,
        female_count: row.get("female_count")?,
        salvation_calls: row.get("salvation_calls")?,
        new_people: row.get("new_people")?,
    })
}

fn map_prayer_row(row: &Row) -> rusqlite::Result<PrayerRecord> {
    let mode_str: String = row.get("mode")?;
    let mode = PrayerMode::from_db_str(&mode_str)
        .ok_or_else(|| conversion_error(1, AppError::InvalidMode(mode_str.clone())))?;

    Ok(PrayerRecord {
        event_date: read_date(row)?,
        mode,
        total_attendance: row.get("total_attendance")?,
        male_count: row.get("male_count")?,
        female_count: row.get("female_count")?,
    })
}
