//! CSV serialization of attendance records.
//!
//! Layout: UTF-8, comma separated, `\n` terminated, one header row with the
//! column names in schema order, then one row per record.

use crate::models::{PrayerRecord, ServiceRecord};
use csv::{Terminator, Writer, WriterBuilder};
use serde::Serialize;
use std::io::Write;

pub const SERVICE_HEADER: [&str; 7] = [
    "event_date",
    "site_attendance",
    "total_attendance",
    "male_count",
    "female_count",
    "salvation_calls",
    "new_people",
];

pub const PRAYER_HEADER: [&str; 5] = [
    "event_date",
    "mode",
    "total_attendance",
    "male_count",
    "female_count",
];

fn writer<W: Write>(out: W) -> Writer<W> {
    WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out)
}

fn write_rows<W: Write, T: Serialize>(out: W, header: &[&str], rows: &[T]) -> csv::Result<()> {
    let mut wtr = writer(out);

    // written by hand so an empty selection still yields a header
    wtr.write_record(header)?;
    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_service_csv<W: Write>(out: W, records: &[ServiceRecord]) -> csv::Result<()> {
    write_rows(out, &SERVICE_HEADER, records)
}

pub fn write_prayer_csv<W: Write>(out: W, records: &[PrayerRecord]) -> csv::Result<()> {
    write_rows(out, &PRAYER_HEADER, records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PrayerMode;
    use chrono::NaiveDate;

    #[test]
    fn service_rows_follow_schema_order() {
        let records = vec![ServiceRecord {
            event_date: NaiveDate::from_ymd_opt(2026, 1, 4).unwrap(),
            site_attendance: 72,
            total_attendance: 50,
            male_count: 20,
            female_count: 30,
            salvation_calls: 2,
            new_people: 5,
        }];

        let mut buf = Vec::new();
        write_service_csv(&mut buf, &records).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "event_date,site_attendance,total_attendance,male_count,female_count,salvation_calls,new_people\n\
             2026-01-04,72,50,20,30,2,5\n"
        );
    }

    #[test]
    fn prayer_mode_uses_storage_spelling() {
        let records = vec![PrayerRecord {
            event_date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            mode: PrayerMode::OnSite,
            total_attendance: 12,
            male_count: 5,
            female_count: 7,
        }];

        let mut buf = Vec::new();
        write_prayer_csv(&mut buf, &records).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "event_date,mode,total_attendance,male_count,female_count\n2026-01-05,ON_SITE,12,5,7\n"
        );
    }

    #[test]
    fn empty_selection_still_has_header() {
        let mut buf = Vec::new();
        write_prayer_csv(&mut buf, &[]).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "event_date,mode,total_attendance,male_count,female_count\n"
        );
    }
}
