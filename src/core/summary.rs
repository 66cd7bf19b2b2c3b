//! Filters and aggregates over loaded attendance snapshots.
//!
//! Event counts are distinct-key counts (date for services, date + mode for
//! prayers), never row counts.

use crate::core::range::DateRange;
use crate::models::{PrayerMode, PrayerRecord, ServiceRecord};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};

/// Service records inside `range` (all of them when `range` is `None`).
pub fn filter_services(records: &[ServiceRecord], range: Option<DateRange>) -> Vec<ServiceRecord> {
    records
        .iter()
        .filter(|r| range.is_none_or(|w| w.contains(r.event_date)))
        .cloned()
        .collect()
}

/// Prayer records inside `range` whose mode is one of `modes`.
/// An empty `modes` slice selects nothing, like an empty multiselect.
pub fn filter_prayers(
    records: &[PrayerRecord],
    range: Option<DateRange>,
    modes: &[PrayerMode],
) -> Vec<PrayerRecord> {
    records
        .iter()
        .filter(|r| range.is_none_or(|w| w.contains(r.event_date)))
        .filter(|r| modes.contains(&r.mode))
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceSummary {
    pub events: usize,
    pub site_attendance: u64,
    pub total_attendance: u64,
    pub male_count: u64,
    pub female_count: u64,
    pub salvation_calls: u64,
    pub new_people: u64,
}

impl ServiceSummary {
    pub fn from_records(records: &[ServiceRecord]) -> Self {
        let dates: HashSet<NaiveDate> = records.iter().map(|r| r.event_date).collect();

        records.iter().fold(
            Self {
                events: dates.len(),
                ..Self::default()
            },
            |mut acc, r| {
                acc.site_attendance += u64::from(r.site_attendance);
                acc.total_attendance += u64::from(r.total_attendance);
                acc.male_count += u64::from(r.male_count);
                acc.female_count += u64::from(r.female_count);
                acc.salvation_calls += u64::from(r.salvation_calls);
                acc.new_people += u64::from(r.new_people);
                acc
            },
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrayerSummary {
    pub meetings: usize,
    pub total_attendance: u64,
    pub male_count: u64,
    pub female_count: u64,
    pub on_site_total: u64,
    pub remote_total: u64,
}

impl PrayerSummary {
    pub fn from_records(records: &[PrayerRecord]) -> Self {
        let keys: HashSet<(NaiveDate, PrayerMode)> = records.iter().map(PrayerRecord::key).collect();

        records.iter().fold(
            Self {
                meetings: keys.len(),
                ..Self::default()
            },
            |mut acc, r| {
                let total = u64::from(r.total_attendance);
                acc.total_attendance += total;
                acc.male_count += u64::from(r.male_count);
                acc.female_count += u64::from(r.female_count);
                match r.mode {
                    PrayerMode::OnSite => acc.on_site_total += total,
                    PrayerMode::Remote => acc.remote_total += total,
                }
                acc
            },
        )
    }
}

/// Numeric service columns that can be charted per date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceField {
    SiteAttendance,
    TotalAttendance,
    MaleCount,
    FemaleCount,
    SalvationCalls,
    NewPeople,
}

impl ServiceField {
    pub fn value(&self, r: &ServiceRecord) -> u32 {
        match self {
            ServiceField::SiteAttendance => r.site_attendance,
            ServiceField::TotalAttendance => r.total_attendance,
            ServiceField::MaleCount => r.male_count,
            ServiceField::FemaleCount => r.female_count,
            ServiceField::SalvationCalls => r.salvation_calls,
            ServiceField::NewPeople => r.new_people,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceField::SiteAttendance => "on site",
            ServiceField::TotalAttendance => "attendance",
            ServiceField::MaleCount => "men",
            ServiceField::FemaleCount => "women",
            ServiceField::SalvationCalls => "salvation calls",
            ServiceField::NewPeople => "new people",
        }
    }
}

/// Per-date sum of one service column, ascending by date.
pub fn service_series(records: &[ServiceRecord], field: ServiceField) -> BTreeMap<NaiveDate, u64> {
    let mut out = BTreeMap::new();
    for r in records {
        *out.entry(r.event_date).or_insert(0) += u64::from(field.value(r));
    }
    out
}

/// Prayer attendance per date, summed across modes.
pub fn prayer_totals_by_date(records: &[PrayerRecord]) -> BTreeMap<NaiveDate, u64> {
    let mut out = BTreeMap::new();
    for r in records {
        *out.entry(r.event_date).or_insert(0) += u64::from(r.total_attendance);
    }
    out
}

/// Prayer attendance per mode; only modes present in `records` appear.
pub fn prayer_totals_by_mode(records: &[PrayerRecord]) -> BTreeMap<PrayerMode, u64> {
    let mut out = BTreeMap::new();
    for r in records {
        *out.entry(r.mode).or_insert(0) += u64::from(r.total_attendance);
    }
    out
}
