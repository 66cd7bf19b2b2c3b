use super::prayer_mode::PrayerMode;
use super::validation::{ValidationError, check_gender_sum};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One prayer meeting, keyed by (date, mode).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerRecord {
    pub event_date: NaiveDate, // ⇔ prayer_records.event_date
    pub mode: PrayerMode,      // ⇔ prayer_records.mode ('ON_SITE' | 'REMOTE')
    pub total_attendance: u32,
    pub male_count: u32,
    pub female_count: u32,
}

impl PrayerRecord {
    /// Entry-boundary check: `male_count + female_count == total_attendance`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_gender_sum(self.male_count, self.female_count, self.total_attendance)
    }

    pub fn key(&self) -> (NaiveDate, PrayerMode) {
        (self.event_date, self.mode)
    }
}
