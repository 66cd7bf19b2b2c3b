use super::validation::{ValidationError, check_gender_sum};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One worship service, keyed by its calendar date.
///
/// Field order is the column order of `service_records` and of the CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub event_date: NaiveDate,    // ⇔ service_records.event_date (TEXT "YYYY-MM-DD", UNIQUE)
    pub site_attendance: u32,     // everyone on site, may differ from the service count
    pub total_attendance: u32,    // counted at the service
    pub male_count: u32,
    pub female_count: u32,
    pub salvation_calls: u32,
    pub new_people: u32,
}

impl ServiceRecord {
    /// Entry-boundary check: `male_count + female_count == total_attendance`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_gender_sum(self.male_count, self.female_count, self.total_attendance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(total: u32, male: u32, female: u32) -> ServiceRecord {
        ServiceRecord {
            event_date: NaiveDate::from_ymd_opt(2026, 1, 4).unwrap(),
            site_attendance: 70,
            total_attendance: total,
            male_count: male,
            female_count: female,
            salvation_calls: 2,
            new_people: 3,
        }
    }

    #[test]
    fn validate_checks_gender_sum() {
        assert!(record(50, 20, 30).validate().is_ok());
        assert!(record(50, 20, 29).validate().is_err());
    }

    #[test]
    fn site_attendance_is_not_constrained() {
        let mut r = record(50, 20, 30);
        r.site_attendance = 10;
        assert!(r.validate().is_ok());
    }
}
