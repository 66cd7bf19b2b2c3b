use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date; `today` is accepted as a shortcut.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("today") {
        return Some(today());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates_only() {
        assert_eq!(parse_date("2026-01-04"), NaiveDate::from_ymd_opt(2026, 1, 4));
        assert_eq!(parse_date("04/01/2026"), None);
        assert_eq!(parse_date("TODAY"), Some(today()));
    }
}
