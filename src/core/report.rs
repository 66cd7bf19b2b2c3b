//! Text rendering of KPIs, charts and record tables.
//!
//! Everything here returns a `String`; printing and empty-state messages are
//! left to the CLI commands.

use crate::core::range::DateRange;
use crate::core::summary::{
    PrayerSummary, ServiceField, ServiceSummary, prayer_totals_by_date, prayer_totals_by_mode,
    service_series,
};
use crate::models::{PrayerRecord, ServiceRecord};
use crate::utils::colors::{CYAN, RESET, series_color};
use crate::utils::formatting::{bold, pad_right, percent};
use crate::utils::table::{Column, Table};
use clap::ValueEnum;
use unicode_width::UnicodeWidthStr;

const BAR: char = '█';

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ServiceChart {
    /// Attendance per service
    Attendance,
    /// Men and women per service
    Gender,
    /// Salvation calls and new people per service
    Outreach,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PrayerChart {
    /// Attendance per date, all selected modes summed
    Trend,
    /// On site vs remote
    Mode,
}

/// A chart line group: label plus one value per series.
struct Group {
    label: String,
    values: Vec<(&'static str, u64)>,
}

fn bar_len(value: u64, max: u64, width: usize) -> usize {
    if max == 0 || value == 0 {
        return 0;
    }
    let len = (value as f64 * width as f64 / max as f64).round() as usize;
    len.max(1)
}

/// Horizontal bar chart; every bar is scaled against the largest value.
fn render_chart(groups: &[Group], width: usize) -> String {
    let max = groups
        .iter()
        .flat_map(|g| g.values.iter().map(|(_, v)| *v))
        .max()
        .unwrap_or(0);

    let label_w = groups
        .iter()
        .map(|g| UnicodeWidthStr::width(g.label.as_str()))
        .max()
        .unwrap_or(0);
    let series_w = groups
        .iter()
        .flat_map(|g| g.values.iter().map(|(s, _)| UnicodeWidthStr::width(*s)))
        .max()
        .unwrap_or(0);
    let multi = groups.iter().any(|g| g.values.len() > 1);

    let mut out = String::new();
    for g in groups {
        for (i, (series, value)) in g.values.iter().enumerate() {
            let label = if i == 0 { g.label.as_str() } else { "" };
            out.push_str(&pad_right(label, label_w));
            if multi {
                out.push(' ');
                out.push_str(&pad_right(series, series_w));
            }
            let bar: String = std::iter::repeat_n(BAR, bar_len(*value, max, width)).collect();
            out.push_str(&format!(
                " │{}{bar}{RESET} {value}\n",
                series_color(i)
            ));
        }
    }
    out
}

fn kpi_line(items: &[(&str, String)]) -> String {
    let mut t = Table::new(items.iter().map(|(label, _)| Column::right(label)).collect());
    t.add_row(items.iter().map(|(_, v)| v.clone()).collect());
    t.render()
}

fn title(section: &str, range: Option<DateRange>) -> String {
    match range {
        Some(r) => format!("{CYAN}=== {section} · {r} ==={RESET}\n"),
        None => format!("{CYAN}=== {section} ==={RESET}\n"),
    }
}

pub fn service_kpis(summary: &ServiceSummary) -> String {
    let mut out = kpi_line(&[
        ("Services", summary.events.to_string()),
        ("Present", summary.total_attendance.to_string()),
        ("Women", summary.female_count.to_string()),
        ("Men", summary.male_count.to_string()),
    ]);
    out.push('\n');
    out.push_str(&kpi_line(&[
        ("Salvation calls", summary.salvation_calls.to_string()),
        ("New people", summary.new_people.to_string()),
        ("On site", summary.site_attendance.to_string()),
    ]));
    out
}

pub fn prayer_kpis(summary: &PrayerSummary) -> String {
    kpi_line(&[
        ("Meetings", summary.meetings.to_string()),
        ("Participants", summary.total_attendance.to_string()),
        ("Women", summary.female_count.to_string()),
        ("Men", summary.male_count.to_string()),
        ("On site", summary.on_site_total.to_string()),
        ("Remote", summary.remote_total.to_string()),
    ])
}

pub fn service_chart(records: &[ServiceRecord], chart: ServiceChart, width: usize) -> String {
    let fields: &[ServiceField] = match chart {
        ServiceChart::Attendance => &[ServiceField::TotalAttendance],
        ServiceChart::Gender => &[ServiceField::MaleCount, ServiceField::FemaleCount],
        ServiceChart::Outreach => &[ServiceField::SalvationCalls, ServiceField::NewPeople],
    };

    let series: Vec<_> = fields
        .iter()
        .map(|f| (f.label(), service_series(records, *f)))
        .collect();

    let groups: Vec<Group> = series[0]
        .1
        .keys()
        .map(|date| Group {
            label: date.to_string(),
            values: series
                .iter()
                .map(|(label, s)| (*label, s.get(date).copied().unwrap_or(0)))
                .collect(),
        })
        .collect();

    render_chart(&groups, width)
}

pub fn prayer_chart(records: &[PrayerRecord], chart: PrayerChart, width: usize) -> String {
    let groups: Vec<Group> = match chart {
        PrayerChart::Trend => prayer_totals_by_date(records)
            .into_iter()
            .map(|(date, total)| Group {
                label: date.to_string(),
                values: vec![("participants", total)],
            })
            .collect(),
        PrayerChart::Mode => {
            let by_mode = prayer_totals_by_mode(records);
            let all: u64 = by_mode.values().sum();
            by_mode
                .into_iter()
                .map(|(mode, total)| Group {
                    label: format!("{} ({})", mode.label(), percent(total, all)),
                    values: vec![("participants", total)],
                })
                .collect()
        }
    };

    render_chart(&groups, width)
}

pub fn service_table(records: &[ServiceRecord]) -> String {
    let mut t = Table::new(vec![
        Column::left("date"),
        Column::right("on site"),
        Column::right("total"),
        Column::right("men"),
        Column::right("women"),
        Column::right("salvation"),
        Column::right("new"),
    ]);
    for r in records {
        t.add_row(vec![
            r.event_date.to_string(),
            r.site_attendance.to_string(),
            r.total_attendance.to_string(),
            r.male_count.to_string(),
            r.female_count.to_string(),
            r.salvation_calls.to_string(),
            r.new_people.to_string(),
        ]);
    }
    t.render()
}

pub fn prayer_table(records: &[PrayerRecord]) -> String {
    let mut t = Table::new(vec![
        Column::left("date"),
        Column::left("mode"),
        Column::right("total"),
        Column::right("men"),
        Column::right("women"),
    ]);
    for r in records {
        t.add_row(vec![
            r.event_date.to_string(),
            r.mode.to_db_str().to_string(),
            r.total_attendance.to_string(),
            r.male_count.to_string(),
            r.female_count.to_string(),
        ]);
    }
    t.render()
}

/// Full analysis of a non-empty service window.
pub fn service_report(
    records: &[ServiceRecord],
    range: Option<DateRange>,
    chart: ServiceChart,
    details: bool,
    width: usize,
) -> String {
    let mut out = title("Services", range);
    out.push_str(&service_kpis(&ServiceSummary::from_records(records)));
    out.push('\n');
    out.push_str(&bold(&format!("{:?}", chart)));
    out.push('\n');
    out.push_str(&service_chart(records, chart, width));
    if details {
        out.push('\n');
        out.push_str(&service_table(records));
    }
    out
}

/// Full analysis of a non-empty prayer window.
pub fn prayer_report(
    records: &[PrayerRecord],
    range: Option<DateRange>,
    chart: PrayerChart,
    details: bool,
    width: usize,
) -> String {
    let mut out = title("Prayer meetings", range);
    out.push_str(&prayer_kpis(&PrayerSummary::from_records(records)));
    out.push('\n');
    out.push_str(&bold(&format!("{:?}", chart)));
    out.push('\n');
    out.push_str(&prayer_chart(records, chart, width));
    if details {
        out.push('\n');
        out.push_str(&prayer_table(records));
    }
    out
}
