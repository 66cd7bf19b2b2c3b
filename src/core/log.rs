use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use once_cell::sync::Lazy;
use regex::Regex;

const MAX_OP_WIDTH: usize = 60;

static ANSI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("ANSI pattern is a valid regex"));

fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Colour of an operation name in the printed log.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "init" => Colour::RGB(255, 153, 51),
        "migration_applied" => Colour::Purple,
        "vacuum" => Colour::Blue,
        "integrity_check" => Colour::Green,
        _ => Colour::White,
    }
}

/// One row of the `log` table, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub struct LogLogic;

impl LogLogic {
    pub fn load(pool: &DbPool) -> AppResult<Vec<LogEntry>> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(LogEntry {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }
        Ok(entries)
    }

    /// Formats entries as aligned lines; the operation name is coloured and
    /// the "operation (target)" column is cut at 60 visible characters.
    pub fn render(entries: &[LogEntry]) -> String {
        let op_targets: Vec<String> = entries
            .iter()
            .map(|e| {
                if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                }
            })
            .collect();

        let op_w = op_targets
            .iter()
            .map(|s| s.chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);

        let mut out = String::new();
        for (e, op_target) in entries.iter().zip(op_targets) {
            let color = color_for_operation(&e.operation);

            let visible = if op_target.chars().count() > MAX_OP_WIDTH {
                let mut s: String = op_target.chars().take(MAX_OP_WIDTH - 3).collect();
                s.push_str("...");
                s
            } else {
                op_target
            };

            // only the operation word is coloured
            let colored = match visible.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            out.push_str(&format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}\n",
                e.id,
                e.date,
                colored,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            ));
        }
        out
    }

    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = Self::load(pool)?;
        println!("📜 Internal log:\n");
        print!("{}", Self::render(&entries));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_show_up_in_the_log() {
        let pool = DbPool::open_in_memory().unwrap();
        let entries = LogLogic::load(&pool).unwrap();
        assert!(
            entries
                .iter()
                .any(|e| e.operation == "migration_applied"
                    && e.target == "20260105_0001_create_service_records")
        );
    }

    #[test]
    fn long_targets_are_truncated() {
        let entry = LogEntry {
            id: 7,
            date: "2026-01-05T10:00:00+01:00".into(),
            operation: "init".into(),
            target: "x".repeat(100),
            message: "done".into(),
        };
        let out = strip_ansi(&LogLogic::render(&[entry]));
        assert!(out.starts_with("7: 2026-01-05T10:00:00+01:00 | init ("));
        assert!(out.contains("... => done"));
    }
}
