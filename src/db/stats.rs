use crate::db::pool::DbPool;
use crate::models::RecordKind;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

/// Row count and first/last date of one attendance table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStats {
    pub rows: i64,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

pub fn table_stats(pool: &DbPool, kind: RecordKind) -> rusqlite::Result<TableStats> {
    let table = kind.table_name();

    let rows: i64 = pool
        .conn
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })?;

    let (first_date, last_date): (Option<String>, Option<String>) = pool
        .conn
        .query_row(
            &format!("SELECT MIN(event_date), MAX(event_date) FROM {table}"),
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?
        .unwrap_or((None, None));

    Ok(TableStats {
        rows,
        first_date,
        last_date,
    })
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) PER TABLE
    //
    for kind in [RecordKind::Service, RecordKind::Prayer] {
        let stats = table_stats(pool, kind)?;
        let dash = format!("{GREY}--{RESET}");

        println!(
            "{}• {}:{} {}{}{} rows",
            CYAN,
            kind.table_name(),
            RESET,
            GREEN,
            stats.rows,
            RESET
        );
        println!(
            "    from: {}",
            stats.first_date.unwrap_or_else(|| dash.clone())
        );
        println!("    to:   {}", stats.last_date.unwrap_or(dash));
    }

    println!();
    Ok(())
}
