use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::migrate::{pending_count, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};
use crate::utils::colors::{CYAN, RESET};
use rusqlite::Connection;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let db_path = cfg.database_path();

        // Migrations go through a bare connection so pending steps can be
        // counted before the pool applies them.
        if *migrate {
            let conn = Connection::open(&db_path)?;
            println!("{CYAN}▶ Running migrations…{RESET}");
            match pending_count(&conn)? {
                0 => info("Schema already up to date."),
                n => {
                    run_pending_migrations(&conn)?;
                    success(format!("{n} migration(s) applied."));
                }
            }
        }

        if !(*show_info || *check || *vacuum) {
            return Ok(());
        }

        let mut pool = DbPool::new(&db_path)?;

        if *show_info {
            stats::print_db_info(&pool, &db_path)?;
        }

        if *check {
            println!("{CYAN}▶ Running integrity check…{RESET}");

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                success("Integrity check passed.");
            } else {
                error(format!("Integrity check failed: {integrity}"));
            }
            ttlog(&pool.conn, "integrity_check", &db_path, &integrity)?;
        }

        if *vacuum {
            println!("{CYAN}▶ Running VACUUM…{RESET}");
            pool.with_conn(|conn| conn.execute_batch("VACUUM;"))?;
            ttlog(&pool.conn, "vacuum", &db_path, "Vacuum completed")?;
            success("Vacuum completed.");
        }
    }

    Ok(())
}
