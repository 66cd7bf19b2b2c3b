use crate::db::log::ttlog;
use crate::db::migrate::{pending_count, run_pending_migrations};
use crate::errors::AppResult;
use crate::ui::messages::warning;
use rusqlite::Connection;

/// Creates (or opens) the database at `db_path` with the full schema.
///
/// Returns how many migrations were applied. The `init` row in the internal
/// log is best effort: failing to write it only prints a warning.
pub fn init_db(db_path: &str) -> AppResult<usize> {
    let conn = Connection::open(db_path)?;

    let pending = pending_count(&conn)?;
    run_pending_migrations(&conn)?;

    if let Err(e) = ttlog(
        &conn,
        "init",
        db_path,
        &format!("Database initialized ({pending} migration(s) applied)"),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    log::info!("event=db_init module=db path={db_path} migrations={pending}");
    Ok(pending)
}
