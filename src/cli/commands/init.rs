use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// Creates the config directory and file (unless `--test`), then the SQLite
/// database with every migration applied.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing EJP Analytics…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {db_path}");

    init_db(&db_path)?;

    success(format!("Database initialized at {db_path}"));
    Ok(())
}
