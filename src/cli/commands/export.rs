use crate::cli::commands::{open_store, selected_modes};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::range::resolve_range;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::export::logic::ExportRequest;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        kind,
        format,
        file,
        range,
        modes,
        force,
    } = cmd
    {
        let modes = selected_modes(modes);
        let request = ExportRequest {
            kind: *kind,
            format: *format,
            file,
            range: resolve_range(range.as_deref())?,
            modes: &modes,
            force: *force,
        };

        let pool = DbPool::new(&cfg.database_path())?;
        let store = open_store(&pool, cfg);
        ExportLogic::export(&store, &request)?;
    }
    Ok(())
}
