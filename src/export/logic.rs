// src/export/logic.rs

use crate::core::range::DateRange;
use crate::core::store::AttendanceStore;
use crate::core::summary::{filter_prayers, filter_services};
use crate::db::repository::AttendanceRepository;
use crate::errors::{AppError, AppResult};
use crate::export::csv::{write_prayer_csv, write_service_csv};
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::{ExportFormat, notify_export_success};
use crate::models::{PrayerMode, RecordKind};
use crate::ui::messages::{info, warning};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// What to export and where.
#[derive(Debug, Clone)]
pub struct ExportRequest<'a> {
    pub kind: RecordKind,
    pub format: ExportFormat,
    pub file: &'a str,
    pub range: Option<DateRange>,
    pub modes: &'a [PrayerMode],
    pub force: bool,
}

/// High level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Writes the filtered records of `req.kind` to `req.file`.
    ///
    /// Returns the number of exported rows; nothing is written when the
    /// selection is empty.
    pub fn export<R: AttendanceRepository>(
        store: &AttendanceStore<'_, R>,
        req: &ExportRequest<'_>,
    ) -> AppResult<usize> {
        let path = Path::new(req.file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {}",
                req.file
            )));
        }

        // select first: an empty selection must not prompt about overwriting
        let rows = match req.kind {
            RecordKind::Service => {
                let all = store.service_records()?;
                let selected = filter_services(&all, req.range);
                if selected.is_empty() {
                    warning("No service records found for the selected range.");
                    return Ok(0);
                }
                ensure_writable(path, req.force)?;
                Self::write(path, req.format, |out| match req.format {
                    ExportFormat::Csv => write_service_csv(out, &selected).map_err(csv_error),
                    ExportFormat::Json => Ok(write_json(out, &selected)?),
                })?;
                selected.len()
            }
            RecordKind::Prayer => {
                let all = store.prayer_records()?;
                let selected = filter_prayers(&all, req.range, req.modes);
                if selected.is_empty() {
                    warning("No prayer records found for the selected range / mode.");
                    return Ok(0);
                }
                ensure_writable(path, req.force)?;
                Self::write(path, req.format, |out| match req.format {
                    ExportFormat::Csv => write_prayer_csv(out, &selected).map_err(csv_error),
                    ExportFormat::Json => Ok(write_json(out, &selected)?),
                })?;
                selected.len()
            }
        };

        notify_export_success(&req.format.as_str().to_uppercase(), rows, path);
        log::info!(
            "event=export module=export kind={} format={} rows={rows}",
            req.kind.as_str(),
            req.format.as_str()
        );
        Ok(rows)
    }

    fn write<F>(path: &Path, format: ExportFormat, body: F) -> AppResult<()>
    where
        F: FnOnce(BufWriter<File>) -> AppResult<()>,
    {
        info(format!(
            "Exporting to {}: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));
        let file = File::create(path)?;
        body(BufWriter::new(file))
    }
}

fn csv_error(e: csv::Error) -> AppError {
    AppError::Export(format!("CSV write error: {e}"))
}
