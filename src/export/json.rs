use serde::Serialize;
use std::io::Write;

/// Pretty-printed JSON array of the given records.
pub fn write_json<W: Write, T: Serialize>(mut out: W, records: &[T]) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut out, records).map_err(std::io::Error::other)?;
    out.write_all(b"\n")?;
    out.flush()
}
