//! CSV table writer

use crate::output::traits::{OutputResult, TableRecord};
use std::path::Path;

/// Writes `records` to `path` as a comma-separated table.
///
/// Creates or truncates the file, writes one header row derived from
/// `R::FIELDS`, then one row per record. Quoting is handled by the CSV layer,
/// so cells may contain commas (tag lists are joined with `", "` upstream).
/// There is no partial-write recovery: a failure mid-write leaves a truncated
/// file behind.
pub fn write_table<R: TableRecord>(path: &Path, records: &[R]) -> OutputResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(R::FIELDS)?;
    for record in records {
        writer.write_record(record.to_row())?;
    }
    writer.flush()?;

    tracing::debug!("Wrote {} rows to {}", records.len(), path.display());
    Ok(())
}
