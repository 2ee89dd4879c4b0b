use std::fs;
use std::path::Path;

use crate::error::ExportError;
use crate::output::row::Row;

/// Writes `rows` to `path` as comma-separated text: no header, no index column.
///
/// Missing parent directories are created. An existing file is overwritten.
pub fn write_table(path: &Path, rows: &[Row]) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_path(path)?;
    for row in rows {
        writer.write_record(&row.to_record())?;
    }
    writer.flush()?;
    Ok(())
}
