// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::rows_to_string;
use crate::error::{Error, Result};
use crate::table::PriceTable;

/// Full export text (Copy/Export) for the table, honoring format + headers.
pub fn to_export_string(export: &ExportOptions, table: &PriceTable) -> String {
    let headers = PriceTable::headers();
    let headers = export.include_headers.then_some(headers.as_slice());
    rows_to_string(headers, &table.to_export_rows(), export.delimiter())
}

/// Write the table to `export.out_path()`, creating parent dirs.
/// Returns the final path written to.
pub fn write_export(export: &ExportOptions, table: &PriceTable) -> Result<PathBuf> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    fs::write(&path, to_export_string(export, table))?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
