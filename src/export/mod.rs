// src/export/mod.rs
pub mod json;
pub mod sql;

use serde::Serialize;

use crate::config::{ExportFormat, ExportOptions};
use crate::csv;
use crate::error::Result;
use crate::record::Tabular;

/// Render rows in the format chosen by `export`.
pub fn render<T: Serialize + Tabular>(rows: &[T], export: &ExportOptions) -> Result<String> {
    let out = match export.format {
        ExportFormat::Json => json::to_json(rows, export.pretty)?,
        ExportFormat::Sql => sql::to_sql_string(&export.table, rows),
        ExportFormat::Csv | ExportFormat::Tsv => {
            let sep = export.format.delim().unwrap_or(',');
            csv::to_export_string(rows, export.include_headers, sep)
        }
    };
    Ok(out)
}
