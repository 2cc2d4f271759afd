// src/export/json.rs
use serde::Serialize;

use crate::error::Result;
use crate::record::Record;

/// Compact one-line JSON array of records. `[]` for no records.
pub fn serialize(records: &[Record]) -> Result<String> {
    to_json(records, false)
}

/// Same content as [`serialize`], indented.
pub fn serialize_pretty(records: &[Record]) -> Result<String> {
    to_json(records, true)
}

pub fn to_json<T: Serialize>(rows: &[T], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(rows)?
    } else {
        serde_json::to_string(rows)?
    };
    Ok(json)
}
