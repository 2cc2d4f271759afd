// src/csv.rs
use std::io::{self, Write};

use crate::record::Tabular;

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Create a full export string from rows.
/// - `include_headers`: whether to emit the column-name line first
/// - `sep`: character to be used as field/cell separator
pub fn to_export_string<T: Tabular>(rows: &[T], include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers {
        let _ = write_row(&mut buf, T::columns(), sep);
    }
    for r in rows {
        let cells = r.cells();
        let texts: Vec<&str> = cells.iter().map(|c| c.as_text()).collect();
        let _ = write_row(&mut buf, texts.as_slice(), sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
