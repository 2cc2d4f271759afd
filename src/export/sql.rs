// src/export/sql.rs
use crate::core::sanitize::sql_quote;
use crate::record::{Cell, Tabular};

/// One `INSERT INTO table (cols) VALUES (vals);` per row.
pub fn insert_statements<T: Tabular>(table: &str, rows: &[T]) -> Vec<String> {
    let columns = T::columns().join(", ");
    rows.iter()
        .map(|row| {
            let values = row
                .cells()
                .iter()
                .map(|cell| match cell {
                    Cell::Text(s) => sql_quote(s),
                    Cell::Number(n) => n.clone(),
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("INSERT INTO {table} ({columns}) VALUES ({values});")
        })
        .collect()
}

/// All statements, one per line.
pub fn to_sql_string<T: Tabular>(table: &str, rows: &[T]) -> String {
    let mut out = s!();
    for stmt in insert_statements(table, rows) {
        out.push_str(&stmt);
        out.push('\n');
    }
    out
}
