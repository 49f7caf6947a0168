//! スプレッドシート読み込み（xlsx/xls/xlsb/ods、先頭シートのみ）

use super::Table;
use crate::error::{AddressMatchError, Result};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

pub(super) fn read(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| AddressMatchError::Spreadsheet(format!("{}: {}", path.display(), e)))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| AddressMatchError::EmptyTable(path.display().to_string()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| AddressMatchError::Spreadsheet(format!("シート '{}': {}", sheet_name, e)))?;

    let mut rows = range.rows();
    let headers = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .map(|cell| cell_text(cell).unwrap_or_default().trim().to_string())
            .collect(),
        None => Vec::new(),
    };

    let rows = rows
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    Ok(Table { headers, rows })
}

/// セル値を文字列にする（空セルは `None`、整数値の浮動小数は小数点なし）
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::Float(f) => Some(format_float(*f)),
        Data::Int(i) => Some(i.to_string()),
        other => Some(other.to_string()),
    }
}

fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
