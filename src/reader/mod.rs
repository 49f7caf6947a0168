//! 表データ読み込みモジュール
//!
//! 参照台帳と入力住所リストを CSV / スプレッドシートから読み込む。
//! 1行目をヘッダーとして扱い、空セルは `None` にする。

mod delimited;
mod spreadsheet;

use crate::error::{AddressMatchError, Result};
use address_match_common::RawReferenceRow;
use std::path::Path;

/// 読み込んだ表（ヘッダー + データ行）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl Table {
    /// ヘッダー名から列番号を探す（前後の空白は無視）
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.headers.iter().position(|h| h.trim() == name)
    }

    /// 指定列のセル値（行が短い場合は `None`）
    pub fn column(&self, index: usize) -> impl Iterator<Item = Option<&str>> + '_ {
        self.rows
            .iter()
            .map(move |row| row.get(index).and_then(|cell| cell.as_deref()))
    }
}

/// 表ファイルの形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Spreadsheet,
}

impl TableFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" | "txt" => Ok(TableFormat::Csv),
            "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => Ok(TableFormat::Spreadsheet),
            _ => Err(AddressMatchError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// 表ファイルを読み込む
pub fn read_table(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(AddressMatchError::FileNotFound(path.display().to_string()));
    }

    let table = match TableFormat::from_path(path)? {
        TableFormat::Csv => delimited::read(path)?,
        TableFormat::Spreadsheet => spreadsheet::read(path)?,
    };

    if table.headers.is_empty() {
        return Err(AddressMatchError::EmptyTable(path.display().to_string()));
    }

    log::debug!(
        "{}: {} column(s), {} row(s)",
        path.display(),
        table.headers.len(),
        table.rows.len()
    );
    Ok(table)
}

/// 参照台帳を読み込む
///
/// # Arguments
/// * `path` - 台帳ファイル
/// * `address_column` - 住所列のヘッダー名
/// * `manager_column` - 管理会社列のヘッダー名
pub fn read_reference_rows(
    path: &Path,
    address_column: &str,
    manager_column: &str,
) -> Result<Vec<RawReferenceRow>> {
    let table = read_table(path)?;
    reference_rows_from_table(&table, address_column, manager_column, path)
}

fn reference_rows_from_table(
    table: &Table,
    address_column: &str,
    manager_column: &str,
    path: &Path,
) -> Result<Vec<RawReferenceRow>> {
    let missing = |column: &str| AddressMatchError::MissingColumn {
        file: path.display().to_string(),
        column: column.to_string(),
    };
    let address_idx = table.column_index(address_column).ok_or_else(|| missing(address_column))?;
    let manager_idx = table.column_index(manager_column).ok_or_else(|| missing(manager_column))?;

    let rows = table
        .column(address_idx)
        .zip(table.column(manager_idx))
        .map(|(address, manager)| RawReferenceRow {
            address: address.map(str::to_string),
            property_manager: manager.map(str::to_string),
        })
        .collect();

    Ok(rows)
}

/// 入力住所リストを読み込む（先頭列、空セルは除外）
pub fn read_input_addresses(path: &Path) -> Result<Vec<String>> {
    let table = read_table(path)?;
    Ok(table.column(0).flatten().map(str::to_string).collect())
}
