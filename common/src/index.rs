//! 参照インデックス
//!
//! 参照台帳の行を検証し、照合用の派生フィールドを一度だけ計算して保持する。
//! 構築後は読み取り専用で、複数スレッドから共有できる。

use crate::error::{Error, Result};
use crate::types::{RawReferenceRow, ReferenceRecord};
use regex::Regex;

/// 参照台帳の住所列名
pub const ADDRESS_FIELD: &str = "Address";
/// 参照台帳の管理会社列名
pub const PROPERTY_MANAGER_FIELD: &str = "Property Manager";

/// 読み取り専用の参照レコード集合（台帳の行順を保持）
#[derive(Debug, Clone, Default)]
pub struct ReferenceIndex {
    records: Vec<ReferenceRecord>,
}

impl ReferenceIndex {
    pub fn records(&self) -> &[ReferenceRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReferenceRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// インデックス構築結果
///
/// 不正な行は `errors` に行ごとに記録し、残りの行は通常どおり登録する。
#[derive(Debug, Clone, Default)]
pub struct IndexBuild {
    pub index: ReferenceIndex,
    pub errors: Vec<Error>,
}

impl IndexBuild {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// 参照台帳の行からインデックスを構築する
///
/// # Arguments
/// * `rows` - 台帳の行（ヘッダーを除く）。エラーの行番号は1始まり
pub fn build_index<I>(rows: I) -> IndexBuild
where
    I: IntoIterator<Item = RawReferenceRow>,
{
    let mut records = Vec::new();
    let mut errors = Vec::new();

    for (idx, row) in rows.into_iter().enumerate() {
        match validate_row(idx + 1, row) {
            Ok(record) => records.push(record),
            Err(e) => {
                log::warn!("skipping reference row: {}", e);
                errors.push(e);
            }
        }
    }

    log::info!(
        "reference index built: {} records, {} rejected",
        records.len(),
        errors.len()
    );

    IndexBuild {
        index: ReferenceIndex { records },
        errors,
    }
}

fn validate_row(row_number: usize, row: RawReferenceRow) -> Result<ReferenceRecord> {
    let address = non_empty(row.address).ok_or(Error::InvalidReferenceRecord {
        row: row_number,
        field: ADDRESS_FIELD,
    })?;
    let property_manager = non_empty(row.property_manager).ok_or(Error::InvalidReferenceRecord {
        row: row_number,
        field: PROPERTY_MANAGER_FIELD,
    })?;

    let address_lower = address.to_lowercase();
    let street_name = derive_street_name(&address);

    Ok(ReferenceRecord::new(address, property_manager, address_lower, street_name))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// 参照住所から通り名を取り出す
///
/// 最初の数字列（と直後の `/`・空白・`,`）より後ろを小文字化して返す。
/// 数字を含まない住所は `None`（どの照合段階にも一致しない）。
pub fn derive_street_name(address: &str) -> Option<String> {
    lazy_static::lazy_static! {
        static ref STREET_NAME_RE: Regex = Regex::new(r"\d+[/\s,]*\s*(.*)").unwrap();
    }

    STREET_NAME_RE
        .captures(address)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_lowercase().trim().to_string())
}
