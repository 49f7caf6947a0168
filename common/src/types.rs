//! 照合処理の型定義
//!
//! - RawReferenceRow: 参照台帳の読み込み直後の1行
//! - ReferenceRecord: インデックス構築済みの参照レコード
//! - MatchResult: 入力住所ごとの出力行

use serde::{Deserialize, Serialize};

/// 参照台帳の1行（未検証）
///
/// 表データの空セルは `None` として渡す。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawReferenceRow {
    pub address: Option<String>,
    pub property_manager: Option<String>,
}

impl RawReferenceRow {
    pub fn new(address: impl Into<String>, property_manager: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            property_manager: Some(property_manager.into()),
        }
    }
}

/// 参照レコード
///
/// 派生フィールド（`address_lower`, `street_name`）は構築時に一度だけ計算する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceRecord {
    address: String,
    property_manager: String,
    address_lower: String,
    street_name: Option<String>,
}

impl ReferenceRecord {
    pub(crate) fn new(
        address: String,
        property_manager: String,
        address_lower: String,
        street_name: Option<String>,
    ) -> Self {
        Self {
            address,
            property_manager,
            address_lower,
            street_name,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn property_manager(&self) -> &str {
        &self.property_manager
    }

    /// 小文字化した住所全体
    pub fn address_lower(&self) -> &str {
        &self.address_lower
    }

    /// 番地を除いた通り名（小文字）。番地を含まない住所は `None`
    pub fn street_name(&self) -> Option<&str> {
        self.street_name.as_deref()
    }
}

/// 照合結果の1行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "Original")]
    pub original: String,

    #[serde(rename = "Matched Address")]
    pub matched_address: Option<String>,

    #[serde(rename = "Property Manager")]
    pub property_manager: Option<String>,
}

impl MatchResult {
    /// 該当なしの行
    pub fn unmatched(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            matched_address: None,
            property_manager: None,
        }
    }

    pub fn is_match(&self) -> bool {
        self.matched_address.is_some()
    }
}
