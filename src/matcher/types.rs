use address_match_common::MatchResult;
use serde::{Deserialize, Serialize};

/// 参照台帳の行エラー（他の行の照合は継続する）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowError {
    /// データ行番号（ヘッダー除く、1始まり）
    pub row: usize,
    pub message: String,
}

/// 集計情報
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub reference_rows: usize,
    pub indexed_records: usize,
    pub input_addresses: usize,
    pub matched_inputs: usize,
    pub unmatched_inputs: usize,
    pub result_rows: usize,
    pub generated_at: String,
}

/// 照合結果一式
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchReport {
    pub results: Vec<MatchResult>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<RowError>,

    #[serde(default)]
    pub summary: MatchSummary,
}
