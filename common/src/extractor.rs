//! 番地・通り名の抽出

use regex::Regex;

/// 抽出結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedAddress {
    /// 最後に現れた数字列（通常は正規化で除去済みのため `None`）
    pub number: Option<String>,
    /// 先頭の番地を除いた通り名（小文字）
    pub street: String,
}

/// 正規化済み住所から番地と通り名を取り出す
///
/// # Arguments
/// * `normalized` - `normalize` 済みの住所
pub fn extract(normalized: &str) -> ExtractedAddress {
    lazy_static::lazy_static! {
        static ref NUMBER_RE: Regex = Regex::new(r"\d+").unwrap();
        // 先頭の「数字 + 空白」の繰り返しを読み飛ばし、残りを取る
        static ref STREET_RE: Regex = Regex::new(r"^(?:\d+\s*)*(.*)").unwrap();
    }

    let number = NUMBER_RE
        .find_iter(normalized)
        .last()
        .map(|m| m.as_str().to_string());

    let street = STREET_RE
        .captures(normalized)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(normalized);

    ExtractedAddress {
        number,
        street: street.trim().to_lowercase(),
    }
}
