//! 住所文字列の正規化
//!
//! 振込明細などから取り込んだ住所には請求書番号・参照コード・記号が混ざる。
//! 比較前にそれらを取り除き、小文字の正規形にそろえる。
//!
//! ## 処理フロー
//! 1. 取引キーワード（invoice/ref/payment/#）付きの数字列を除去
//!    （キーワードは省略可能なので、単独の数字列もすべて除去される）
//! 2. 英数字・空白・`/` 以外の記号を除去
//! 3. 連続する空白を1つにまとめてトリム
//! 4. 小文字化

use regex::Regex;

/// 住所を正規化する
///
/// 全域関数（失敗しない）。結果には通常数字が残らないため、
/// `normalize(normalize(s)) == normalize(s)` が成り立つ。
///
/// # Examples
/// ```
/// use address_match_common::normalize;
///
/// assert_eq!(normalize("Invoice 402 Elm Road"), "elm road");
/// ```
pub fn normalize(raw: &str) -> String {
    lazy_static::lazy_static! {
        // 取引ノイズ（キーワード + 数字 + 英数字/スラッシュ）
        static ref NOISE_RE: Regex =
            Regex::new(r"(?i)(invoice|ref|payment|#)?\s*\d+[a-zA-Z0-9/]*").unwrap();
        static ref PUNCT_RE: Regex = Regex::new(r"[^\w\s/]").unwrap();
        static ref SPACES_RE: Regex = Regex::new(r"\s{2,}").unwrap();
    }

    let without_noise = NOISE_RE.replace_all(raw, "");
    let without_punct = PUNCT_RE.replace_all(&without_noise, "");
    let collapsed = SPACES_RE.replace_all(&without_punct, " ");

    collapsed.trim().to_lowercase()
}
