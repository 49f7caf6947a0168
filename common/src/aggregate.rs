//! 入力住所 → 出力行の集約
//!
//! 1件の入力住所は、一致レコードごとに1行、または該当なしの1行になる。
//! 入力どうしに依存関係はないため、`parallel` 機能では rayon で並列に処理する
//! （出力順は常に入力順）。

use crate::extractor::extract;
use crate::index::ReferenceIndex;
use crate::matcher::{find_matches, MatchOptions, Matches};
use crate::normalizer::normalize;
use crate::types::{MatchResult, ReferenceRecord};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// 照合結果を出力行に変換する
///
/// `matches` が空でも必ず1行（該当なし）を返す。
pub fn aggregate(input: &str, matches: &[&ReferenceRecord]) -> Vec<MatchResult> {
    if matches.is_empty() {
        return vec![MatchResult::unmatched(input)];
    }

    matches
        .iter()
        .map(|record| MatchResult {
            original: input.to_string(),
            matched_address: Some(record.address().to_string()),
            property_manager: Some(record.property_manager().to_string()),
        })
        .collect()
}

/// 生の入力住所1件を正規化・抽出して照合する
pub fn match_address<'a>(index: &'a ReferenceIndex, raw: &str, options: &MatchOptions) -> Matches<'a> {
    let normalized = normalize(raw);
    let extracted = extract(&normalized);
    find_matches(index, extracted.number.as_deref(), &extracted.street, options)
}

/// 全入力住所を照合する
///
/// 入力1件につき1行以上を、入力順に返す。
pub fn match_all<S>(index: &ReferenceIndex, inputs: &[S], options: &MatchOptions) -> Vec<MatchResult>
where
    S: AsRef<str> + Sync,
{
    match_all_with_progress(index, inputs, options, || {})
}

/// 全入力住所を照合する（1件処理するごとに `on_progress` を呼ぶ）
pub fn match_all_with_progress<S, F>(
    index: &ReferenceIndex,
    inputs: &[S],
    options: &MatchOptions,
    on_progress: F,
) -> Vec<MatchResult>
where
    S: AsRef<str> + Sync,
    F: Fn() + Sync,
{
    log::info!("matching {} input address(es) against {} record(s)", inputs.len(), index.len());

    let resolve = |input: &S| {
        let raw = input.as_ref();
        let matches = match_address(index, raw, options);
        on_progress();
        aggregate(raw, &matches.records)
    };

    #[cfg(feature = "parallel")]
    let per_input: Vec<Vec<MatchResult>> = inputs.par_iter().map(resolve).collect();

    #[cfg(not(feature = "parallel"))]
    let per_input: Vec<Vec<MatchResult>> = inputs.iter().map(resolve).collect();

    per_input.into_iter().flatten().collect()
}
