//! 段階的照合
//!
//! ## 照合段階
//! 1. 包含: 通り名に対象文字列を部分文字列として含むレコード
//!    - 番地があれば住所全体に番地を含むものへ絞り込み（該当があればそれを優先）
//! 2. 前方一致フォールバック（段階1が空のときのみ）:
//!    語数を1語ずつ減らした接頭辞ごとに包含判定し、類似度が閾値を超えたものを集める

use crate::index::ReferenceIndex;
use crate::similarity::similarity_ratio;
use crate::types::ReferenceRecord;

/// 照合オプション
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOptions {
    /// フォールバックで使う接頭辞の最小文字数（未満はスキップ）
    pub min_street_len: usize,
    /// フォールバックの類似度閾値（この値を超えたもののみ採用）
    pub min_similarity: f64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            min_street_len: 5,
            min_similarity: 0.5,
        }
    }
}

/// どの段階で一致したか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    /// 包含 + 番地絞り込み
    NumberRefined,
    /// 包含のみ
    Containment,
    /// 接頭辞 + 類似度
    Fallback,
}

impl std::fmt::Display for MatchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchTier::NumberRefined => write!(f, "number_refined"),
            MatchTier::Containment => write!(f, "containment"),
            MatchTier::Fallback => write!(f, "fallback"),
        }
    }
}

/// 照合結果（インデックスの行順）
#[derive(Debug, Clone, Default)]
pub struct Matches<'a> {
    /// 一致した段階。該当なしは `None`
    pub tier: Option<MatchTier>,
    pub records: Vec<&'a ReferenceRecord>,
}

impl<'a> Matches<'a> {
    fn none() -> Self {
        Self::default()
    }

    fn at(tier: MatchTier, records: Vec<&'a ReferenceRecord>) -> Self {
        if records.is_empty() {
            Self::none()
        } else {
            Self { tier: Some(tier), records }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// 通り名（と任意の番地）で参照インデックスを検索する
///
/// # Arguments
/// * `index` - 参照インデックス
/// * `target_number` - 番地（抽出できなかった場合は `None`）
/// * `target_street` - 正規化済みの通り名
/// * `options` - フォールバックの閾値
pub fn find_matches<'a>(
    index: &'a ReferenceIndex,
    target_number: Option<&str>,
    target_street: &str,
    options: &MatchOptions,
) -> Matches<'a> {
    let candidates: Vec<&ReferenceRecord> = index
        .iter()
        .filter(|r| street_contains(r, target_street))
        .collect();

    if !candidates.is_empty() {
        if let Some(number) = target_number {
            let refined = filter_by_number(&candidates, number);
            if !refined.is_empty() {
                log::debug!("'{}' matched {} record(s) by number {}", target_street, refined.len(), number);
                return Matches::at(MatchTier::NumberRefined, refined);
            }
        }
        log::debug!("'{}' matched {} record(s) by containment", target_street, candidates.len());
        return Matches::at(MatchTier::Containment, candidates);
    }

    let fallback = fallback_matches(index, target_number, target_street, options);
    log::debug!("'{}' fallback produced {} record(s)", target_street, fallback.len());
    Matches::at(MatchTier::Fallback, fallback)
}

/// 接頭辞を長い順に試し、各段階の一致をすべて連結する（重複は除かない）
fn fallback_matches<'a>(
    index: &'a ReferenceIndex,
    target_number: Option<&str>,
    target_street: &str,
    options: &MatchOptions,
) -> Vec<&'a ReferenceRecord> {
    let words: Vec<&str> = target_street.split_whitespace().collect();

    (1..=words.len())
        .rev()
        .map(|len| words[..len].join(" "))
        .filter(|prefix| prefix.chars().count() >= options.min_street_len)
        .flat_map(|prefix| prefix_matches(index, target_number, &prefix, options))
        .collect()
}

fn prefix_matches<'a>(
    index: &'a ReferenceIndex,
    target_number: Option<&str>,
    prefix: &str,
    options: &MatchOptions,
) -> Vec<&'a ReferenceRecord> {
    index
        .iter()
        .filter(|r| street_contains(r, prefix))
        .filter(|r| target_number.map_or(true, |n| r.address_lower().contains(n)))
        .filter(|r| {
            r.street_name()
                .is_some_and(|street| similarity_ratio(prefix, street) > options.min_similarity)
        })
        .collect()
}

fn street_contains(record: &ReferenceRecord, needle: &str) -> bool {
    record.street_name().is_some_and(|street| street.contains(needle))
}

fn filter_by_number<'a>(candidates: &[&'a ReferenceRecord], number: &str) -> Vec<&'a ReferenceRecord> {
    candidates
        .iter()
        .copied()
        .filter(|r| r.address_lower().contains(number))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::build_index;
    use crate::types::RawReferenceRow;

    fn index_of(rows: &[(&str, &str)]) -> ReferenceIndex {
        build_index(rows.iter().map(|(a, m)| RawReferenceRow::new(*a, *m))).index
    }

    fn addresses(matches: &Matches<'_>) -> Vec<String> {
        matches.records.iter().map(|r| r.address().to_string()).collect()
    }

    #[test]
    fn test_containment_returns_all_in_index_order() {
        let index = index_of(&[("12 Oak Street", "Acme"), ("45 Oak Street", "Beta"), ("9 Elm Road", "Gamma")]);
        let matches = find_matches(&index, None, "oak street", &MatchOptions::default());
        assert_eq!(matches.tier, Some(MatchTier::Containment));
        assert_eq!(addresses(&matches), vec!["12 Oak Street", "45 Oak Street"]);
    }

    #[test]
    fn test_containment_is_substring_not_token() {
        let index = index_of(&[("3 Oakley Road", "Acme")]);
        let matches = find_matches(&index, None, "oak", &MatchOptions::default());
        assert_eq!(addresses(&matches), vec!["3 Oakley Road"]);
    }

    #[test]
    fn test_number_refinement_takes_precedence() {
        let index = index_of(&[("12 Oak Street", "Acme"), ("45 Oak Street", "Beta")]);
        let matches = find_matches(&index, Some("45"), "oak street", &MatchOptions::default());
        assert_eq!(matches.tier, Some(MatchTier::NumberRefined));
        assert_eq!(addresses(&matches), vec!["45 Oak Street"]);
    }

    #[test]
    fn test_number_without_hit_falls_back_to_containment() {
        let index = index_of(&[("12 Oak Street", "Acme"), ("45 Oak Street", "Beta")]);
        let matches = find_matches(&index, Some("99"), "oak street", &MatchOptions::default());
        assert_eq!(matches.tier, Some(MatchTier::Containment));
        assert_eq!(matches.records.len(), 2);
    }

    #[test]
    fn test_records_without_street_name_never_match() {
        let index = index_of(&[("Oak Street", "NoNumber"), ("12 Oak Street", "Acme")]);
        let matches = find_matches(&index, None, "oak street", &MatchOptions::default());
        assert_eq!(addresses(&matches), vec!["12 Oak Street"]);
    }

    #[test]
    fn test_fallback_on_shorter_prefix() {
        // "maple avenue north" は含まれないが "maple avenue" は含まれる
        // "maple" 単独は類似度 10/22 で不採用
        let index = index_of(&[("100 Maple Avenue East", "Casa")]);
        let matches = find_matches(&index, None, "maple avenue north", &MatchOptions::default());
        assert_eq!(matches.tier, Some(MatchTier::Fallback));
        assert_eq!(addresses(&matches), vec!["100 Maple Avenue East"]);
    }

    #[test]
    fn test_fallback_accumulates_duplicates_across_prefixes() {
        // "maple avenue" (1.0) と "maple" (10/17 > 0.5) の両方で一致
        let index = index_of(&[("100 Maple Avenue", "Casa")]);
        let matches = find_matches(&index, None, "maple avenue west", &MatchOptions::default());
        assert_eq!(addresses(&matches), vec!["100 Maple Avenue", "100 Maple Avenue"]);
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(MatchTier::NumberRefined.to_string(), "number_refined");
        assert_eq!(MatchTier::Containment.to_string(), "containment");
        assert_eq!(MatchTier::Fallback.to_string(), "fallback");
    }

    #[test]
    fn test_fallback_skips_short_prefixes() {
        // "elm" は5文字未満なので試さない
        let index = index_of(&[("9 Elm Road", "Gamma")]);
        let matches = find_matches(&index, None, "elm street", &MatchOptions::default());
        assert!(matches.is_empty());
        assert_eq!(matches.tier, None);
    }

    #[test]
    fn test_fallback_rejects_low_similarity() {
        // "maple" は含まれるが類似度 10/35 <= 0.5
        let index = index_of(&[("1 Maple Avenue Industrial Estate", "Casa")]);
        let matches = find_matches(&index, None, "maple grove", &MatchOptions::default());
        assert!(matches.is_empty());
    }

    #[test]
    fn test_fallback_threshold_is_exclusive() {
        // "abcde" vs "abcde fghij" = 10/16 → 閾値 0.625 ちょうどは不採用
        let index = index_of(&[("1 abcde fghij", "X")]);
        let options = MatchOptions { min_street_len: 5, min_similarity: 0.625 };
        assert!(find_matches(&index, None, "abcde zzz", &options).is_empty());

        let looser = MatchOptions { min_street_len: 5, min_similarity: 0.6 };
        assert_eq!(find_matches(&index, None, "abcde zzz", &looser).records.len(), 1);
    }

    #[test]
    fn test_fallback_applies_number_filter() {
        let index = index_of(&[("100 Maple Avenue East", "Casa"), ("200 Maple Avenue East", "Dom")]);
        let matches = find_matches(&index, Some("200"), "maple avenue north", &MatchOptions::default());
        assert_eq!(addresses(&matches), vec!["200 Maple Avenue East"]);
    }

    #[test]
    fn test_empty_street_contains_every_street() {
        let index = index_of(&[("12 Oak Street", "Acme"), ("Nowhere", "None"), ("9 Elm Road", "Gamma")]);
        let matches = find_matches(&index, None, "", &MatchOptions::default());
        assert_eq!(addresses(&matches), vec!["12 Oak Street", "9 Elm Road"]);
    }

    #[test]
    fn test_no_match_example() {
        let index = index_of(&[("100 Maple Avenue", "Casa")]);
        let matches = find_matches(&index, None, "elm road", &MatchOptions::default());
        assert!(matches.is_empty());
    }

    #[test]
    fn test_order_independence_of_result_set() {
        let rows = [
            ("12 Oak Street", "Acme"),
            ("45 Oak Street", "Beta"),
            ("7 Oak Street North", "Delta"),
            ("9 Elm Road", "Gamma"),
        ];
        let mut reversed = rows;
        reversed.reverse();

        for target in ["oak street", "oak street north east", "elm road"] {
            let forward = index_of(&rows);
            let backward = index_of(&reversed);
            let mut a = addresses(&find_matches(&forward, None, target, &MatchOptions::default()));
            let mut b = addresses(&find_matches(&backward, None, target, &MatchOptions::default()));
            a.sort();
            b.sort();
            assert_eq!(a, b, "target {:?}", target);
        }
    }
}
