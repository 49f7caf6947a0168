//! Address Match Common Library
//!
//! 住所照合のコア（正規化・抽出・参照インデックス・段階的照合・集約）。
//! ファイル入出力は持たず、CLIから読み込み済みの行を受け取る。

pub mod aggregate;
pub mod error;
pub mod extractor;
pub mod index;
pub mod matcher;
pub mod normalizer;
pub mod similarity;
pub mod types;

pub use aggregate::{aggregate, match_address, match_all, match_all_with_progress};
pub use error::{Error, Result};
pub use extractor::{extract, ExtractedAddress};
pub use index::{build_index, IndexBuild, ReferenceIndex};
pub use matcher::{find_matches, MatchOptions, MatchTier, Matches};
pub use normalizer::normalize;
pub use similarity::similarity_ratio;
pub use types::{MatchResult, RawReferenceRow, ReferenceRecord};
