mod types;

pub use types::{MatchReport, MatchSummary, RowError};

use crate::config::Config;
use crate::error::Result;
use crate::reader;
use address_match_common::{build_index, match_all_with_progress, Error as CoreError, IndexBuild, MatchOptions};
use std::path::Path;

/// 読み込み済みの参照台帳
#[derive(Debug, Clone)]
pub struct ReferenceLoad {
    pub build: IndexBuild,
    /// 台帳のデータ行数（不正行を含む）
    pub rows: usize,
}

/// 参照台帳を読み込んでインデックスを構築する
pub fn load_reference(database_path: &Path, config: &Config) -> Result<ReferenceLoad> {
    let raw_rows = reader::read_reference_rows(database_path, &config.address_column, &config.manager_column)?;
    let rows = raw_rows.len();
    let build = build_index(raw_rows);
    Ok(ReferenceLoad { build, rows })
}

/// 入力住所を照合してレポートを作る
///
/// 台帳の不正行は `errors` に入れ、照合は残りの行で続行する。
pub fn run_matching<F>(
    reference: &ReferenceLoad,
    inputs: &[String],
    options: &MatchOptions,
    on_progress: F,
) -> MatchReport
where
    F: Fn() + Sync,
{
    let results = match_all_with_progress(&reference.build.index, inputs, options, on_progress);

    let unmatched_inputs = results.iter().filter(|r| !r.is_match()).count();
    let summary = MatchSummary {
        reference_rows: reference.rows,
        indexed_records: reference.build.index.len(),
        input_addresses: inputs.len(),
        matched_inputs: inputs.len() - unmatched_inputs,
        unmatched_inputs,
        result_rows: results.len(),
        generated_at: chrono::Local::now().to_rfc3339(),
    };

    MatchReport {
        results,
        errors: reference.build.errors.iter().map(row_error).collect(),
        summary,
    }
}

/// 参照台帳と入力ファイルを照合する
pub fn match_files(database_path: &Path, input_path: &Path, config: &Config) -> Result<MatchReport> {
    let reference = load_reference(database_path, config)?;
    let inputs = reader::read_input_addresses(input_path)?;
    Ok(run_matching(&reference, &inputs, &config.match_options(), || {}))
}

fn row_error(error: &CoreError) -> RowError {
    match error {
        CoreError::InvalidReferenceRecord { row, .. } => RowError {
            row: *row,
            message: error.to_string(),
        },
    }
}
