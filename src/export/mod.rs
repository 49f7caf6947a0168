pub mod excel;
pub mod json;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::matcher::MatchReport;
use std::path::{Path, PathBuf};

/// 既定の出力ファイル名（拡張子なし）
pub const DEFAULT_STEM: &str = "match_result";

fn output_path_for_format(output: &Path, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", DEFAULT_STEM, extension))
    } else {
        output.to_path_buf()
    }
}

fn output_paths_for_both(output: &Path) -> (PathBuf, PathBuf) {
    if output.is_dir() || output.extension().is_none() {
        let json_path = output.join(format!("{}.json", DEFAULT_STEM));
        let excel_path = output.join(format!("{}.xlsx", DEFAULT_STEM));
        (json_path, excel_path)
    } else {
        let parent = output.parent().unwrap_or_else(|| Path::new("."));
        let stem = output
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(DEFAULT_STEM);
        let json_path = parent.join(format!("{}.json", stem));
        let excel_path = parent.join(format!("{}.xlsx", stem));
        (json_path, excel_path)
    }
}

/// レポートを書き出し、作成したファイルのパスを返す
pub fn export_report(report: &MatchReport, format: &OutputFormat, output: &Path) -> Result<Vec<PathBuf>> {
    let written = match format {
        OutputFormat::Json => {
            let output_path = output_path_for_format(output, "json");
            json::write_json(report, &output_path)?;
            vec![output_path]
        }
        OutputFormat::Excel => {
            let output_path = output_path_for_format(output, "xlsx");
            excel::generate_excel(report, &output_path)?;
            vec![output_path]
        }
        OutputFormat::Both => {
            let (json_path, excel_path) = output_paths_for_both(output);
            json::write_json(report, &json_path)?;
            excel::generate_excel(report, &excel_path)?;
            vec![json_path, excel_path]
        }
    };

    for path in &written {
        log::info!("wrote {}", path.display());
    }
    Ok(written)
}
