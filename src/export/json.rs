//! JSON出力

use crate::error::Result;
use crate::matcher::MatchReport;
use std::path::Path;

pub fn to_json(report: &MatchReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn write_json(report: &MatchReport, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_path, to_json(report)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::RowError;
    use address_match_common::MatchResult;

    #[test]
    fn test_errors_omitted_when_empty() {
        let report = MatchReport {
            results: vec![MatchResult::unmatched("x")],
            ..Default::default()
        };
        let value: serde_json::Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();
        assert!(value.get("errors").is_none());
        assert_eq!(value["results"][0]["Original"], "x");
        assert!(value["results"][0]["Matched Address"].is_null());
        assert_eq!(value["summary"]["resultRows"], 0);
    }

    #[test]
    fn test_errors_included() {
        let report = MatchReport {
            errors: vec![RowError {
                row: 2,
                message: "invalid".into(),
            }],
            ..Default::default()
        };
        let value: serde_json::Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();
        assert_eq!(value["errors"][0]["row"], 2);
    }
}
