//! JSON/Excel出力の統合テスト

use address_match::cli::OutputFormat;
use address_match::export::{self, excel, json};
use address_match::matcher::{MatchReport, MatchSummary, RowError};
use address_match_common::MatchResult;
use calamine::{open_workbook_auto, Data, Reader};
use std::path::PathBuf;
use tempfile::tempdir;

fn create_test_report() -> MatchReport {
    MatchReport {
        results: vec![
            MatchResult {
                original: "Oak Street".into(),
                matched_address: Some("12 Oak Street".into()),
                property_manager: Some("Acme".into()),
            },
            MatchResult::unmatched("Invoice 402 Elm Road"),
        ],
        errors: vec![RowError {
            row: 3,
            message: "invalid reference record at row 3: missing Property Manager".into(),
        }],
        summary: MatchSummary {
            reference_rows: 3,
            indexed_records: 2,
            input_addresses: 2,
            matched_inputs: 1,
            unmatched_inputs: 1,
            result_rows: 2,
            generated_at: "2026-01-01T00:00:00+09:00".into(),
        },
    }
}

#[test]
fn test_json_output_shape() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("nested").join("result.json");

    json::write_json(&create_test_report(), &output_path).unwrap();

    let content = std::fs::read_to_string(&output_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["results"][0]["Original"], "Oak Street");
    assert_eq!(value["results"][0]["Matched Address"], "12 Oak Street");
    assert_eq!(value["results"][0]["Property Manager"], "Acme");
    assert!(value["results"][1]["Matched Address"].is_null());
    assert!(value["results"][1]["Property Manager"].is_null());
    assert_eq!(value["errors"][0]["row"], 3);
    assert_eq!(value["summary"]["matchedInputs"], 1);
}

#[test]
fn test_json_round_trip_into_report() {
    let report = create_test_report();
    let parsed: MatchReport = serde_json::from_str(&json::to_json(&report).unwrap()).unwrap();
    assert_eq!(parsed.results, report.results);
    assert_eq!(parsed.errors, report.errors);
    assert_eq!(parsed.summary, report.summary);
}

#[test]
fn test_excel_sheets_and_cells() {
    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("result.xlsx");

    excel::generate_excel(&create_test_report(), &output_path).unwrap();
    assert!(output_path.exists(), "Excelファイルが作成されていない");

    let mut workbook = open_workbook_auto(&output_path).unwrap();
    assert_eq!(workbook.sheet_names(), vec!["Results".to_string(), "Errors".to_string()]);

    let results = workbook.worksheet_range("Results").unwrap();
    assert_eq!(results.get_value((0, 1)), Some(&Data::String("Matched Address".into())));
    assert_eq!(results.get_value((1, 2)), Some(&Data::String("Acme".into())));
    assert_eq!(
        results.get_value((2, 0)),
        Some(&Data::String("Invoice 402 Elm Road".into()))
    );
    assert!(matches!(results.get_value((2, 1)), None | Some(Data::Empty)));

    let errors = workbook.worksheet_range("Errors").unwrap();
    assert_eq!(errors.get_value((1, 0)), Some(&Data::Float(3.0)));
}

#[test]
fn test_excel_without_errors_has_single_sheet() {
    let report = MatchReport {
        errors: Vec::new(),
        ..create_test_report()
    };
    let buffer = excel::generate_excel_buffer(&report).unwrap();
    assert!(!buffer.is_empty());

    let dir = tempdir().expect("Failed to create temp dir");
    let output_path = dir.path().join("result.xlsx");
    std::fs::write(&output_path, buffer).unwrap();

    let workbook = open_workbook_auto(&output_path).unwrap();
    assert_eq!(workbook.sheet_names(), vec!["Results".to_string()]);
}

#[test]
fn test_export_both_into_directory() {
    let dir = tempdir().expect("Failed to create temp dir");

    let written = export::export_report(&create_test_report(), &OutputFormat::Both, dir.path()).unwrap();

    assert_eq!(
        written,
        vec![
            dir.path().join("match_result.json"),
            dir.path().join("match_result.xlsx"),
        ]
    );
    assert!(written.iter().all(|p| p.exists()));
}

#[test]
fn test_export_json_to_named_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let target: PathBuf = dir.path().join("april.json");

    let written = export::export_report(&create_test_report(), &OutputFormat::Json, &target).unwrap();

    assert_eq!(written, vec![target.clone()]);
    assert!(target.exists());
}
