//! Excel出力
//!
//! 「Results」シートに照合結果、台帳の不正行があれば「Errors」シートに出力する。

use crate::error::{AddressMatchError, Result};
use crate::matcher::MatchReport;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, Worksheet, XlsxError};
use std::path::Path;

const RESULT_HEADERS: [&str; 3] = ["Original", "Matched Address", "Property Manager"];
const ERROR_HEADERS: [&str; 2] = ["Row", "Message"];

fn xlsx_error(e: XlsxError) -> AddressMatchError {
    AddressMatchError::ExcelGeneration(e.to_string())
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA))
}

fn write_headers(worksheet: &mut Worksheet, headers: &[&str], format: &Format) -> std::result::Result<(), XlsxError> {
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, format)?;
    }
    worksheet.set_freeze_panes(1, 0)?;
    Ok(())
}

pub fn generate_excel(report: &MatchReport, output_path: &Path) -> Result<()> {
    let buffer = generate_excel_buffer(report).map_err(xlsx_error)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_path, buffer)?;
    Ok(())
}

/// Excelをバッファに生成
pub fn generate_excel_buffer(report: &MatchReport) -> std::result::Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let header = header_format();

    {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Results")?;
        write_headers(worksheet, &RESULT_HEADERS, &header)?;
        worksheet.set_column_width(0, 40)?;
        worksheet.set_column_width(1, 40)?;
        worksheet.set_column_width(2, 28)?;

        for (idx, result) in report.results.iter().enumerate() {
            let row = idx as u32 + 1;
            worksheet.write_string(row, 0, &result.original)?;
            // 該当なしは空セル
            if let Some(address) = &result.matched_address {
                worksheet.write_string(row, 1, address)?;
            }
            if let Some(manager) = &result.property_manager {
                worksheet.write_string(row, 2, manager)?;
            }
        }
    }

    if !report.errors.is_empty() {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Errors")?;
        write_headers(worksheet, &ERROR_HEADERS, &header)?;
        worksheet.set_column_width(1, 60)?;

        for (idx, error) in report.errors.iter().enumerate() {
            let row = idx as u32 + 1;
            worksheet.write_number(row, 0, error.row as f64)?;
            worksheet.write_string(row, 1, &error.message)?;
        }
    }

    workbook.save_to_buffer()
}
