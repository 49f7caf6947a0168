//! CSV読み込み

use super::Table;
use crate::error::Result;
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub(super) fn read(path: &Path) -> Result<Table> {
    let bytes = std::fs::read(path)?;
    parse(&bytes)
}

pub(super) fn parse(bytes: &[u8]) -> Result<Table> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(
            record
                .iter()
                .map(|field| if field.is_empty() { None } else { Some(field.to_string()) })
                .collect(),
        );
    }

    Ok(Table { headers, rows })
}
