use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddressMatchError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("未対応のファイル形式です: {0}（csv/xlsx/xls/xlsb/ods に対応）")]
    UnsupportedFormat(String),

    #[error("列が見つかりません: '{column}'（{file}）")]
    MissingColumn { file: String, column: String },

    #[error("データ行がありません: {0}")]
    EmptyTable(String),

    #[error("CSV読み込みエラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("スプレッドシート読み込みエラー: {0}")]
    Spreadsheet(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] address_match_common::Error),
}

pub type Result<T> = std::result::Result<T, AddressMatchError>;
