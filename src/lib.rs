//! address-match
//!
//! 参照台帳（住所・管理会社）と表記ゆれを含む入力住所リストを照合する。
//! 照合ロジックは `address_match_common`、このクレートは入出力とCLIを担当する。

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod matcher;
pub mod reader;
