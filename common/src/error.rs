//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 参照台帳の行に必須項目が欠けている
    #[error("invalid reference record at row {row}: missing {field}")]
    InvalidReferenceRecord { row: usize, field: &'static str },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_record() {
        let error = Error::InvalidReferenceRecord { row: 3, field: "Address" };
        assert_eq!(
            format!("{}", error),
            "invalid reference record at row 3: missing Address"
        );
    }

    #[test]
    fn test_error_debug() {
        let error = Error::InvalidReferenceRecord { row: 1, field: "Property Manager" };
        let debug = format!("{:?}", error);
        assert!(debug.contains("InvalidReferenceRecord"));
        assert!(debug.contains("Property Manager"));
    }
}
