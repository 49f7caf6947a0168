use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "address-match")]
#[command(about = "住所照合ツール（参照台帳と入力住所リストを突き合わせる）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 参照台帳と入力住所リストを照合して結果を出力
    Match {
        /// 参照台帳（csv/xlsx）。住所列と管理会社列を含む
        #[arg(required = true)]
        database: PathBuf,

        /// 入力住所リスト（csv/xlsx）。先頭列を住所として扱う
        #[arg(required = true)]
        input: PathBuf,

        /// 出力ファイル/ディレクトリ（デフォルト: カレント/match_result.*）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (json/excel/both)
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,

        /// 住所列のヘッダー名（設定ファイルより優先）
        #[arg(long)]
        address_column: Option<String>,

        /// 管理会社列のヘッダー名（設定ファイルより優先）
        #[arg(long)]
        manager_column: Option<String>,

        /// フォールバック接頭辞の最小文字数
        #[arg(long)]
        min_street_len: Option<usize>,

        /// フォールバックの類似度閾値（0.0-1.0）
        #[arg(long)]
        min_similarity: Option<f64>,
    },

    /// 住所の正規化結果を表示（番地・通り名の抽出確認用）
    Normalize {
        /// 住所文字列
        #[arg(required = true)]
        addresses: Vec<String>,

        /// 参照台帳を指定すると一致件数も表示
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 住所列のヘッダー名を設定
        #[arg(long)]
        set_address_column: Option<String>,

        /// 管理会社列のヘッダー名を設定
        #[arg(long)]
        set_manager_column: Option<String>,

        /// フォールバック接頭辞の最小文字数を設定
        #[arg(long)]
        set_min_street_len: Option<usize>,

        /// フォールバックの類似度閾値を設定
        #[arg(long)]
        set_min_similarity: Option<f64>,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Excel,
    Both,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "excel" | "xlsx" => Ok(OutputFormat::Excel),
            "both" => Ok(OutputFormat::Both),
            _ => Err(format!("Unknown format: {}. Use json, excel, or both", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Excel => write!(f, "excel"),
            OutputFormat::Both => write!(f, "both"),
        }
    }
}
