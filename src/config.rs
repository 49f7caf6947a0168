use crate::error::{AddressMatchError, Result};
use address_match_common::MatchOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 参照台帳の住所列名
    pub address_column: String,
    /// 参照台帳の管理会社列名
    pub manager_column: String,
    /// フォールバック接頭辞の最小文字数
    pub min_street_len: usize,
    /// フォールバックの類似度閾値
    pub min_similarity: f64,
}

impl Default for Config {
    fn default() -> Self {
        let options = MatchOptions::default();
        Self {
            address_column: "Address".into(),
            manager_column: "Property Manager".into(),
            min_street_len: options.min_street_len,
            min_similarity: options.min_similarity,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AddressMatchError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("address-match").join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_similarity) {
            return Err(AddressMatchError::Config(format!(
                "min_similarity は 0.0〜1.0 で指定してください: {}",
                self.min_similarity
            )));
        }
        if self.address_column.trim().is_empty() || self.manager_column.trim().is_empty() {
            return Err(AddressMatchError::Config("列名が空です".into()));
        }
        Ok(())
    }

    /// 指定された項目だけ上書きする（上書きがあれば `true`）
    ///
    /// 検証は行わないので、呼び出し側で `validate` すること。
    pub fn apply_overrides(
        &mut self,
        address_column: Option<String>,
        manager_column: Option<String>,
        min_street_len: Option<usize>,
        min_similarity: Option<f64>,
    ) -> bool {
        let mut changed = false;
        if let Some(column) = address_column {
            self.address_column = column;
            changed = true;
        }
        if let Some(column) = manager_column {
            self.manager_column = column;
            changed = true;
        }
        if let Some(len) = min_street_len {
            self.min_street_len = len;
            changed = true;
        }
        if let Some(similarity) = min_similarity {
            self.min_similarity = similarity;
            changed = true;
        }
        changed
    }

    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            min_street_len: self.min_street_len,
            min_similarity: self.min_similarity,
        }
    }
}
