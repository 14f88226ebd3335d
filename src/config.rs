use crate::error::{Result, StorefrontError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use storefront_common::{SortKey, DEFAULT_ENDPOINT};

const ENDPOINT_ENV: &str = "STOREFRONT_ENDPOINT";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub default_sort: SortKey,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            default_sort: SortKey::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| StorefrontError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("storefront").join("config.json"))
    }

    /// 取得先エンドポイント（環境変数を優先）
    pub fn endpoint(&self) -> String {
        match std::env::var(ENDPOINT_ENV) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => self.endpoint.clone(),
        }
    }

    pub fn set_endpoint(&mut self, url: String) -> Result<()> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(StorefrontError::Config(format!("URLが不正です: {}", url)));
        }
        self.endpoint = url;
        self.save()
    }

    pub fn set_default_sort(&mut self, sort: SortKey) -> Result<()> {
        self.default_sort = sort;
        self.save()
    }
}
