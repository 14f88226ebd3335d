//! カタログ読み込み
//!
//! 起動時に1回だけ商品一覧を取得し、結果を状態遷移イベントとして返す。
//! リトライ・タイムアウトは行わない。

use crate::error::{Result, StorefrontError};
use std::path::PathBuf;
use storefront_common::{parse_catalog, Action, Product};

/// 商品一覧の取得元
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogSource {
    Remote(String),
    File(PathBuf),
}

impl CatalogSource {
    /// `http(s)://` で始まればリモート、それ以外はローカルJSONファイル
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            CatalogSource::Remote(trimmed.to_string())
        } else {
            CatalogSource::File(PathBuf::from(trimmed))
        }
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogSource::Remote(url) => write!(f, "{}", url),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// 1回限りのカタログローダー（`run` で消費される）
pub struct CatalogLoader {
    source: CatalogSource,
    client: reqwest::Client,
}

impl CatalogLoader {
    pub fn new(source: CatalogSource) -> Self {
        Self::with_client(source, reqwest::Client::new())
    }

    pub fn with_client(source: CatalogSource, client: reqwest::Client) -> Self {
        Self { source, client }
    }

    /// 取得を実行し、適用すべきイベントを返す
    ///
    /// 失敗は診断ログに記録して `Action::CatalogFailed` にするだけで、呼び出し側へは伝播しない。
    pub async fn run(self) -> Action {
        tracing::debug!(source = %self.source, "loading catalog");
        match self.fetch().await {
            Ok(products) => {
                tracing::info!(source = %self.source, count = products.len(), "catalog loaded");
                Action::CatalogLoaded(products)
            }
            Err(e) => {
                tracing::error!(source = %self.source, error = %e, "failed to load catalog");
                Action::CatalogFailed(e.to_string())
            }
        }
    }

    async fn fetch(&self) -> Result<Vec<Product>> {
        match &self.source {
            CatalogSource::Remote(url) => fetch_catalog(&self.client, url).await,
            CatalogSource::File(path) => read_catalog_file(path).await,
        }
    }
}

/// エンドポイントへGETを1回送り、JSON配列を商品一覧として返す
pub async fn fetch_catalog(client: &reqwest::Client, url: &str) -> Result<Vec<Product>> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(StorefrontError::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.text().await?;
    Ok(parse_catalog(&body)?)
}

async fn read_catalog_file(path: &std::path::Path) -> Result<Vec<Product>> {
    if !path.exists() {
        return Err(StorefrontError::FileNotFound(path.display().to_string()));
    }
    let body = tokio::fs::read_to_string(path).await?;
    Ok(parse_catalog(&body)?)
}
