use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("商品一覧の取得に失敗: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("商品一覧の取得に失敗: HTTP {status} ({url})")]
    HttpStatus { status: u16, url: String },

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] storefront_common::Error),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
