//! Storefront Common Library
//!
//! CLIとWeb(WASM)で共有される型とフィルタ/ソートエンジン

pub mod types;
pub mod band;
pub mod display;
pub mod error;
pub mod filter;
pub mod state;

pub use types::{Product, Rating, parse_catalog, categories};
pub use band::{PriceBand, RatingBand};
pub use display::{format_price, star_bar, truncate};
pub use error::{Error, Result};
pub use filter::{FilterGroup, FilterSelection, SortKey, apply_filters, fold_case, toggle};
pub use state::{Action, ViewState};

/// 既定の商品一覧エンドポイント
pub const DEFAULT_ENDPOINT: &str = "https://fakestoreapi.com/products";
