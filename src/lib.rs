//! Storefront CLI
//!
//! 商品一覧を1回取得し、検索・絞り込み・並べ替えた結果をターミナルに描画する。

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod render;
