//! フィルタ/ソートエンジン
//!
//! カタログと選択状態から表示リストを導出する純粋関数。
//! 1. タイトル部分一致（大文字小文字無視）
//! 2. カテゴリ（選択のいずれかに一致）
//! 3. 価格帯（選択のいずれかに含まれる）
//! 4. 評価帯（選択のいずれかの下限以上）
//! 5. 安定ソート
//!
//! 選択が空の段はそのまま通過する。

use crate::band::{PriceBand, RatingBand};
use crate::error::Error;
use crate::types::Product;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// 並び順
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// レビュー件数の多い順
    #[default]
    Popularity,
    PriceLowHigh,
    PriceHighLow,
    /// 評価値の高い順
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Popularity,
        SortKey::PriceLowHigh,
        SortKey::PriceHighLow,
        SortKey::Rating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Popularity => "popularity",
            SortKey::PriceLowHigh => "price-low-high",
            SortKey::PriceHighLow => "price-high-low",
            SortKey::Rating => "rating",
        }
    }

    /// 画面表示用の名称
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Popularity => "Most Popular",
            SortKey::PriceLowHigh => "Price: Low to High",
            SortKey::PriceHighLow => "Price: High to Low",
            SortKey::Rating => "Top Rated",
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| Error::UnknownOption { group: "sort", token: s.to_string() })
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// フィルタ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterGroup {
    Category,
    Price,
    Rating,
}

/// 1文字ずつ小文字化（語末シグマ規則を適用しない）
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// あれば削除、なければ追加
pub fn toggle<T: Ord>(set: &mut BTreeSet<T>, token: T) {
    if !set.remove(&token) {
        set.insert(token);
    }
}

/// ユーザーの選択状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub search: String,
    pub categories: BTreeSet<String>,
    pub price_bands: BTreeSet<PriceBand>,
    pub rating_bands: BTreeSet<RatingBand>,
    pub sort: SortKey,
}

impl FilterSelection {
    /// 指定グループのトークンを切り替える
    ///
    /// 価格帯・評価帯として解釈できないトークンは無視し `false` を返す。
    pub fn toggle_filter(&mut self, group: FilterGroup, token: &str) -> bool {
        match group {
            FilterGroup::Category => toggle(&mut self.categories, token.to_string()),
            FilterGroup::Price => match token.parse::<PriceBand>() {
                Ok(band) => toggle(&mut self.price_bands, band),
                Err(_) => return false,
            },
            FilterGroup::Rating => match token.parse::<RatingBand>() {
                Ok(band) => toggle(&mut self.rating_bands, band),
                Err(_) => return false,
            },
        }
        true
    }

    pub fn is_selected(&self, group: FilterGroup, token: &str) -> bool {
        match group {
            FilterGroup::Category => self.categories.contains(token),
            FilterGroup::Price => token
                .parse::<PriceBand>()
                .map_or(false, |band| self.price_bands.contains(&band)),
            FilterGroup::Rating => token
                .parse::<RatingBand>()
                .map_or(false, |band| self.rating_bands.contains(&band)),
        }
    }

    /// 全選択を既定値に戻す
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 有効なフィルタトークン数（検索文字列を含む、ソートは含まない）
    pub fn active_filter_count(&self) -> usize {
        let search = usize::from(!self.search.is_empty());
        search + self.categories.len() + self.price_bands.len() + self.rating_bands.len()
    }

    pub fn is_default(&self) -> bool {
        self == &Self::default()
    }

    fn matches(&self, product: &Product, query: &str) -> bool {
        if !query.is_empty() && !fold_case(&product.title).contains(query) {
            return false;
        }
        if !self.categories.is_empty() && !self.categories.contains(&product.category) {
            return false;
        }
        if !self.price_bands.is_empty()
            && !self.price_bands.iter().any(|band| band.contains(product.price))
        {
            return false;
        }
        if !self.rating_bands.is_empty()
            && !self.rating_bands.iter().any(|band| band.accepts(product.rating.rate))
        {
            return false;
        }
        true
    }
}

/// 安定ソート（同値は元の順序を保つ）
pub fn sort_products(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::PriceLowHigh => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceHighLow => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::Rating => products.sort_by(|a, b| b.rating.rate.total_cmp(&a.rating.rate)),
        SortKey::Popularity => products.sort_by(|a, b| b.rating.count.cmp(&a.rating.count)),
    }
}

/// カタログと選択状態から表示リストを生成
///
/// カタログ自体は変更せず、常に新しいリストを返す。
pub fn apply_filters(catalog: &[Product], selection: &FilterSelection) -> Vec<Product> {
    let query = fold_case(&selection.search);
    let mut result: Vec<Product> = catalog
        .iter()
        .filter(|product| selection.matches(product, &query))
        .cloned()
        .collect();
    sort_products(&mut result, selection.sort);
    result
}
