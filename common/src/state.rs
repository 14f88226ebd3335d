//! 画面状態とリデューサ
//!
//! カタログ・読み込みフラグ・選択状態を1つの状態オブジェクトにまとめ、
//! `ViewState::apply` だけで遷移させる。

use crate::filter::{apply_filters, FilterGroup, FilterSelection, SortKey};
use crate::types::{categories, Product};

/// 状態遷移イベント
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// カタログ取得成功
    CatalogLoaded(Vec<Product>),
    /// カタログ取得失敗（診断メッセージ）
    CatalogFailed(String),
    ToggleFilter { group: FilterGroup, token: String },
    SetSearch(String),
    SetSort(SortKey),
    ResetFilters,
}

/// ストアフロント画面の状態
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    catalog: Vec<Product>,
    loading: bool,
    selection: FilterSelection,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// 初期状態（カタログ空、読み込み中）
    pub fn new() -> Self {
        Self {
            catalog: Vec::new(),
            loading: true,
            selection: FilterSelection::default(),
        }
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.selection.sort = sort;
        self
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// 現在の選択状態（変更は `apply` 経由のみ）
    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// サイドバー用のカテゴリ一覧
    pub fn categories(&self) -> Vec<String> {
        categories(&self.catalog)
    }

    /// 現在の選択状態で導出した表示リスト
    pub fn displayed(&self) -> Vec<Product> {
        apply_filters(&self.catalog, &self.selection)
    }

    /// イベントを適用する。失敗し得る遷移はない
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::CatalogLoaded(products) => {
                self.catalog = products;
                self.loading = false;
            }
            Action::CatalogFailed(_) => {
                self.loading = false;
            }
            Action::ToggleFilter { group, token } => {
                self.selection.toggle_filter(group, &token);
            }
            Action::SetSearch(text) => self.selection.search = text,
            Action::SetSort(key) => self.selection.sort = key,
            Action::ResetFilters => self.selection.reset(),
        }
    }
}
