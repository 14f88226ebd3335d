//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::api::catalog::load_catalog;
use crate::components::{
    header::Header,
    filter_sidebar::FilterSidebar,
    sort_bar::SortBar,
    product_grid::ProductGrid,
    footer::Footer,
};
use storefront_common::{Action, FilterGroup, SortKey, ViewState, DEFAULT_ENDPOINT};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // 画面状態（遷移は ViewState::apply のみ）
    let state = RwSignal::new(ViewState::new());
    let dispatch = move |action: Action| state.update(|s| s.apply(action));

    // マウント時に1回だけ取得
    spawn_local(async move {
        let action = load_catalog(DEFAULT_ENDPOINT).await;
        dispatch(action);
    });

    // 導出状態
    let loading = Memo::new(move |_| state.with(|s| s.is_loading()));
    let selection = Memo::new(move |_| state.with(|s| s.selection().clone()));
    let categories = Memo::new(move |_| state.with(|s| s.categories()));
    let total = Memo::new(move |_| state.with(|s| s.catalog().len()));
    let displayed = Memo::new(move |_| state.with(|s| s.displayed()));

    // 画面からの操作
    let on_search = move |text: String| dispatch(Action::SetSearch(text));
    let on_sort = move |key: SortKey| dispatch(Action::SetSort(key));
    let on_toggle = move |group: FilterGroup, token: String| {
        dispatch(Action::ToggleFilter { group, token })
    };
    let on_reset = move |_: ()| dispatch(Action::ResetFilters);

    view! {
        <div class="storefront">
            <Header selection=selection on_search=on_search />

            <div class="storefront-body">
                <FilterSidebar
                    categories=categories
                    selection=selection
                    on_toggle=on_toggle
                    on_reset=on_reset
                />

                <main class="catalog">
                    <SortBar
                        selection=selection
                        shown=Signal::derive(move || displayed.with(|d| d.len()))
                        total=total
                        on_sort=on_sort
                    />

                    <Show
                        when=move || !loading.get()
                        fallback=|| view! { <p class="loading">"Loading products..."</p> }
                    >
                        <ProductGrid products=displayed />
                    </Show>
                </main>
            </div>

            <Footer />
        </div>
    }
}
