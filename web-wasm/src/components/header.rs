//! ヘッダーコンポーネント（タイトル + 検索）

use leptos::prelude::*;
use storefront_common::FilterSelection;

#[component]
pub fn Header<F>(
    selection: Memo<FilterSelection>,
    on_search: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    view! {
        <header class="header">
            <h1>"Storefront"</h1>
            <input
                type="search"
                class="search-input"
                placeholder="Search products..."
                prop:value=move || selection.with(|s| s.search.clone())
                on:input=move |ev| on_search(event_target_value(&ev))
            />
        </header>
    }
}
