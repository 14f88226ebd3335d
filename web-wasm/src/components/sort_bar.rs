//! 並び順・件数表示バー

use leptos::prelude::*;
use storefront_common::{FilterSelection, SortKey};

#[component]
pub fn SortBar<F>(
    selection: Memo<FilterSelection>,
    shown: Signal<usize>,
    total: Memo<usize>,
    on_sort: F,
) -> impl IntoView
where
    F: Fn(SortKey) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="sort-bar">
            <span class="result-count">
                {move || format!("Showing {} of {} products", shown.get(), total.get())}
            </span>
            <label for="sort-key">"Sort by"</label>
            <select
                id="sort-key"
                on:change=move |ev| {
                    // 未知の値は無視
                    if let Ok(key) = event_target_value(&ev).parse::<SortKey>() {
                        on_sort(key);
                    }
                }
            >
                {SortKey::ALL
                    .into_iter()
                    .map(|key| {
                        view! {
                            <option
                                value=key.as_str()
                                prop:selected=move || selection.with(|s| s.sort == key)
                            >
                                {key.display_name()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
