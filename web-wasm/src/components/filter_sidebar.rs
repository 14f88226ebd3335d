//! フィルタサイドバーコンポーネント

use leptos::prelude::*;
use storefront_common::{FilterGroup, FilterSelection, PriceBand, RatingBand};

/// 選択肢の表示名
fn option_label(group: FilterGroup, token: &str) -> String {
    match group {
        FilterGroup::Category => {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
        FilterGroup::Price => token.to_string(),
        FilterGroup::Rating if token.ends_with('+') => format!("{} ★ & up", token.trim_end_matches('+')),
        FilterGroup::Rating => format!("{} ★", token),
    }
}

#[component]
pub fn FilterSidebar<FT, FR>(
    categories: Memo<Vec<String>>,
    selection: Memo<FilterSelection>,
    on_toggle: FT,
    on_reset: FR,
) -> impl IntoView
where
    FT: Fn(FilterGroup, String) + 'static + Clone + Send + Sync,
    FR: Fn(()) + 'static + Clone + Send + Sync,
{
    let active_count = move || selection.with(|s| s.active_filter_count());

    let price_options = {
        let on_toggle = on_toggle.clone();
        PriceBand::ALL
            .into_iter()
            .map(|band| {
                view! {
                    <FilterOption
                        group=FilterGroup::Price
                        token=band.label().to_string()
                        selection=selection
                        on_toggle=on_toggle.clone()
                    />
                }
            })
            .collect_view()
    };

    let rating_options = {
        let on_toggle = on_toggle.clone();
        RatingBand::ALL
            .into_iter()
            .map(|band| {
                view! {
                    <FilterOption
                        group=FilterGroup::Rating
                        token=band.label().to_string()
                        selection=selection
                        on_toggle=on_toggle.clone()
                    />
                }
            })
            .collect_view()
    };

    view! {
        <aside class="filter-sidebar">
            <div class="filter-header">
                <h2>"Filters"</h2>
                <Show when=move || { active_count() > 0 }>
                    <span class="filter-badge">{active_count}</span>
                </Show>
                <button
                    class="btn btn-tertiary btn-small"
                    disabled=move || selection.with(|s| s.is_default())
                    on:click={
                        let on_reset = on_reset.clone();
                        move |_| on_reset(())
                    }
                >
                    "Reset"
                </button>
            </div>

            <section class="filter-section">
                <h3>"Category"</h3>
                <For
                    each=move || categories.get()
                    key=|category| category.clone()
                    children={
                        let on_toggle = on_toggle.clone();
                        move |category| {
                            view! {
                                <FilterOption
                                    group=FilterGroup::Category
                                    token=category
                                    selection=selection
                                    on_toggle=on_toggle.clone()
                                />
                            }
                        }
                    }
                />
            </section>

            <section class="filter-section">
                <h3>"Price"</h3>
                {price_options}
            </section>

            <section class="filter-section">
                <h3>"Rating"</h3>
                {rating_options}
            </section>
        </aside>
    }
}

#[component]
fn FilterOption<F>(
    group: FilterGroup,
    token: String,
    selection: Memo<FilterSelection>,
    on_toggle: F,
) -> impl IntoView
where
    F: Fn(FilterGroup, String) + 'static + Clone + Send + Sync,
{
    let label = option_label(group, &token);
    let is_checked = {
        let token = token.clone();
        move || selection.with(|s| s.is_selected(group, &token))
    };

    view! {
        <label class="filter-option">
            <input
                type="checkbox"
                prop:checked=is_checked
                on:change=move |_| on_toggle(group, token.clone())
            />
            <span>{label}</span>
        </label>
    }
}
