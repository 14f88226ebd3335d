//! 商品グリッドコンポーネント

use leptos::prelude::*;
use storefront_common::{format_price, star_bar, Product};

#[component]
pub fn ProductGrid(products: Memo<Vec<Product>>) -> impl IntoView {
    view! {
        <Show
            when=move || products.with(|p| !p.is_empty())
            fallback=|| view! { <p class="text-muted">"No products found."</p> }
        >
            <div class="product-grid">
                <For
                    each=move || products.get()
                    key=|product| product.id
                    children=|product| view! { <ProductCard product=product /> }
                />
            </div>
        </Show>
    }
}

#[component]
fn ProductCard(product: Product) -> impl IntoView {
    let rating = product.rating;

    view! {
        <div class="product-card">
            <div class="product-image">
                <img src=product.image.clone() alt=product.title.clone() loading="lazy" />
            </div>
            <div class="product-info">
                <span class="product-category">{product.category.clone()}</span>
                <h4 class="product-title" title=product.title.clone()>{product.title.clone()}</h4>
                <div class="product-rating">
                    <span class="stars">{star_bar(rating.rate)}</span>
                    <span class="rating-count">{format!("{:.1} ({})", rating.rate, rating.count)}</span>
                </div>
                <p class="product-price">{format_price(product.price)}</p>
            </div>
        </div>
    }
}
