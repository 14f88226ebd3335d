//! 商品一覧の取得（fetch API）
//!
//! マウント時に1回だけ呼ばれる。失敗はブラウザのコンソールに記録するのみ。

use storefront_common::{parse_catalog, Action, Product};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// エンドポイントへGETを送り、商品一覧を返す
pub async fn fetch_catalog(url: &str) -> Result<Vec<Product>, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("HTTP error: {}", resp.status())));
    }

    let text = JsFuture::from(resp.text()?).await?;
    let body = text
        .as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))?;

    parse_catalog(&body).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// 取得結果を状態遷移イベントに変換
pub async fn load_catalog(url: &str) -> Action {
    match fetch_catalog(url).await {
        Ok(products) => {
            gloo::console::debug!(format!("catalog loaded: {} products", products.len()));
            Action::CatalogLoaded(products)
        }
        Err(e) => {
            gloo::console::error!("failed to load catalog", e.clone());
            Action::CatalogFailed(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_unreachable_endpoint_fails_quietly() {
        let action = load_catalog("http://127.0.0.1:9/products").await;
        assert!(matches!(action, Action::CatalogFailed(_)));
    }
}
