//! 商品データの型定義
//!
//! 商品一覧エンドポイントが返すJSON配列の要素:
//! - Product: 商品本体（取得後は不変）
//! - Rating: 評価値とレビュー件数

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// 商品評価
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// 評価値（通常 0〜5）
    pub rate: f64,
    /// レビュー件数
    pub count: u32,
}

/// 商品
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub image: String,
    pub rating: Rating,
}

/// レスポンス本文（JSON配列）を商品一覧に変換
pub fn parse_catalog(body: &str) -> Result<Vec<Product>> {
    Ok(serde_json::from_str(body)?)
}

/// カタログ内のカテゴリ一覧（初出順、重複なし）
pub fn categories(catalog: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in catalog {
        if !seen.iter().any(|c| c == &product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        },
        {
            "id": 5,
            "title": "John Hardy Women's Legends Naga Bracelet",
            "price": 695,
            "category": "jewelery",
            "image": "https://fakestoreapi.com/img/71pWzhdJNwL._AC_UL640_QL65_ML3_.jpg",
            "rating": { "rate": 4.6, "count": 400 }
        }
    ]"#;

    #[test]
    fn test_parse_catalog() {
        let products = parse_catalog(SAMPLE).expect("パース失敗");
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[0].rating.count, 120);
        assert_eq!(products[1].price, 695.0);
        assert_eq!(products[1].description, "");
    }

    #[test]
    fn test_parse_catalog_rejects_object() {
        assert!(parse_catalog(r#"{"id": 1}"#).is_err());
    }

    #[test]
    fn test_parse_catalog_requires_rating() {
        let body = r#"[{"id": 7, "title": "No Reviews", "price": 5.0,
            "category": "electronics", "image": ""}]"#;
        let err = parse_catalog(body).unwrap_err();
        assert!(err.to_string().contains("rating"), "{}", err);
    }

    #[test]
    fn test_parse_catalog_empty_array() {
        assert!(parse_catalog("[]").unwrap().is_empty());
    }

    #[test]
    fn test_categories_first_encounter_order() {
        let catalog: Vec<Product> = ["jewelery", "electronics", "jewelery", "men's clothing"]
            .iter()
            .enumerate()
            .map(|(i, c)| Product {
                id: i as u64,
                category: c.to_string(),
                ..Default::default()
            })
            .collect();

        assert_eq!(
            categories(&catalog),
            vec!["jewelery", "electronics", "men's clothing"]
        );
    }

    #[test]
    fn test_product_serialize() {
        let product = Product {
            id: 7,
            title: "White Gold Plated Princess".to_string(),
            price: 9.99,
            rating: Rating { rate: 3.0, count: 400 },
            ..Default::default()
        };

        let json = serde_json::to_string(&product).expect("シリアライズ失敗");
        assert!(json.contains("\"id\":7"));
        assert!(json.contains("\"rating\":{\"rate\":3.0,\"count\":400}"));
    }
}
