//! ターミナル向けページ描画
//!
//! ヘッダー / フィルタサイドバー / 商品グリッド / フッターを文字列として組み立てる。
//! グリッドの列数は端末幅から決める。

use storefront_common::{
    format_price, star_bar, truncate, FilterGroup, PriceBand, Product, RatingBand, ViewState,
};

/// 商品カードの幅（枠線込み、文字数）
pub const CARD_WIDTH: usize = 34;
/// カード間の余白
pub const CARD_GAP: usize = 2;
/// 端末幅が取れない場合の既定値
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;
/// 描画幅の上限
pub const MAX_TERMINAL_WIDTH: usize = 1000;

const CARD_INNER: usize = CARD_WIDTH - 4;
const SITE_NAME: &str = "Storefront";

/// `COLUMNS` 環境変数から端末幅を推定
pub fn terminal_width() -> usize {
    parse_width(std::env::var("COLUMNS").ok().as_deref())
}

/// 幅指定を解釈する（0・不正値は既定値、上限で切り詰め）
pub fn parse_width(value: Option<&str>) -> usize {
    value
        .and_then(|v| v.trim().parse::<u128>().ok())
        .filter(|w| *w > 0)
        .map_or(DEFAULT_TERMINAL_WIDTH, |w| {
            w.min(MAX_TERMINAL_WIDTH as u128) as usize
        })
}

/// 幅に収まるグリッド列数（最低1列）
pub fn grid_columns(width: usize) -> usize {
    (width.saturating_add(CARD_GAP) / (CARD_WIDTH + CARD_GAP)).max(1)
}

/// ページ全体を描画
pub fn render_page(state: &ViewState, displayed: &[Product], width: usize) -> String {
    let width = width.min(MAX_TERMINAL_WIDTH);
    let mut out = String::new();
    out.push_str(&render_header(state, width));
    out.push('\n');
    out.push_str(&render_sidebar(state, displayed.len()));
    out.push('\n');
    out.push_str(&render_grid(state, displayed, width));
    out.push('\n');
    out.push_str(&render_footer(width));
    out
}

pub fn render_header(state: &ViewState, width: usize) -> String {
    let width = width.min(MAX_TERMINAL_WIDTH);
    let selection = state.selection();
    let mut out = String::new();
    out.push_str(&"=".repeat(width));
    out.push('\n');
    out.push_str(&format!("{:^width$}\n", SITE_NAME, width = width));
    out.push_str(&"=".repeat(width));
    out.push('\n');
    if !selection.search.is_empty() {
        out.push_str(&format!("Search: \"{}\"\n", selection.search));
    }
    out
}

pub fn render_sidebar(state: &ViewState, shown: usize) -> String {
    let selection = state.selection();
    let mut out = String::new();

    match selection.active_filter_count() {
        0 => out.push_str("Filters\n"),
        n => out.push_str(&format!("Filters ({} active)\n", n)),
    }

    let categories = state.categories();
    let category_labels: Vec<&str> = categories.iter().map(String::as_str).collect();
    out.push_str(&option_row(state, "Category", FilterGroup::Category, &category_labels));

    let price_labels: Vec<&str> = PriceBand::ALL.iter().map(|b| b.label()).collect();
    out.push_str(&option_row(state, "Price", FilterGroup::Price, &price_labels));

    let rating_labels: Vec<&str> = RatingBand::ALL.iter().map(|b| b.label()).collect();
    out.push_str(&option_row(state, "Rating", FilterGroup::Rating, &rating_labels));

    out.push_str(&format!("Sort: {}\n", selection.sort.display_name()));
    out.push_str(&format!(
        "Showing {} of {} products\n",
        shown,
        state.catalog().len()
    ));
    out
}

fn option_row(state: &ViewState, title: &str, group: FilterGroup, labels: &[&str]) -> String {
    if labels.is_empty() {
        return format!("  {:<9}-\n", format!("{}:", title));
    }
    let options: Vec<String> = labels
        .iter()
        .map(|label| {
            let mark = if state.selection().is_selected(group, label) { "x" } else { " " };
            format!("[{}] {}", mark, label)
        })
        .collect();
    format!("  {:<9}{}\n", format!("{}:", title), options.join("  "))
}

pub fn render_grid(state: &ViewState, displayed: &[Product], width: usize) -> String {
    if state.is_loading() {
        return "Loading products...\n".to_string();
    }
    if displayed.is_empty() {
        return "No products found.\n".to_string();
    }

    let columns = grid_columns(width);
    let gap = " ".repeat(CARD_GAP);
    let mut out = String::new();

    for row in displayed.chunks(columns) {
        let cards: Vec<Vec<String>> = row.iter().map(render_card).collect();
        let height = cards.iter().map(Vec::len).max().unwrap_or(0);
        for line in 0..height {
            let parts: Vec<&str> = cards
                .iter()
                .map(|card| card.get(line).map(String::as_str).unwrap_or(""))
                .collect();
            out.push_str(parts.join(gap.as_str()).trim_end());
            out.push('\n');
        }
    }
    out
}

/// 商品カード1枚分の行
pub fn render_card(product: &Product) -> Vec<String> {
    let border = "─".repeat(CARD_WIDTH - 2);
    let body = [
        truncate(&product.title, CARD_INNER),
        truncate(&product.category, CARD_INNER),
        format_price(product.price),
        format!(
            "{} {:.1} ({})",
            star_bar(product.rating.rate),
            product.rating.rate,
            product.rating.count
        ),
    ];

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(format!("┌{}┐", border));
    for text in body {
        lines.push(format!("│ {:<inner$} │", text, inner = CARD_INNER));
    }
    lines.push(format!("└{}┘", border));
    lines
}

pub fn render_footer(width: usize) -> String {
    let width = width.min(MAX_TERMINAL_WIDTH);
    let year = chrono::Local::now().format("%Y");
    let mut out = "-".repeat(width);
    out.push('\n');
    out.push_str(&format!("{:^width$}\n", format!("© {} {}", year, SITE_NAME), width = width));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_common::{Action, Rating};

    fn loaded_state() -> ViewState {
        let mut state = ViewState::new();
        state.apply(Action::CatalogLoaded(vec![
            Product {
                id: 1,
                title: "Mens Casual Premium Slim Fit T-Shirts".to_string(),
                price: 22.3,
                category: "men's clothing".to_string(),
                rating: Rating { rate: 4.1, count: 259 },
                ..Default::default()
            },
            Product {
                id: 2,
                title: "Pierced Owl Rose Gold Plated Stainless Steel Double".to_string(),
                price: 10.99,
                category: "jewelery".to_string(),
                rating: Rating { rate: 1.9, count: 100 },
                ..Default::default()
            },
        ]));
        state
    }

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(10), 1);
        assert_eq!(grid_columns(80), 2);
        assert_eq!(grid_columns(CARD_WIDTH * 3 + CARD_GAP * 2), 3);
    }

    #[test]
    fn test_parse_width() {
        assert_eq!(parse_width(None), DEFAULT_TERMINAL_WIDTH);
        assert_eq!(parse_width(Some("0")), DEFAULT_TERMINAL_WIDTH);
        assert_eq!(parse_width(Some("wide")), DEFAULT_TERMINAL_WIDTH);
        assert_eq!(parse_width(Some(" 120 ")), 120);
        assert_eq!(parse_width(Some("18446744073709551615")), MAX_TERMINAL_WIDTH);
        assert_eq!(parse_width(Some("99999999999999999999999")), MAX_TERMINAL_WIDTH);
    }

    #[test]
    fn test_huge_width_is_clamped() {
        assert!(grid_columns(usize::MAX) >= 1);

        let state = loaded_state();
        let displayed = state.displayed();
        let page = render_page(&state, &displayed, usize::MAX);
        let rule = page.lines().next().expect("ヘッダーがない");
        assert_eq!(rule.chars().count(), MAX_TERMINAL_WIDTH);
        assert_eq!(render_footer(usize::MAX).lines().next().map(str::len), Some(MAX_TERMINAL_WIDTH));
    }

    #[test]
    fn test_card_lines_have_fixed_width() {
        let state = loaded_state();
        for product in state.catalog() {
            for line in render_card(product) {
                assert_eq!(line.chars().count(), CARD_WIDTH, "{}", line);
            }
        }
    }

    #[test]
    fn test_card_content() {
        let state = loaded_state();
        let card = render_card(&state.catalog()[0]).join("\n");
        assert!(card.contains("$22.30"));
        assert!(card.contains("★★★★☆ 4.1 (259)"));
        assert!(card.contains("men's clothing"));
    }

    #[test]
    fn test_sidebar_marks_selection() {
        let mut state = loaded_state();
        state.apply(Action::ToggleFilter {
            group: FilterGroup::Price,
            token: "$0-$50".to_string(),
        });
        let sidebar = render_sidebar(&state, 2);
        assert!(sidebar.contains("Filters (1 active)"));
        assert!(sidebar.contains("[x] $0-$50"));
        assert!(sidebar.contains("[ ] jewelery"));
        assert!(sidebar.contains("Showing 2 of 2 products"));
    }

    #[test]
    fn test_grid_empty_and_loading() {
        let loading = ViewState::new();
        assert_eq!(render_grid(&loading, &[], 80), "Loading products...\n");

        let mut failed = ViewState::new();
        failed.apply(Action::CatalogFailed("boom".to_string()));
        assert_eq!(render_grid(&failed, &[], 80), "No products found.\n");
    }

    #[test]
    fn test_page_sections() {
        let state = loaded_state();
        let displayed = state.displayed();
        let page = render_page(&state, &displayed, 80);
        assert!(page.contains(SITE_NAME));
        assert!(page.contains("Sort: Most Popular"));
        assert!(page.contains("©"));
        let first = page.find("Mens Casual").expect("1件目がない");
        let second = page.find("Pierced Owl").expect("2件目がない");
        assert!(first < second);
    }
}
