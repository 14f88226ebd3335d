//! 表示用フォーマット（CLIとWebで共通）

/// 星の数
pub const MAX_STARS: usize = 5;

/// 価格表示（例: `$109.95`）
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// 評価値を星表示に変換（四捨五入、0〜5に丸める）
pub fn star_bar(rate: f64) -> String {
    let filled = if rate.is_finite() {
        rate.round().clamp(0.0, MAX_STARS as f64) as usize
    } else {
        0
    };
    let mut stars = "★".repeat(filled);
    stars.push_str(&"☆".repeat(MAX_STARS - filled));
    stars
}

/// 幅（文字数）に収まるよう末尾を省略
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}
