//! Text formatting helpers shared by the report views

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Percentage with fewer decimals as it grows: `0.05%`, `5.5%`, `50%`
pub fn format_percentage(pct: f64) -> String {
    let decimals = match pct.abs() {
        p if p > 0.0 && p < 0.1 => 2,
        p if p < 10.0 => 1,
        _ => 0,
    };
    format!("{:.*}%", decimals, pct)
}

/// A 0..=1 ratio as a percentage with one decimal
pub fn format_ratio(ratio: Decimal) -> String {
    let pct = ratio.saturating_mul(Decimal::ONE_HUNDRED).to_f64().unwrap_or(0.0);
    format!("{:.1}%", pct)
}

/// Horizontal bar of `width` cells, filled in proportion to `value / max`
pub fn format_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 && value > 0.0 {
        (((value / max) * width as f64).round() as usize).min(width)
    } else {
        0
    };
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(width - filled));
    bar
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Shorten to `max_len` characters, ending with `...` when cut
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let keep = max_len.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str(&"..."[..max_len.min(3)]);
    out
}
