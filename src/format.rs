//! Display helpers for a single locale (USD, en-US digit grouping).
//!
//! Currency buckets are part of the public contract:
//! `>= 1e9` billions (2 decimals), `>= 1e6` millions (1 decimal),
//! `>= 1e3` thousands (0 decimals), otherwise whole dollars.

use crate::inputs::{DisplayKind, InputKey};

pub const NOT_AVAILABLE: &str = "n/a";

/// Rounds to `decimals` places with halves going away from zero, so `12.5`
/// becomes `13` instead of the even digit `{:.0}` would pick.
fn round_half_up(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

fn fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, round_half_up(value, decimals))
}

pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("${}", value);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let v = value.abs();

    let body = if v >= 1_000_000_000.0 {
        format!("{}B", fixed(v / 1_000_000_000.0, 2))
    } else if v >= 1_000_000.0 {
        format!("{}M", fixed(v / 1_000_000.0, 1))
    } else if v >= 1_000.0 {
        format!("{}K", fixed(v / 1_000.0, 0))
    } else {
        fixed(v, 0)
    };
    format!("{}${}", sign, body)
}

/// Grouped digits with a fixed number of decimals, e.g. `36,926` or `4.65`.
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let text = fixed(value.abs(), decimals);
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, &d) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(d as char);
    }

    // "-0" is not worth printing
    let is_zero = text.bytes().all(|b| b == b'0' || b == b'.');
    let mut out = String::new();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// A fraction rendered as a percentage with one decimal: `0.018 -> "1.8%"`.
pub fn format_percent(fraction: f64) -> String {
    format!("{}%", fixed(fraction * 100.0, 1))
}

pub fn format_years(years: f64) -> String {
    format!("{} years", years)
}

/// Signed percent change, `"n/a"` when undefined.
pub fn format_change(percent: Option<f64>) -> String {
    match percent {
        Some(p) if p >= 0.0 => format!("+{}%", fixed(p, 1)),
        Some(p) => format!("-{}%", fixed(-p, 1)),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Renders an input the way its control displays it.
pub fn format_input(key: InputKey, value: f64) -> String {
    match key.display_kind() {
        DisplayKind::Currency => format_currency(value),
        DisplayKind::Percent => format_percent(value),
        DisplayKind::Years => format_years(value),
        DisplayKind::Number => format_number(value, 0),
    }
}
