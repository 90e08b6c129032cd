//! Display helpers for money, counts and ages.

use chrono::DateTime;
use chrono::Utc;
use itertools::Itertools;

const SUFFIXES: [(f64, &str); 3] = [(1e9, "B"), (1e6, "M"), (1e3, "K")];

fn rounded(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

// a value that would round up to 1000 of one unit moves to the next
fn compact(value: f64, decimals: usize) -> String {
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    for (threshold, suffix) in SUFFIXES {
        if abs >= threshold || rounded(abs / (threshold / 1e3), decimals) >= 1e3 {
            return format!("{sign}{:.decimals$}{suffix}", abs / threshold);
        }
    }
    format!("{sign}{abs:.decimals$}")
}

/// `$1.23M`, `$4.5K`, `$12.00`.
pub fn format_usd_compact(value: f64, decimals: usize) -> String {
    let s = compact(value, decimals);
    match s.strip_prefix('-') {
        Some(rest) => format!("-${rest}"),
        None => format!("${s}"),
    }
}

/// Volumes without a currency sign: `1.2M`, `850`.
pub fn format_compact(value: f64) -> String {
    if value.abs().round() < 1e3 {
        return format!("{value:.0}");
    }
    compact(value.signum() * value.abs().max(1e3), 1)
}

/// Token prices are tiny, so they always carry six decimals.
pub fn format_price(price: f64) -> String {
    format!("${price:.6}")
}

/// `12345` -> `12,345`.
pub fn format_count(n: u64) -> String {
    let digits: Vec<char> = n.to_string().chars().collect();
    digits
        .rchunks(3)
        .rev()
        .map(|group| group.iter().collect::<String>())
        .join(",")
}

/// Signed percentage with one decimal: `+12.3%`, `-4.0%`.
pub fn format_percent(pct: f64) -> String {
    if pct >= 0.0 {
        format!("+{pct:.1}%")
    } else {
        format!("{pct:.1}%")
    }
}

pub fn format_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format_minutes_ago((now - then).num_minutes().max(0) as u64)
}

pub fn format_minutes_ago(minutes: u64) -> String {
    match minutes {
        0 => "just now".to_string(),
        1..=59 => format!("{minutes}m ago"),
        60..=1439 => format!("{}h ago", minutes / 60),
        _ => format!("{}d ago", minutes / 1440),
    }
}

/// Short form of a base58 address: `7GCi...W2hr`.
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}
