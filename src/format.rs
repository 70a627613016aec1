//! Helper functions for formatting chain data for display.
//!
//! This module contains utility functions used across the UI for:
//! - Balance and amount formatting
//! - Hash/address truncation
//! - Timestamp rendering

use chrono::DateTime;

// ============================================================================
// Amount Formatting
// ============================================================================

/// Format a balance with exactly two digits after the decimal point.
///
/// This matches the display contract of the server's balance API: readings
/// always render with two fractional digits regardless of input precision.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_balance(5.0), "5.00");
/// assert_eq!(format_balance(5.006), "5.01");
/// ```
#[must_use]
pub fn format_balance(balance: f64) -> String {
    format!("{balance:.2}")
}

/// Format a number with commas for thousands separators.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_with_commas(1000), "1,000");
/// assert_eq!(format_with_commas(1_000_000), "1,000,000");
/// ```
#[must_use]
pub fn format_with_commas(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

// ============================================================================
// Hash / Address Truncation
// ============================================================================

/// Truncate a hash or address to fit in the given width.
///
/// If the value is longer than `max_len`, it is truncated with an ellipsis
/// in the middle (e.g., "04a9f2...77c1").
#[must_use]
pub fn truncate_middle(value: &str, max_len: usize) -> String {
    if value.len() <= max_len {
        return value.to_string();
    }

    if max_len < 7 {
        return value.chars().take(max_len).collect();
    }

    // Reserve 3 chars for "..."
    let available = max_len - 3;
    let prefix_len = available.div_ceil(2);
    let suffix_len = available / 2;

    let prefix: String = value.chars().take(prefix_len).collect();
    let suffix: String = value.chars().skip(value.len() - suffix_len).collect();

    format!("{prefix}...{suffix}")
}

// ============================================================================
// Timestamps
// ============================================================================

/// Render a Unix timestamp (seconds, possibly fractional) as a readable
/// UTC date string. Out-of-range values fall back to the raw number.
#[must_use]
pub fn format_timestamp(timestamp: f64) -> String {
    let secs = timestamp as i64;
    match DateTime::from_timestamp(secs, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => format!("{timestamp}"),
    }
}

// ============================================================================
// Tests
// ============================================================================
