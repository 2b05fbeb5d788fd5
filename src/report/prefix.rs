//! Base-1000 metric-prefix formatting for large counts.
//!
//! A count is split into base-1000 chunks, each annotated with its SI-style
//! prefix, and emitted most-significant first: `1_234_567` renders as
//! `"001M 234K 567 "`. Chunks are zero-padded to three digits; emission
//! stops once the remaining value is exhausted.

/// Metric prefixes, least significant first.
const METRIC_PREFIXES: [&str; 9] = ["", "K", "M", "G", "T", "P", "E", "Z", "Y"];

/// Format a non-negative count with base-1000 metric prefixes.
///
/// Zero renders as the literal `"0"`. Callers holding fractional values
/// truncate toward zero before formatting.
pub fn to_metric_string(number: u128) -> String {
    if number == 0 {
        return "0".to_string();
    }
    let mut remaining = number;
    let mut string = String::new();
    for prefix in METRIC_PREFIXES {
        string = format!("{:03}{} {}", remaining % 1000, prefix, string);
        remaining /= 1000;
        if remaining == 0 {
            break;
        }
    }
    string
}
