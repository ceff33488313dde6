/// Compact relative-age formatting ("2w 3d")
use chrono::{DateTime, Utc};

/// Units in descending magnitude: (seconds per unit, suffix)
const UNITS: [(i64, char); 5] = [(7 * 24 * 3600, 'w'), (24 * 3600, 'd'), (3600, 'h'), (60, 'm'), (1, 's')];

/// Maximum number of unit components kept in the output
const MAX_COMPONENTS: usize = 2;

/// Format the time elapsed between `from` and `to`.
///
/// Zero units are never printed and only the two most significant non-zero
/// units are kept, so "2w 3d 5h" becomes "2w 3d". Sub-second remainders are
/// dropped. An empty or negative span yields an empty string.
pub fn format_age(from: DateTime<Utc>, to: DateTime<Utc>) -> String {
    format_seconds((to - from).num_seconds())
}

/// Format a span given in whole seconds (see [`format_age`]).
pub fn format_seconds(total: i64) -> String {
    let mut remaining = total.max(0);
    let mut parts = Vec::with_capacity(MAX_COMPONENTS);

    for (unit, suffix) in UNITS {
        let value = remaining / unit;
        remaining %= unit;
        if value > 0 {
            parts.push(format!("{}{}", value, suffix));
        }
    }

    parts.truncate(MAX_COMPONENTS);
    parts.join(" ")
}

#[cfg(test)]
#[path = "duration_test.rs"]
mod duration_test;
