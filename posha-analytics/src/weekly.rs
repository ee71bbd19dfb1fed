//! Weekly activity summary.

use chrono::{DateTime, Duration, Utc};

use posha_core::constants::{UNTRACKED_OCCASION, WEEKLY_WINDOW_DAYS};
use posha_core::models::{OutfitRecord, WeeklySummary};

use crate::frequency::{color_frequency, occasion_patterns};

/// Summarize the seven days ending at `now`.
///
/// The window is `[now - 7d, now]`, inclusive at both ends. Records stamped
/// after `now` are excluded too, so a `now` in the past yields a closed
/// window rather than everything since `now - 7d`. Records whose timestamp
/// could not be read never fall inside the window. `top_colors` and
/// `top_occasion` are computed over the full history so they reflect
/// long-run taste rather than one week.
pub fn weekly_summary(records: &[OutfitRecord], now: DateTime<Utc>) -> WeeklySummary {
    let window_start = now - Duration::days(WEEKLY_WINDOW_DAYS);
    let outfits_in_window: Vec<OutfitRecord> = records
        .iter()
        .filter(|r| r.has_timestamp() && r.timestamp >= window_start && r.timestamp <= now)
        .cloned()
        .collect();

    let top_occasion = occasion_patterns(records)
        .top()
        .map(|entry| entry.name.clone())
        .unwrap_or_else(|| UNTRACKED_OCCASION.to_string());

    WeeklySummary {
        count: outfits_in_window.len(),
        top_colors: color_frequency(records),
        top_occasion,
        outfits_in_window,
    }
}
