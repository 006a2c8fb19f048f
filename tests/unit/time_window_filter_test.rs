// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{TimeZone, Utc};
use jobharvest::domain::models::time_window::TimeWindow;
use jobharvest::domain::services::time_window_filter::{
    is_within_window, is_within_window_at, parse_posting_time,
};

#[test]
fn relative_times_against_both_windows() {
    assert!(is_within_window("2 hours ago", TimeWindow::Last24h));
    assert!(is_within_window("2 hours ago", TimeWindow::Last7d));
    assert!(!is_within_window("10 days ago", TimeWindow::Last24h));
    assert!(is_within_window("Yesterday", TimeWindow::Last24h));
}

#[test]
fn anything_passes_without_window() {
    for raw in ["", "Featured", "10 years ago", "28 Jun"] {
        assert!(is_within_window(raw, TimeWindow::Any));
    }
}

#[test]
fn short_date_year_inference() {
    let march = Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap();
    let august = Utc.with_ymd_and_hms(2025, 8, 1, 8, 0, 0).unwrap();

    assert_eq!(
        parse_posting_time("28 Jun", march),
        Some(Utc.with_ymd_and_hms(2024, 6, 28, 0, 0, 0).unwrap())
    );
    assert_eq!(
        parse_posting_time("28 Jun", august),
        Some(Utc.with_ymd_and_hms(2025, 6, 28, 0, 0, 0).unwrap())
    );
    assert!(!is_within_window_at("28 Jun", TimeWindow::Last7d, march));
}
