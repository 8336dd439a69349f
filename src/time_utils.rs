// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for dates and durations.

use chrono::{Local, NaiveDate};

/// Current calendar day in the server's local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a minute count for display: whole numbers without decimals,
/// anything else with one decimal place.
pub fn format_minutes(minutes: f64) -> String {
    if minutes.fract() == 0.0 {
        format!("{:.0}", minutes)
    } else {
        format!("{:.1}", minutes)
    }
}
