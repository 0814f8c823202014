//! Date helper functions

use chrono::{Datelike, Local};

/// Copyright span shown in the footer
///
/// # Examples
/// ```ignore
/// footer_year(2026, 2026) // -> "2026"
/// footer_year(2026, 2028) // -> "2026-2028"
/// ```
pub fn footer_year(start_year: i32, current_year: i32) -> String {
    if current_year > start_year {
        format!("{}-{}", start_year, current_year)
    } else {
        start_year.to_string()
    }
}

/// The current local year
pub fn current_year() -> i32 {
    Local::now().year()
}
