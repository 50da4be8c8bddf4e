// Form defaults that depend on the clock.
use chrono::{Local, NaiveDate};

/// Long British-style date used on the announcement, e.g. "17 October 2026".
pub fn display_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn today_display_date() -> String {
    display_date(today())
}
