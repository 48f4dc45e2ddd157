//! Month ordering for tourism trend rows

use chrono::{Datelike, Month, NaiveDate};

/// Sort key derived from a free-form month value.
///
/// Dated values sort before calendar-only values, which sort before
/// anything unrecognized. Unrecognized values compare equal so a stable
/// sort keeps their relative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MonthKey {
    /// `YYYY-MM` or a full ISO date
    Dated { year: i32, month: u32 },
    /// Month number or English month name
    Calendar(u32),
    Unrecognized,
}

impl MonthKey {
    /// Parse a month value as stored in `tourism_trends.month`
    pub fn parse(value: &str) -> Self {
        let value = value.trim();

        if let Ok(n) = value.parse::<u32>() {
            return if (1..=12).contains(&n) {
                MonthKey::Calendar(n)
            } else {
                MonthKey::Unrecognized
            };
        }

        if let Some(date) = parse_date_prefix(value) {
            return MonthKey::Dated {
                year: date.year(),
                month: date.month(),
            };
        }

        match value.parse::<Month>() {
            Ok(month) => MonthKey::Calendar(month.number_from_month()),
            Err(_) => month_from_prefix(value).map_or(MonthKey::Unrecognized, MonthKey::Calendar),
        }
    }
}

/// Month number for an abbreviation chrono rejects, such as "Sept".
/// Three letters are enough to tell every month apart.
fn month_from_prefix(value: &str) -> Option<u32> {
    let value = value.trim_end_matches('.').to_ascii_lowercase();
    if value.len() < 3 || !value.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    (1..=12u8)
        .filter_map(|n| Month::try_from(n).ok())
        .find(|month| month.name().to_ascii_lowercase().starts_with(&value))
        .map(|month| month.number_from_month())
}

fn parse_date_prefix(value: &str) -> Option<NaiveDate> {
    // Accept "2024-01", "2024-01-15" and "2024-01-15 10:00:00"
    if let Some(day) = value.get(..10) {
        if let Ok(date) = NaiveDate::parse_from_str(day, "%Y-%m-%d") {
            return Some(date);
        }
    }
    NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d").ok()
}
