//! Formatting utilities for the UI layer.
//!
//! Dates arrive as ISO-8601 strings (`2026-01-20` or
//! `2026-01-20T21:35:00Z`) and are rendered in French.

use chrono::{DateTime, NaiveDate, Utc};

const MONTH_NAMES: [&str; 12] = [
    "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
    "déc.",
];

fn parse_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str.get(..10)?, "%Y-%m-%d").ok()
}

/// "20 janv. 2026". Unparseable input is returned unchanged.
pub fn format_date_fr(date_str: &str) -> String {
    use chrono::Datelike;

    match parse_date(date_str) {
        Some(d) => format!("{} {} {}", d.day(), MONTH_NAMES[d.month0() as usize], d.year()),
        None => date_str.to_string(),
    }
}

/// "20 janv. 2026 à 21:35", or the date alone when there is no time part.
pub fn format_datetime_fr(date_str: &str) -> String {
    let date = format_date_fr(date_str);
    match date_str.get(11..16) {
        Some(time) if time.as_bytes().get(2) == Some(&b':') => format!("{date} à {time}"),
        _ => date,
    }
}

/// "il y a 3 jours" style age of an RFC 3339 timestamp relative to `now`.
pub fn format_relative_fr(date_str: &str, now: DateTime<Utc>) -> String {
    let Ok(then) = DateTime::parse_from_rfc3339(date_str) else {
        return format_date_fr(date_str);
    };
    let minutes = (now - then.with_timezone(&Utc)).num_minutes();
    match minutes {
        m if m < 1 => "à l'instant".to_string(),
        m if m < 60 => format!("il y a {m} min"),
        m if m < 60 * 24 => format!("il y a {} h", m / 60),
        m if m < 60 * 24 * 2 => "hier".to_string(),
        m if m < 60 * 24 * 30 => format!("il y a {} jours", m / (60 * 24)),
        _ => format_date_fr(date_str),
    }
}

/// Label of a deadline next to a listing.
pub fn deadline_label(deadline: Option<&str>, today: NaiveDate) -> String {
    match deadline {
        None => "Sans date limite".to_string(),
        Some(d) if shared_types::deadline_passed(d, today) => "Clôturée".to_string(),
        Some(d) => format!("Clôture le {}", format_date_fr(d)),
    }
}

/// Truncate to `max` characters on a char boundary, adding an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(max).collect();
    format!("{}…", cut.trim_end())
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
