// Pure cell-value formatters shared by the selector and the board view.
use chrono::{Local, NaiveDate};

/// Placeholder shown for any missing or blank display field.
pub const PLACEHOLDER: &str = "—";

/// Drops the time-of-day part of a raw cell: everything after the first `T`
/// (ISO datetime) or, failing that, the first space. Empty input stays empty.
pub fn date_only(value: &str) -> String {
    let s = value.trim();
    if s.is_empty() {
        return String::new();
    }
    if let Some((date, _)) = s.split_once('T') {
        return date.to_string();
    }
    match s.split_once(' ') {
        Some((date, _)) => date.to_string(),
        None => s.to_string(),
    }
}

fn digits(part: &str, min_len: usize, max_len: usize) -> Option<u32> {
    if part.len() < min_len || part.len() > max_len {
        return None;
    }
    if !part.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

fn iso_parts(s: &str) -> Option<(i32, u32, u32)> {
    let mut it = s.split('-');
    let year = digits(it.next()?, 4, 4)?;
    let month = digits(it.next()?, 1, 2)?;
    let day = digits(it.next()?, 1, 2)?;
    if it.next().is_some() {
        return None;
    }
    Some((year as i32, month, day))
}

fn slash_parts(s: &str) -> Option<(u32, u32, i32)> {
    let mut it = s.split('/');
    let a = digits(it.next()?, 1, 2)?;
    let b = digits(it.next()?, 1, 2)?;
    let year = digits(it.next()?, 4, 4)?;
    if it.next().is_some() {
        return None;
    }
    Some((a, b, year as i32))
}

/// Loose parser for the two date shapes the sheet actually contains:
/// `YYYY-M-D` and `A/B/YYYY`. The slash form is disambiguated by magnitude;
/// when both components could be a month the first is taken as the day
/// (day-first is the locale convention of the source data). Anything else,
/// including garbled text, is `None` rather than an error.
pub fn parse_date_loose(value: &str) -> Option<NaiveDate> {
    let s = date_only(value);
    if s.is_empty() {
        return None;
    }
    if let Some((year, month, day)) = iso_parts(&s) {
        return NaiveDate::from_ymd_opt(year, month, day);
    }
    if let Some((a, b, year)) = slash_parts(&s) {
        let (day, month) = if a > 12 {
            (a, b)
        } else if b > 12 {
            (b, a)
        } else {
            (a, b)
        };
        return NaiveDate::from_ymd_opt(year, month, day);
    }
    None
}

/// Reference point for the enrollment filter. Computed once per pipeline
/// invocation at the boundary and passed down, so the selector stays pure.
pub fn start_of_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Strips the code annotation some program titles carry after a `--`.
pub fn left_of_double_dash(value: &str) -> String {
    let s = value.trim();
    match s.split_once("--") {
        Some((left, _)) => left.trim().to_string(),
        None => s.to_string(),
    }
}

/// Lowercases, collapses whitespace and capitalizes every word. The
/// placeholder passes through untouched. Capitalization goes through
/// `char::to_uppercase`, so accented initials come out right (á → Á).
pub fn to_sentence_case(value: &str) -> String {
    let s = value.trim();
    if s.is_empty() || s == PLACEHOLDER {
        return PLACEHOLDER.to_string();
    }
    s.to_lowercase()
        .split_whitespace()
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Trimmed value, or the given fallback when nothing is left.
pub fn safe_text_or(value: &str, fallback: &str) -> String {
    let s = value.trim();
    if s.is_empty() {
        fallback.to_string()
    } else {
        s.to_string()
    }
}

pub fn safe_text(value: &str) -> String {
    safe_text_or(value, PLACEHOLDER)
}

/// Comparison form of an enum-like cell (the offer-type column).
pub fn normalize_value(value: &str) -> String {
    value.trim().to_lowercase()
}
