use regex::Regex;
use std::sync::OnceLock;

/// Whether `value` follows the conventional `MM/YYYY` form.
///
/// Dates are free text in the model; the editor only uses this to hint at
/// unconventional input, it never rejects it.
pub fn is_month_year(value: &str) -> bool {
    static MONTH_YEAR: OnceLock<Regex> = OnceLock::new();
    MONTH_YEAR
        .get_or_init(|| Regex::new(r"^(0[1-9]|1[0-2])/\d{4}$").expect("valid month/year pattern"))
        .is_match(value.trim())
}

/// Joins a start and end date for display, skipping empty sides.
pub fn format_period(start: &str, end: &str) -> Option<String> {
    match (start.trim(), end.trim()) {
        ("", "") => None,
        (start, "") => Some(start.to_string()),
        ("", end) => Some(end.to_string()),
        (start, end) => Some(format!("{} - {}", start, end)),
    }
}
