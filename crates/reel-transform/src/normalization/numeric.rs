//! Numeric normalization utilities.

/// Parses a string as f64, returning None for invalid, empty or non-finite strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a string as i64, returning None for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<i64>().ok()
}

const MAX_COUNT: u64 = i64::MAX as u64;

/// Parses a non-negative count such as `num_raters`.
///
/// Accepts thousands separators (`"1,619,761"`) and whole floats
/// (`"6836.0"`, as written by tools that widen integer columns with gaps).
/// Counts above `i64::MAX` are `None`, matching the integer cell range.
pub fn parse_count(value: &str) -> Option<u64> {
    let cleaned: String = value.trim().chars().filter(|ch| *ch != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    if let Ok(count) = cleaned.parse::<u64>() {
        return (count <= MAX_COUNT).then_some(count);
    }
    let float = parse_f64(&cleaned)?;
    // i64::MAX as f64 rounds up to 2^63, hence the strict bound.
    if float >= 0.0 && float.fract() == 0.0 && float < MAX_COUNT as f64 {
        Some(float as u64)
    } else {
        None
    }
}

/// Parses a year column value; `"(2008)"` is accepted as well as `"2008"`.
pub fn parse_year(value: &str) -> Option<i32> {
    let trimmed = value.trim().trim_start_matches('(').trim_end_matches(')');
    parse_i64(trimmed).and_then(|year| i32::try_from(year).ok())
}
