//! Release-date parsing.
//!
//! The source writes release dates as `"<day> <month-name> <year>"`, usually
//! followed by a country in parentheses. Months are always matched by name,
//! so day/month order is never ambiguous.

use chrono::NaiveDate;

use reel_model::DateParseMode;

const DAY_MONTH_YEAR: &str = "%d %B %Y";

/// `"<month-name> <day>[,] <year>"` layouts accepted in lenient mode.
const MONTH_DAY_YEAR: [&str; 2] = ["%B %d, %Y", "%B %d %Y"];

/// Parse a release date, ignoring any trailing parenthetical.
///
/// Returns `None` when the text cannot be matched; the caller drops the row.
pub fn parse_release_date(value: &str, mode: DateParseMode) -> Option<NaiveDate> {
    let text = strip_parenthetical(value);
    if !has_full_year(text) {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, DAY_MONTH_YEAR) {
        return Some(date);
    }
    match mode {
        DateParseMode::Strict => None,
        DateParseMode::Lenient => parse_lenient(text),
    }
}

/// `"18 July 2008 (USA)"` becomes `"18 July 2008"`.
///
/// Everything from the first `(` on is dropped when the text ends with `)`,
/// so nested notes such as `"(USA (limited))"` go as a whole.
pub fn strip_parenthetical(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.ends_with(')') {
        if let Some(idx) = trimmed.find('(') {
            return trimmed[..idx].trim_end();
        }
    }
    trimmed
}

/// The last token must be a four-digit year; chrono's `%Y` would otherwise
/// read `"2008"` in `"July 2008"` as day `20` and year `08`.
fn has_full_year(text: &str) -> bool {
    text.split_whitespace()
        .last()
        .is_some_and(|year| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()))
}

fn parse_lenient(text: &str) -> Option<NaiveDate> {
    match text.split_whitespace().count() {
        3 => MONTH_DAY_YEAR
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(text, format).ok()),
        // "July 2008" -> 1 July 2008
        2 => NaiveDate::parse_from_str(&format!("1 {text}"), DAY_MONTH_YEAR).ok(),
        // "2008" -> 1 January 2008
        1 => NaiveDate::from_ymd_opt(text.parse().ok()?, 1, 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn strict_day_month_year() {
        let strict = DateParseMode::Strict;
        assert_eq!(parse_release_date("18 July 2008 (USA)", strict), ymd(2008, 7, 18));
        assert_eq!(parse_release_date("31 March 1999 (USA)", strict), ymd(1999, 3, 31));
        assert_eq!(parse_release_date("19 December 2001", strict), ymd(2001, 12, 19));
        assert_eq!(parse_release_date("5 May 1977 (UK)", strict), ymd(1977, 5, 5));
    }

    #[test]
    fn strict_rejects_everything_else() {
        let strict = DateParseMode::Strict;
        assert_eq!(parse_release_date("not a date", strict), None);
        assert_eq!(parse_release_date("", strict), None);
        assert_eq!(parse_release_date("(USA)", strict), None);
        assert_eq!(parse_release_date("July 18, 2008", strict), None);
        assert_eq!(parse_release_date("2008", strict), None);
        assert_eq!(parse_release_date("31 February 2000", strict), None);
        assert_eq!(parse_release_date("07/18/2008", strict), None);
    }

    #[test]
    fn lenient_text_month_fallbacks() {
        let lenient = DateParseMode::Lenient;
        assert_eq!(parse_release_date("July 18, 2008 (USA)", lenient), ymd(2008, 7, 18));
        assert_eq!(parse_release_date("July 2008", lenient), ymd(2008, 7, 1));
        assert_eq!(parse_release_date("2008 (USA)", lenient), ymd(2008, 1, 1));
        assert_eq!(parse_release_date("18 July 2008", lenient), ymd(2008, 7, 18));
    }

    #[test]
    fn lenient_month_year_is_first_of_month() {
        let lenient = DateParseMode::Lenient;
        assert_eq!(parse_release_date("March 1999 (USA)", lenient), ymd(1999, 3, 1));
        assert_eq!(parse_release_date("December 2001", lenient), ymd(2001, 12, 1));
        assert_eq!(parse_release_date("May 1977", lenient), ymd(1977, 5, 1));
        assert_eq!(parse_release_date("July 18 2008", lenient), ymd(2008, 7, 18));
    }

    #[test]
    fn short_years_are_rejected() {
        assert_eq!(parse_release_date("18 July 08", DateParseMode::Strict), None);
        assert_eq!(parse_release_date("July 08", DateParseMode::Lenient), None);
        assert_eq!(parse_release_date("July 18, 08", DateParseMode::Lenient), None);
    }

    #[test]
    fn lenient_never_reads_numeric_months() {
        let lenient = DateParseMode::Lenient;
        assert_eq!(parse_release_date("07/08/2008", lenient), None);
        assert_eq!(parse_release_date("2008-07-18", lenient), None);
        assert_eq!(parse_release_date("not a date", lenient), None);
    }

    #[test]
    fn parenthetical_is_stripped() {
        assert_eq!(strip_parenthetical(" 18 July 2008 (USA) "), "18 July 2008");
        assert_eq!(strip_parenthetical("18 July 2008"), "18 July 2008");
        assert_eq!(strip_parenthetical("(USA)"), "");
        assert_eq!(
            strip_parenthetical("18 July 2008 (USA (limited))"),
            "18 July 2008"
        );
        assert_eq!(
            parse_release_date("18 July 2008 (USA (limited))", DateParseMode::Strict),
            ymd(2008, 7, 18)
        );
    }
}
