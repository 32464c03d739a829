//! Runtime text parsing.

/// Parse `"<H>h <M>min"` into total minutes.
///
/// Both components are required and must be plain digits; `<M>` may be
/// zero-padded. Anything else, including `"45min"` or `"2h"`, is `None`.
pub fn parse_runtime(value: &str) -> Option<u32> {
    let (hours, rest) = value.trim().split_once('h')?;
    let minutes = rest.strip_prefix(' ')?.strip_suffix("min")?;
    let hours = parse_digits(hours)?;
    let minutes = parse_digits(minutes)?;
    hours.checked_mul(60)?.checked_add(minutes)
}

fn parse_digits(value: &str) -> Option<u32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
