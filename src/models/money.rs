//! Permissive parsing for user-supplied numeric fields.

/// Extracts a finite number from free-form input.
///
/// Strips every character other than digits, `.` and `-`, then parses; when
/// the full cleaned string does not parse, falls back to its longest numeric
/// prefix. Returns `None` when no finite number can be extracted, so callers
/// choose between rejecting the field and coercing it to zero.
#[must_use]
pub fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    if let Some(n) = cleaned.parse::<f64>().ok().filter(|n| n.is_finite()) {
        return Some(n);
    }

    numeric_prefix(&cleaned)
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

/// Coerces free-form input to a finite number, resolving unparsable input
/// to 0 so arithmetic aggregations stay well-defined.
#[must_use]
pub fn coerce_amount(raw: &str) -> f64 {
    parse_amount(raw).unwrap_or(0.0)
}

/// Formats an amount the way a form field would display it.
#[must_use]
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Returns the longest leading slice that reads as a number: an optional
/// sign, digits, and at most one decimal point.
fn numeric_prefix(cleaned: &str) -> Option<&str> {
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (i, c) in cleaned.char_indices() {
        match c {
            '-' if i == 0 => end = i + 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            },
            '0'..='9' => {
                seen_digit = true;
                end = i + 1;
            },
            _ => break,
        }
    }

    seen_digit.then(|| &cleaned[..end])
}
