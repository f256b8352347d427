//! Input coercion for the two usage counts.
//!
//! Text input is parsed leniently and never fails: anything without a
//! leading integer counts as 0. Both origins (text field and slider) end up
//! in [`clamp_value`], so the bound is applied the same way regardless of
//! where the value came from.

/// Parse `raw` as an integer and clamp it into `[0, max]`.
///
/// Leading whitespace and an optional sign are accepted, then the longest
/// run of ASCII digits; anything after it is ignored (`"12abc"` is 12,
/// `"3.7"` is 3). Empty or non-numeric input becomes 0.
pub fn clamp(raw: &str, max: u64) -> u64 {
    let value = match parse_leading_int(raw) {
        Some(v) => v,
        None => {
            tracing::trace!(raw, "non-numeric count input, using 0");
            0
        }
    };
    clamp_value(value, max)
}

/// Clamp an already-numeric value into `[0, max]`.
pub fn clamp_value(value: i64, max: u64) -> u64 {
    if value <= 0 {
        0
    } else {
        (value as u64).min(max)
    }
}

/// Leading-integer parse. Overlong digit runs saturate at the `i64` bounds.
fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let mut value: i64 = 0;
    for b in digits[..end].bytes() {
        let d = i64::from(b - b'0');
        value = match value.checked_mul(10).and_then(|v| v.checked_add(d)) {
            Some(v) => v,
            None => return Some(if negative { i64::MIN } else { i64::MAX }),
        };
    }
    Some(if negative { -value } else { value })
}
