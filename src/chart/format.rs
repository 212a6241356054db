use chrono::{DateTime, NaiveDate, NaiveDateTime};

const UNITS: [(u64, &str); 3] = [
    (1_000_000_000, "B"),
    (1_000_000, "M"),
    (1_000, "K"),
];

/// Abbreviates a play count with two decimals, e.g. `2_340_000` -> `"2.34M"`.
///
/// Thresholds are checked largest first, so `1_000_000_000` is `"1.00B"`.
/// The quotient is a double, so `1_005` is `"1.00K"` (1.005 is stored as
/// 1.00499...).
pub fn format_streams(n: u64) -> String {
    for (divisor, suffix) in UNITS {
        if n >= divisor {
            let hundredths = round_hundredths(n as f64 / divisor as f64);
            return format!("{}.{:02}{}", hundredths / 100, hundredths % 100, suffix);
        }
    }
    n.to_string()
}

/// `x * 100` rounded to the nearest integer, computed on the exact binary
/// value of `x`. Ties go to the larger candidate. `x` must be non-negative.
fn round_hundredths(x: f64) -> u128 {
    let bits = x.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = u128::from(bits & ((1 << 52) - 1));
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1 << 52), biased - 1075)
    };

    let scaled = mantissa * 100;
    if exponent >= 0 {
        return scaled << exponent;
    }
    let shift = exponent.unsigned_abs();
    // scaled < 2^60, so anything shifted further rounds to zero
    if shift > 64 {
        return 0;
    }
    let whole = scaled >> shift;
    let rest = scaled & ((1 << shift) - 1);
    if rest >= 1 << (shift - 1) {
        whole + 1
    } else {
        whole
    }
}

/// Groups digits in threes with commas (en-US), e.g. `"1,234,567"`.
pub fn format_full_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn parse_chart_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

/// Renders a chart date as `"January 5, 2024"`. Unparseable input yields
/// `"Invalid Date"` instead of an error.
pub fn format_date(input: &str) -> String {
    match parse_chart_date(input) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}
