//! Human-readable number formatting shared by the statistics panel and reports.

/// Format an integer with `,` thousands separators, e.g. `189234` -> `"189,234"`.
pub(crate) fn with_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a float without a trailing `.0` when it is integral; otherwise up to two decimals.
pub(crate) fn trim_float(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    if value.fract() == 0.0 {
        return format!("{value:.0}");
    }
    let s = format!("{value:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// `round(part / whole * 100)`, defined as 0 when `whole` is 0.
pub(crate) fn round_percent(part: u64, whole: u64) -> u32 {
    if whole == 0 { 0 } else { (part as f64 / whole as f64 * 100.0).round() as u32 }
}
