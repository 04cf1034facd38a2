//! Result formatting.

/// Render a value with exactly one digit after the decimal point.
///
/// Ties round away from zero, so `236.25` renders as `"236.3"`. The tie test
/// runs on the stored binary value: `0.35` is held as `0.3499...` yet still
/// lands on `"0.4"` after scaling by ten. No locale handling and no thousands
/// separators.
///
/// ```rust
/// use onerep_core::format::format_result;
///
/// assert_eq!(format_result(225.0), "225.0");
/// assert_eq!(format_result(236.25), "236.3");
/// ```
pub fn format_result(value: f64) -> String {
    // `{:.1}` alone rounds ties to even
    let scaled = value * 10.0;
    if !scaled.is_finite() {
        return format!("{:.1}", value);
    }
    format!("{:.1}", scaled.round() / 10.0)
}
