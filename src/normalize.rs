//! # Numeric Cell Normalization
//!
//! Training logs exported from spreadsheets carry values in two numeric
//! locale conventions, often with unit suffixes attached ("80 kg",
//! "130 sec") and occasionally thousands separators ("1.234,56").
//! This module reduces any such cell to a plain `f64`, or to `None` when
//! the cell holds no usable number.
//!
//! Parsing never fails loudly: a sparse log (rest days, machines skipped
//! in a session) is the expected common case, so an unparseable cell is
//! simply absent data.

/// Normalize a raw cell string into a finite number.
///
/// Rules, in order:
///
/// 1. `None` input stays `None`.
/// 2. Everything except digits, comma, and period is stripped. This
///    removes unit suffixes, internal whitespace, and apostrophe
///    thousands separators in one pass.
/// 3. If both comma and period survive, the period is a thousands
///    separator (removed) and the comma is the decimal separator.
/// 4. A lone comma is a decimal comma and becomes a period.
/// 5. The result is parsed as `f64`; an empty or unparseable string, or
///    a non-finite result, yields `None`.
///
/// ```
/// use liftchart::normalize::normalize;
///
/// assert_eq!(normalize(Some("12,5")), Some(12.5));
/// assert_eq!(normalize(Some("1.234,56")), Some(1234.56));
/// assert_eq!(normalize(Some("80 kg")), Some(80.0));
/// assert_eq!(normalize(Some("")), None);
/// assert_eq!(normalize(None), None);
/// ```
pub fn normalize(raw: Option<&str>) -> Option<f64> {
    let raw = raw?;

    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    let decimal = if cleaned.contains(',') && cleaned.contains('.') {
        cleaned.replace('.', "").replace(',', ".")
    } else if cleaned.contains(',') {
        cleaned.replace(',', ".")
    } else {
        cleaned
    };

    decimal.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decimal_comma() {
        assert_eq!(normalize(Some("12,5")), Some(12.5));
        assert_eq!(normalize(Some("0,25")), Some(0.25));
    }

    #[test]
    fn test_thousands_period_with_decimal_comma() {
        assert_eq!(normalize(Some("1.234,56")), Some(1234.56));
        assert_eq!(normalize(Some("12.345.678,9")), Some(12_345_678.9));
    }

    #[test]
    fn test_plain_decimal_period() {
        assert_eq!(normalize(Some("12.5")), Some(12.5));
        assert_eq!(normalize(Some("100")), Some(100.0));
    }

    #[test]
    fn test_unit_suffixes_stripped() {
        assert_eq!(normalize(Some("80 kg")), Some(80.0));
        assert_eq!(normalize(Some("95 lbs")), Some(95.0));
        assert_eq!(normalize(Some("130 sec")), Some(130.0));
        assert_eq!(normalize(Some("1'250")), Some(1250.0));
    }

    #[test]
    fn test_absent_inputs() {
        assert_eq!(normalize(None), None);
        assert_eq!(normalize(Some("")), None);
        assert_eq!(normalize(Some("   ")), None);
        assert_eq!(normalize(Some("n/a")), None);
        assert_eq!(normalize(Some("-")), None);
    }

    #[test]
    fn test_garbage_yields_absent_not_panic() {
        assert_eq!(normalize(Some("..,,")), None);
        assert_eq!(normalize(Some("1.2.3.4")), None);
    }

    proptest! {
        /// Any input either normalizes to a finite number or to None.
        #[test]
        fn prop_never_non_finite(s in ".*") {
            if let Some(v) = normalize(Some(&s)) {
                prop_assert!(v.is_finite());
            }
        }

        /// Plain non-negative decimals pass through unchanged.
        #[test]
        fn prop_plain_decimal_roundtrip(v in 0.0f64..1_000_000.0) {
            let s = format!("{v}");
            prop_assert_eq!(normalize(Some(&s)), Some(v));
        }
    }
}
