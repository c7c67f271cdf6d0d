//! Tolerant numeric parsing for figures lifted out of regulatory text.
//!
//! Regulation excerpts mix conventions freely: "7,5%" (comma decimal),
//! "USD 2,000/ton" (comma grouping), "Rp 50.000" (dot grouping). Parsing
//! never fails hard; a malformed figure is simply no match for that
//! pattern.

/// Parse a percentage figure. Percent captures are short decimals, so a
/// comma is always a decimal separator here.
pub fn parse_percent(raw: &str) -> Option<f64> {
    raw.trim().replace(',', ".").parse().ok()
}

/// Parse a monetary amount, accepting either separator as grouping or
/// decimal: "2,000" and "1.500" group, "2.5" and "0,05" are decimals,
/// "2.000,50" and "1,234.56" mix both.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let s: String = raw.trim().chars().filter(|c| !c.is_whitespace()).collect();
    if s.is_empty() {
        return None;
    }
    let cleaned = match (s.rfind('.'), s.rfind(',')) {
        (Some(dot), Some(comma)) => {
            // Both present: the later one is the decimal separator.
            let (decimal, grouping) = if dot > comma { ('.', ',') } else { (',', '.') };
            s.replace(grouping, "").replace(decimal, ".")
        }
        (Some(pos), None) | (None, Some(pos)) => {
            let sep = s.as_bytes()[pos] as char;
            let single = s.matches(sep).count() == 1;
            let digits_after = s.len() - pos - 1;
            if single && digits_after != 3 {
                s.replace(sep, ".")
            } else {
                // "2,000", "1.500.000" — grouping separators.
                s.replace(sep, "")
            }
        }
        (None, None) => s,
    };
    cleaned.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn percent_accepts_comma_decimal() {
        assert_eq!(parse_percent("7,5"), Some(7.5));
        assert_eq!(parse_percent("5"), Some(5.0));
        assert_eq!(parse_percent("2.5"), Some(2.5));
    }

    #[test]
    fn percent_rejects_garbage() {
        assert_eq!(parse_percent("lima"), None);
        assert_eq!(parse_percent(""), None);
    }

    #[test]
    fn amount_grouping_conventions() {
        assert_eq!(parse_amount("2,000"), Some(2000.0));
        assert_eq!(parse_amount("1.500"), Some(1500.0));
        assert_eq!(parse_amount("1.500.000"), Some(1_500_000.0));
        assert_eq!(parse_amount("2,000,000"), Some(2_000_000.0));
    }

    #[test]
    fn amount_decimal_conventions() {
        assert_eq!(parse_amount("2.5"), Some(2.5));
        assert_eq!(parse_amount("0,05"), Some(0.05));
        assert_eq!(parse_amount("2.000,50"), Some(2000.5));
        assert_eq!(parse_amount("1,234.56"), Some(1234.56));
    }

    #[test]
    fn amount_plain_and_malformed() {
        assert_eq!(parse_amount("2000"), Some(2000.0));
        assert_eq!(parse_amount(" 42 "), Some(42.0));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount(",."), None);
    }

    proptest! {
        #[test]
        fn grouped_thousands_parse_back_exactly(n in 1u32..1000, sep in "[.,]") {
            let thousands = format!("{n}{sep}000");
            prop_assert_eq!(parse_amount(&thousands), Some(f64::from(n) * 1000.0));
        }

        #[test]
        fn short_decimals_parse_with_either_separator(
            whole in 0u32..10_000,
            frac in 0u32..100,
            sep in "[.,]",
        ) {
            let raw = format!("{whole}{sep}{frac:02}");
            let expected = f64::from(whole) + f64::from(frac) / 100.0;
            let parsed = parse_amount(&raw);
            prop_assert!(parsed.is_some_and(|v| (v - expected).abs() < 1e-9));
        }
    }
}
