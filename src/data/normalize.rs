// ---------------------------------------------------------------------------
// Column normalisation for the `year` and `budget` columns
// ---------------------------------------------------------------------------

/// Clean a raw `year` cell.
///
/// Commas and double quotes are removed before parsing, so `"1,994"` and
/// `"\"1994\""` both become `1994`. Any finite number is kept as is;
/// text that does not parse is treated as missing rather than an error.
pub fn normalize_year(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && *c != '"').collect();
    match cleaned.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Clean a raw `budget` cell into a non-negative float.
///
/// Every character outside `[0-9.]` is dropped before parsing. The result
/// falls back to `0.0` for empty cells, leftovers that still don't parse
/// (`"1.2.3"`, `"."`) and overflow.
pub fn normalize_budget(raw: &str) -> f64 {
    let raw = if raw.is_empty() { "0" } else { raw };
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    match digits.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn year_with_thousands_separator() {
        assert_eq!(normalize_year("1,994"), Some(1994.0));
    }

    #[test]
    fn year_with_quotes_and_padding() {
        assert_eq!(normalize_year("\"2001\""), Some(2001.0));
        assert_eq!(normalize_year(" 1957 "), Some(1957.0));
    }

    #[test]
    fn fractional_year_is_kept() {
        assert_eq!(normalize_year("1994.0"), Some(1994.0));
        assert_eq!(normalize_year("1994.5"), Some(1994.5));
    }

    #[test]
    fn unparseable_year_is_missing() {
        assert_eq!(normalize_year("N/A"), None);
        assert_eq!(normalize_year(""), None);
        assert_eq!(normalize_year("1e400"), None);
        assert_eq!(normalize_year("NaN"), None);
    }

    #[test]
    fn budget_with_currency_and_separators() {
        assert_eq!(normalize_budget("$1,200,000"), 1_200_000.0);
    }

    #[test]
    fn empty_budget_is_zero() {
        assert_eq!(normalize_budget(""), 0.0);
    }

    #[test]
    fn budget_keeps_decimal_point() {
        assert_eq!(normalize_budget("€ 3.5"), 3.5);
    }

    #[test]
    fn malformed_budget_remnants_fall_back_to_zero() {
        assert_eq!(normalize_budget("1.2.3"), 0.0);
        assert_eq!(normalize_budget("."), 0.0);
        assert_eq!(normalize_budget("unknown"), 0.0);
    }

    #[test]
    fn budget_sign_is_stripped() {
        assert_eq!(normalize_budget("-500"), 500.0);
    }

    #[test]
    fn overflowing_budget_is_zero() {
        let huge = "9".repeat(400);
        assert_eq!(normalize_budget(&huge), 0.0);
    }

    proptest! {
        #[test]
        fn budget_is_always_finite_and_non_negative(raw in ".*") {
            let v = normalize_budget(&raw);
            prop_assert!(v.is_finite());
            prop_assert!(v >= 0.0);
        }

        #[test]
        fn year_ignores_commas_and_quotes(year in 1000i32..3000, noise in "[,\"]{0,4}") {
            let s = year.to_string();
            let (head, tail) = s.split_at(1);
            let raw = format!("{noise}{head}{noise}{tail}{noise}");
            prop_assert_eq!(normalize_year(&raw), Some(f64::from(year)));
        }

        #[test]
        fn year_never_panics(raw in ".*") {
            let _ = normalize_year(&raw);
        }
    }
}
