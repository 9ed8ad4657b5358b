// ---------------------------------------------------------------------------
// Display formatting shared by the table and chart tooltips
// ---------------------------------------------------------------------------

/// Format with a fixed number of decimals and `,` thousands separators.
/// Missing values (NaN) read `n/a`.
pub fn thousands(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return MISSING.to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let text = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = value < 0.0 && text.chars().any(|c| c.is_ascii_digit() && c != '0');
    let sign = if negative { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

const MISSING: &str = "n/a";

/// Whole years print without a fraction (`1994`), others as parsed (`1994.5`).
pub fn year_label(year: Option<f64>) -> String {
    match year {
        Some(y) => y.to_string(),
        None => MISSING.to_string(),
    }
}

pub fn rating_label(rating: f64) -> String {
    if rating.is_nan() {
        MISSING.to_string()
    } else {
        format!("{rating:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(thousands(28_341_469.0, 2), "28,341,469.00");
        assert_eq!(thousands(999.0, 0), "999");
        assert_eq!(thousands(1000.0, 0), "1,000");
        assert_eq!(thousands(0.0, 1), "0.0");
    }

    #[test]
    fn negative_values_keep_their_sign() {
        assert_eq!(thousands(-1234.5, 1), "-1,234.5");
        assert_eq!(thousands(-0.001, 1), "0.0");
    }

    #[test]
    fn missing_year_is_labelled() {
        assert_eq!(year_label(Some(1994.0)), "1994");
        assert_eq!(year_label(Some(1994.5)), "1994.5");
        assert_eq!(year_label(None), "n/a");
    }

    #[test]
    fn missing_numbers_are_labelled() {
        assert_eq!(thousands(f64::NAN, 2), "n/a");
        assert_eq!(rating_label(f64::NAN), "n/a");
        assert_eq!(rating_label(8.26), "8.3");
    }
}
