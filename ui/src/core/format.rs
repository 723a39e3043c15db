//! Formatting helpers for chart labels and tooltips.

/// Share of `total` expressed in percent. An empty total yields `0.0`.
pub fn percent_of(value: f64, total: f64) -> f64 {
    if total == 0.0 || !total.is_finite() {
        0.0
    } else {
        value / total * 100.0
    }
}

/// Rounds half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    // Literal `-0.00` in the source data should print without a sign.
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.decimals$}")
}

/// `value` is already in percent units.
pub fn format_percent(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    format!("{}%", format_number(round_to(value, decimals), decimals))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_of_gender_split() {
        assert_eq!(format_percent(percent_of(96.0, 154.0), 1), "62.3%");
        assert_eq!(format_percent(percent_of(58.0, 154.0), 1), "37.7%");
    }

    #[test]
    fn integer_precision() {
        assert_eq!(format_percent(percent_of(66.0, 154.0), 0), "43%");
        assert_eq!(format_percent(percent_of(5.0, 154.0), 0), "3%");
    }

    #[test]
    fn empty_total_is_zero() {
        assert_eq!(percent_of(3.0, 0.0), 0.0);
    }

    #[test]
    fn negative_zero_prints_unsigned() {
        assert_eq!(format_number(-0.0, 2), "0.00");
        assert_eq!(format_number(-0.27, 2), "-0.27");
    }

    #[test]
    fn non_finite_values_use_placeholder() {
        assert_eq!(format_number(f64::NAN, 2), "—");
        assert_eq!(format_percent(f64::INFINITY, 1), "—");
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(0.125, 1), 0.1);
        assert_eq!(round_to(43.75, 1), 43.8);
    }
}
