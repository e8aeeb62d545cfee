/// Decimal places shown for a result with a fractional part
pub const DEFAULT_DECIMALS: usize = 2;

/// Formats a result for the display: whole numbers without decimals,
/// everything else with [`DEFAULT_DECIMALS`] places
pub fn format_result(result: f64) -> String {
    format_with_decimals(result, DEFAULT_DECIMALS)
}

/// Same as [`format_result`] but with the number of decimal places for
/// fractional values given explicitly
pub fn format_with_decimals(result: f64, decimals: usize) -> String {
    if result % 1.0 == 0.0 {
        format!("{:.0}", result)
    } else {
        format!("{:.*}", decimals, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole() {
        assert_eq!(format_result(4.0), "4");
        assert_eq!(format_result(0.0), "0");
        assert_eq!(format_result(-12.0), "-12");
        assert_eq!(format_result(1e6), "1000000");
    }

    #[test]
    fn test_fraction() {
        assert_eq!(format_result(4.5), "4.50");
        assert_eq!(format_result(-0.25), "-0.25");
        assert_eq!(format_result(1.0 / 3.0), "0.33");
        assert_eq!(format_result(2.0 / 3.0), "0.67");
    }

    #[test]
    fn test_decimals() {
        assert_eq!(format_with_decimals(4.75, 1), "4.8");
        assert_eq!(format_with_decimals(4.5, 4), "4.5000");
        assert_eq!(format_with_decimals(7.0, 4), "7");
    }
}
