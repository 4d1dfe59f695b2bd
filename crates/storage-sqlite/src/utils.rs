//! Shared helpers for database model conversions.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a stored decimal string, with a fallback through f64 for
/// scientific notation. Unparseable values log and fall back to zero
/// rather than poisoning a whole result set.
pub fn parse_decimal(value_str: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value_str) {
        Ok(d) => d,
        Err(e_decimal) => match f64::from_str(value_str) {
            Ok(f_val) => Decimal::from_f64(f_val).unwrap_or_else(|| {
                log::error!(
                    "Failed to convert {} '{}' (parsed as f64: {}) to Decimal.",
                    field_name,
                    value_str,
                    f_val
                );
                Decimal::ZERO
            }),
            Err(e_f64) => {
                log::error!(
                    "Failed to parse {} '{}': as Decimal (err: {}), and as f64 (err: {}). Falling back to ZERO.",
                    field_name, value_str, e_decimal, e_f64
                );
                Decimal::ZERO
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::parse_decimal;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_parse_decimal_plain() {
        assert_eq!(
            parse_decimal("42.50", "amount"),
            Decimal::from_str("42.50").unwrap()
        );
    }

    #[test]
    fn test_parse_decimal_scientific_fallback() {
        assert_eq!(
            parse_decimal("1e2", "amount"),
            Decimal::from_str("100").unwrap()
        );
    }

    #[test]
    fn test_parse_decimal_garbage_is_zero() {
        assert_eq!(parse_decimal("not-a-number", "amount"), Decimal::ZERO);
    }
}
