use super::Monetary;
use anyhow::Result;
use rust_decimal::Decimal;
use std::str::FromStr;

#[test]
fn test_monetary_successfully_parses_valid_strings() -> Result<()> {
    let test_cases = vec![
        ("1.0", "1.00"),
        ("1.1234", "1.12"),
        ("0.005", "0.01"),
        ("-1.5", "-1.50"),
        ("  1.0  ", "1.00"),
        ("100", "100.00"),
        ("500.01", "500.01"),
    ];

    for (input_string, expected_output) in test_cases {
        assert_eq!(Monetary::from_str(input_string)?.to_string(), expected_output);
    }

    Ok(())
}

#[test]
fn test_monetary_fails_to_parse_invalid_strings() {
    assert!(Monetary::from_str("1.12345").is_err());
    assert!(Monetary::from_str("abc").is_err());
    assert!(Monetary::from_str("1.2.3").is_err());
    assert!(Monetary::from_str("").is_err());
    assert!(Monetary::from_str("   ").is_err());
    assert!(Monetary::from_str("$10").is_err());
}

#[test]
fn test_monetary_sign_checks() -> Result<()> {
    assert!(Monetary::from_str("0.01")?.is_positive());
    assert!(!Monetary::ZERO.is_positive());
    assert!(!Monetary::ZERO.is_negative());
    assert!(Monetary::from_str("-0.01")?.is_negative());

    Ok(())
}

#[test]
fn test_monetary_checked_arithmetic() -> Result<()> {
    let value = Monetary::from_str("1.5")?;
    let sum = value.checked_add(Monetary::from_str("2.5")?);

    assert_eq!(sum, Some(Monetary::from_str("4")?));
    assert_eq!(value.checked_sub(Monetary::from_str("5")?), Some(Monetary::from_str("-3.5")?));

    let interest = Monetary::from_str("100.00")?.checked_mul_rate(Decimal::new(2, 2));

    assert_eq!(interest, Some(Monetary::from_str("2")?));

    Ok(())
}

#[test]
fn test_monetary_reports_overflow_instead_of_wrapping() -> Result<()> {
    let max = Monetary::from(Decimal::MAX);

    assert!(max.checked_add(Monetary::from_str("1")?).is_none());
    assert!(max.checked_mul_rate(Decimal::new(2, 0)).is_none());

    Ok(())
}

#[test]
fn test_monetary_keeps_sign_when_rounding_to_zero() -> Result<()> {
    assert_eq!(Monetary::from_str("-0.0009")?.to_string(), "-0.00");
    assert_eq!(Monetary::from_str("-0.004")?.to_string(), "-0.00");
    assert_eq!(Monetary::from_str("0.0009")?.to_string(), "0.00");
    assert_eq!(Monetary::from_str("-500")?.to_string(), "-500.00");

    Ok(())
}

#[test]
fn test_monetary_accepts_trailing_zeros_beyond_four_places() -> Result<()> {
    assert_eq!(Monetary::from_str("1.00000")?, Monetary::from_str("1")?);
    assert_eq!(Monetary::from_str("2.500000")?.to_string(), "2.50");
    assert!(Monetary::from_str("1.00001").is_err());

    Ok(())
}
