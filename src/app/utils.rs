use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{Result, TrackerError};

pub fn parse_date(field: &str, format: &str, line: usize) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(field.trim(), format)
        .map_err(|e| TrackerError::parse(line, format!("invalid date '{}': {}", field, e)))
}

pub fn parse_decimal(field: &str, field_name: &str, line: usize) -> Result<Decimal> {
    field.trim().parse::<Decimal>().map_err(|e| {
        TrackerError::parse(line, format!("invalid {} '{}': {}", field_name, field, e))
    })
}

pub fn non_negative(value: Decimal, field_name: &str, line: usize) -> Result<Decimal> {
    if value < Decimal::ZERO {
        return Err(TrackerError::parse(
            line,
            format!("{} must not be negative, got {}", field_name, value),
        ));
    }
    Ok(value)
}

/// Parses a number written with `.` thousand separators and a `,` decimal
/// mark, e.g. `5.000,50`.
pub fn parse_turkish_decimal(field: &str, field_name: &str, line: usize) -> Result<Decimal> {
    let normalized = field.trim().replace('.', "").replacen(',', ".", 1);
    parse_decimal(&normalized, field_name, line)
}

pub fn parse_currency(value: &str) -> std::result::Result<String, String> {
    let code = value.trim().to_uppercase();
    if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code)
    } else {
        Err(format!("'{}' is not a three letter currency code", value))
    }
}
