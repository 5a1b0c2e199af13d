//! # Validation Utilities
//!
//! Input validation helpers for money movement requests.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate email format (basic check).
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.contains('@') && email.contains('.') {
        Ok(())
    } else {
        Err("Invalid email format".to_string())
    }
}

/// Validate a three-letter uppercase currency code (`USD`, `EUR`, `LBP`).
pub fn validate_currency(code: &str) -> Result<(), String> {
    if code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(format!("Invalid currency code: {:?}", code))
    }
}

/// Currencies the backend takes as whole units.
const WHOLE_UNIT_CURRENCIES: &[&str] = &["LBP"];

/// Format a positive amount of `currency` the way the backend expects it:
/// whole units for LBP, two fractional digits for everything else.
pub fn format_amount(amount: f64, currency: &str) -> Result<String, String> {
    if !WHOLE_UNIT_CURRENCIES.contains(&currency) {
        return format_decimal(amount);
    }
    check_positive(amount)?;
    let rounded = amount.round();
    if rounded < 1.0 {
        return Err("Amount must be at least 1".to_string());
    }
    Ok(format!("{:.0}", rounded))
}

/// Format a positive amount as a decimal string with exactly two fractional digits.
pub fn format_decimal(amount: f64) -> Result<String, String> {
    check_positive(amount)?;
    let formatted = format!("{:.2}", amount);
    if formatted == "0.00" {
        return Err("Amount must be at least 0.01".to_string());
    }
    Ok(formatted)
}

fn check_positive(amount: f64) -> Result<(), String> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err("Amount must be greater than 0".to_string());
    }
    Ok(())
}
