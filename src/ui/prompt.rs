//! Interactive prompt wrappers around dialoguer
//!
//! Free-text inputs re-prompt inline until the validator accepts, so bad
//! input never surfaces as an error further up.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use rust_decimal::Decimal;

use crate::error::{Result, TrackerError};

/// Single-choice list. Returns `Ok(None)` without prompting when there is
/// nothing to choose from, and when the user cancels the prompt.
pub fn choose(display: &str, labels: &[String]) -> Result<Option<usize>> {
    if labels.is_empty() {
        return Ok(None);
    }
    let idx = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(display)
        .items(labels)
        .default(0)
        .interact_opt()?;
    Ok(idx)
}

/// Main menu prompt; the menu is never empty, so cancellation maps to the
/// last entry (the quit sentinel).
pub fn main_menu(labels: &[&str]) -> Result<usize> {
    let idx = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("What would you like to do?")
        .items(labels)
        .default(0)
        .interact_opt()?;
    Ok(idx.unwrap_or(labels.len() - 1))
}

/// Free-text input, rejecting blank answers.
pub fn text(display: &str) -> Result<String> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(display)
        .validate_with(|s: &String| validate_present(s))
        .interact_text()?;
    Ok(value.trim().to_string())
}

/// Numeric salary input, re-prompting until it parses as a positive amount.
pub fn salary(display: &str) -> Result<Decimal> {
    let raw: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(display)
        .validate_with(|s: &String| parse_salary(s).map(|_| ()))
        .interact_text()?;
    parse_salary(&raw).map_err(TrackerError::Validation)
}

pub fn validate_present(s: &str) -> std::result::Result<(), String> {
    if s.trim().is_empty() {
        Err("a value is required".into())
    } else {
        Ok(())
    }
}

pub fn parse_salary(s: &str) -> std::result::Result<Decimal, String> {
    let value: Decimal = s
        .trim()
        .parse()
        .map_err(|_| "enter a numeric amount".to_string())?;
    if value <= Decimal::ZERO {
        return Err("salary must be positive".into());
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choose_aborts_gracefully_on_empty_list() {
        // Must return before any terminal interaction happens.
        assert!(matches!(choose("Select a Role", &[]), Ok(None)));
    }

    #[test]
    fn blank_input_is_rejected() {
        assert!(validate_present("   ").is_err());
        assert!(validate_present("Ann").is_ok());
    }

    #[test]
    fn salary_must_be_a_positive_number() {
        assert!(parse_salary("fifty").is_err());
        assert!(parse_salary("-1").is_err());
        assert!(parse_salary("0").is_err());
        assert_eq!(parse_salary(" 50000 "), Ok(Decimal::from(50000)));
        assert_eq!(parse_salary("50000.50"), Ok(Decimal::new(5000050, 2)));
    }
}
