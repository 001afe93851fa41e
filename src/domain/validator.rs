//! Country-aware phone number normalization and validation.
//!
//! [`validate`] is a pure function of the raw input, the selected country and
//! that country's optional [`CountryRule`]. Checks run in a fixed order and
//! the first failing check decides the reason:
//!
//! 1. Blank input → [`InvalidReason::EmptyInput`]
//! 2. No digits after stripping everything else → [`InvalidReason::NoDigits`]
//! 3. A pasted dial code is dropped when more than four digits follow it
//! 4. One leading trunk `0` is dropped
//! 5. Rule length check, then rule prefix check; without a rule the generic
//!    7 to 15 digit bounds apply
//!
//! Reasons carry no display text. Wording belongs to the caller, see
//! [`crate::messages::describe`].

use crate::domain::entities::{Country, CountryRule};

/// Generic lower bound used when a country has no rule.
pub const FALLBACK_MIN_DIGITS: usize = 7;
/// Generic upper bound used when a country has no rule.
pub const FALLBACK_MAX_DIGITS: usize = 15;

/// A leading dial code is treated as pasted only if more digits than this follow it.
const PASTED_DIAL_CODE_MIN_REMAINDER: usize = 4;

/// National trunk prefix dropped from the front of the number.
pub const TRUNK_PREFIX: char = '0';

/// Why a number was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidReason {
    #[error("phone number is empty")]
    EmptyInput,

    #[error("phone number contains no digits")]
    NoDigits,

    /// Digit count outside the country rule bounds (inclusive).
    #[error("phone number must have {} digits", format_length(*min, *max))]
    LengthOutOfRange { min: usize, max: usize },

    /// Fewer than [`FALLBACK_MIN_DIGITS`] digits and no country rule.
    #[error("phone number is too short")]
    TooShort,

    /// More than [`FALLBACK_MAX_DIGITS`] digits and no country rule.
    #[error("phone number is too long")]
    TooLong,

    /// Number does not start with any accepted prefix.
    ///
    /// `prefixes` holds the rule prefixes as configured, without the trunk zero.
    #[error("phone number must start with {}", display_prefixes(prefixes).join(" or "))]
    PrefixMismatch { prefixes: Vec<String> },
}

/// Outcome of a single validation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub reason: Option<InvalidReason>,
    /// Digits after dial-code and trunk-zero stripping. Empty when no digits
    /// remain.
    pub normalized_number: String,
}

impl ValidationResult {
    fn accepted(normalized_number: String) -> Self {
        Self {
            valid: true,
            reason: None,
            normalized_number,
        }
    }

    fn rejected(reason: InvalidReason, normalized_number: String) -> Self {
        Self {
            valid: false,
            reason: Some(reason),
            normalized_number,
        }
    }

    /// Converts into the normalized number or the rejection reason.
    pub fn into_result(self) -> Result<String, InvalidReason> {
        match self.reason {
            None => Ok(self.normalized_number),
            Some(reason) => Err(reason),
        }
    }
}

/// Validates `raw_input` for `country` against its optional `rule`.
///
/// # Examples
///
/// ```ignore
/// // Egypt, rule {min: 10, max: 10, startsWith: ["10", "11", "12", "15"]}
/// let result = validate("01012345678", &egypt, Some(&rule));
/// assert!(result.valid);
/// assert_eq!(result.normalized_number, "1012345678");
///
/// let result = validate("20 1012345678", &egypt, Some(&rule));
/// assert_eq!(result.normalized_number, "1012345678");
/// ```
pub fn validate(raw_input: &str, country: &Country, rule: Option<&CountryRule>) -> ValidationResult {
    if raw_input.trim().is_empty() {
        return ValidationResult::rejected(InvalidReason::EmptyInput, String::new());
    }

    let digits = extract_digits(raw_input);
    if digits.is_empty() {
        return ValidationResult::rejected(InvalidReason::NoDigits, digits);
    }
    let digits = strip_national_prefixes(digits, country.dial_digits());

    let outcome = match rule {
        Some(rule) => check_rule(&digits, rule),
        None => check_generic(&digits),
    };

    match outcome {
        Ok(()) => ValidationResult::accepted(digits),
        Err(reason) => {
            tracing::debug!(country = %country.code, %reason, "phone number rejected");
            ValidationResult::rejected(reason, digits)
        }
    }
}

fn extract_digits(raw_input: &str) -> String {
    raw_input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Drops a pasted dial code, then one trunk zero.
///
/// `dial_digits` is the dial code without its `+`.
fn strip_national_prefixes(mut digits: String, dial_digits: &str) -> String {
    if !dial_digits.is_empty()
        && let Some(remainder) = digits.strip_prefix(dial_digits)
        && remainder.len() > PASTED_DIAL_CODE_MIN_REMAINDER
    {
        digits = remainder.to_string();
    }

    if digits.starts_with(TRUNK_PREFIX) {
        digits.remove(0);
    }

    digits
}

fn check_rule(digits: &str, rule: &CountryRule) -> Result<(), InvalidReason> {
    if digits.len() < rule.min || digits.len() > rule.max {
        return Err(InvalidReason::LengthOutOfRange {
            min: rule.min,
            max: rule.max,
        });
    }

    let prefixes = rule.prefixes();
    if !prefixes.is_empty() && !prefixes.iter().any(|p| digits.starts_with(p.as_str())) {
        return Err(InvalidReason::PrefixMismatch {
            prefixes: prefixes.to_vec(),
        });
    }

    Ok(())
}

fn check_generic(digits: &str) -> Result<(), InvalidReason> {
    if digits.len() < FALLBACK_MIN_DIGITS {
        Err(InvalidReason::TooShort)
    } else if digits.len() > FALLBACK_MAX_DIGITS {
        Err(InvalidReason::TooLong)
    } else {
        Ok(())
    }
}

/// Formats an expected length as `10` or `9-10`.
pub fn format_length(min: usize, max: usize) -> String {
    if min == max {
        min.to_string()
    } else {
        format!("{min}-{max}")
    }
}

/// Rule prefixes as the user dials them nationally, with the trunk zero restored.
pub fn display_prefixes(prefixes: &[String]) -> Vec<String> {
    prefixes
        .iter()
        .map(|p| format!("{TRUNK_PREFIX}{p}"))
        .collect()
}
