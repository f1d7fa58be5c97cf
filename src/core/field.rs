//! Field format validation used by the services before `add`

use crate::core::error::FieldValidationError;
use regex::Regex;
use std::sync::OnceLock;

/// Field format validators
#[derive(Debug, Clone)]
pub enum FieldFormat {
    Email,
    Username,
    Custom(Regex),
}

impl FieldFormat {
    /// Validate a string against this format
    pub fn validate(&self, value: &str) -> bool {
        match self {
            FieldFormat::Email => Self::is_valid_email(value),
            FieldFormat::Username => Self::is_valid_username(value),
            FieldFormat::Custom(regex) => regex.is_match(value),
        }
    }

    fn is_valid_email(email: &str) -> bool {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = EMAIL_REGEX.get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
                .expect("email pattern is valid")
        });
        regex.is_match(email)
    }

    fn is_valid_username(username: &str) -> bool {
        static USERNAME_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = USERNAME_REGEX.get_or_init(|| {
            Regex::new(r"^[A-Za-z0-9_.-]+$").expect("username pattern is valid")
        });
        regex.is_match(username)
    }
}

/// Collects field errors for one input, then hands them over as a single list
#[derive(Debug, Default)]
pub struct FieldChecks {
    errors: Vec<FieldValidationError>,
}

impl FieldChecks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value must be present and not blank
    pub fn required(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.errors
                .push(FieldValidationError::new(field, "must not be empty"));
        }
        self
    }

    /// Value must not exceed `max` characters
    pub fn max_length(&mut self, field: &str, value: &str, max: usize) -> &mut Self {
        let len = value.chars().count();
        if len > max {
            self.errors.push(FieldValidationError::new(
                field,
                format!("must not exceed {} characters (currently: {})", max, len),
            ));
        }
        self
    }

    /// Non-empty value must match `format`
    pub fn format(&mut self, field: &str, value: &str, format: &FieldFormat) -> &mut Self {
        if !value.is_empty() && !format.validate(value) {
            self.errors
                .push(FieldValidationError::new(field, "has an invalid format"));
        }
        self
    }

    pub fn into_errors(self) -> Vec<FieldValidationError> {
        self.errors
    }
}
