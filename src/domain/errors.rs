//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// The display text is shown to the user verbatim after an `Error: ` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty or whitespace only.
    EmptyName,

    /// The provided phone number is not exactly 10 digits.
    InvalidPhone(String),

    /// The provided birthday does not match `DD.MM.YYYY`.
    InvalidDateFormat(String),

    /// The provided birthday lies in the future.
    FutureBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Please enter name!"),
            Self::InvalidPhone(_) => write!(f, "Phone number must be 10 digits long."),
            Self::InvalidDateFormat(_) => {
                write!(f, "Incorrect date format. Please enter as DD.MM.YYYY.")
            }
            Self::FutureBirthday(_) => write!(f, "Birthday should be in the past."),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(ValidationError::EmptyName.to_string(), "Please enter name!");
        assert_eq!(
            ValidationError::InvalidPhone("123".to_string()).to_string(),
            "Phone number must be 10 digits long."
        );
        assert_eq!(
            ValidationError::InvalidDateFormat("2000-01-01".to_string()).to_string(),
            "Incorrect date format. Please enter as DD.MM.YYYY."
        );
        assert_eq!(
            ValidationError::FutureBirthday("01.01.3000".to_string()).to_string(),
            "Birthday should be in the past."
        );
    }
}
