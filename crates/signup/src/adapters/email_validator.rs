use validator::ValidateEmail;

use crate::presentation::protocols::{EmailValidationError, EmailValidator};

/// Email format check backed by the `validator` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailValidatorAdapter;

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> Result<bool, EmailValidationError> {
        Ok(email.validate_email())
    }
}
