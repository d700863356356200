use async_trait::async_trait;

use super::http::{HttpRequest, HttpResponse};

pub use crate::domain::{Account, AddAccount, AddAccountError, AddAccountInput};

/// Request handler that always answers with an envelope.
#[async_trait]
pub trait Controller: Send + Sync {
    async fn handle(&self, request: HttpRequest) -> HttpResponse;
}

/// Email format check consumed by the sign-up controller.
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> Result<bool, EmailValidationError>;
}

/// Raised when the validator itself cannot answer.
#[derive(Debug, thiserror::Error)]
pub enum EmailValidationError {
    #[error("email validator unavailable: {0}")]
    Unavailable(String),
}
