use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::domain::{Account, AddAccount, AddAccountError, AddAccountInput};
use crate::presentation::errors::HttpError;
use crate::presentation::http::{bad_request, ok, server_error, HttpRequest, HttpResponse};
use crate::presentation::protocols::{Controller, EmailValidationError, EmailValidator};

/// Body fields a sign-up request must carry, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "email", "password", "passwordConfirmation"];

/// Controller validating sign-up requests before handing them to account creation.
///
/// Collaborators are fixed at construction and shared by every request, so a single
/// instance can serve concurrent calls.
pub struct SignUpController<V, A> {
    email_validator: Arc<V>,
    add_account: Arc<A>,
}

impl<V, A> Clone for SignUpController<V, A> {
    fn clone(&self) -> Self {
        Self {
            email_validator: Arc::clone(&self.email_validator),
            add_account: Arc::clone(&self.add_account),
        }
    }
}

enum SignUpFailure {
    Rejected(HttpError),
    EmailValidation(EmailValidationError),
    AddAccount(AddAccountError),
}

impl From<HttpError> for SignUpFailure {
    fn from(value: HttpError) -> Self {
        Self::Rejected(value)
    }
}

impl From<EmailValidationError> for SignUpFailure {
    fn from(value: EmailValidationError) -> Self {
        Self::EmailValidation(value)
    }
}

impl From<AddAccountError> for SignUpFailure {
    fn from(value: AddAccountError) -> Self {
        Self::AddAccount(value)
    }
}

struct SignUpFields<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

impl<V, A> SignUpController<V, A>
where
    V: EmailValidator + 'static,
    A: AddAccount + 'static,
{
    pub fn new(email_validator: Arc<V>, add_account: Arc<A>) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }

    async fn sign_up(&self, request: &HttpRequest) -> Result<Account, SignUpFailure> {
        ensure_required_fields(request)?;

        // Raw values are compared so a mismatch is reported before any type check.
        if request.field("password") != request.field("passwordConfirmation") {
            return Err(HttpError::invalid_param("passwordConfirmation").into());
        }

        let fields = text_fields(request)?;

        if !self.email_validator.is_valid(fields.email)? {
            return Err(HttpError::invalid_param("email").into());
        }

        let input = AddAccountInput {
            name: fields.name.to_string(),
            email: fields.email.to_string(),
            password: fields.password.to_string(),
        };
        let account = self.add_account.add(input).await?;
        Ok(account)
    }
}

#[async_trait]
impl<V, A> Controller for SignUpController<V, A>
where
    V: EmailValidator + 'static,
    A: AddAccount + 'static,
{
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        match self.sign_up(&request).await {
            Ok(account) => {
                info!(account_id = %account.id, "account created");
                ok(account)
            }
            Err(SignUpFailure::Rejected(rejection)) => {
                debug!(%rejection, "sign-up request rejected");
                bad_request(rejection)
            }
            Err(SignUpFailure::EmailValidation(err)) => {
                error!(error = %err, "email validation failed during sign-up");
                server_error()
            }
            Err(SignUpFailure::AddAccount(err)) => {
                error!(error = %err, "account creation failed during sign-up");
                server_error()
            }
        }
    }
}

fn ensure_required_fields(request: &HttpRequest) -> Result<(), HttpError> {
    match REQUIRED_FIELDS
        .iter()
        .find(|field| request.field(field).is_none())
    {
        Some(missing) => Err(HttpError::missing_param(*missing)),
        None => Ok(()),
    }
}

fn text_fields(request: &HttpRequest) -> Result<SignUpFields<'_>, HttpError> {
    Ok(SignUpFields {
        name: text_field(request, "name")?,
        email: text_field(request, "email")?,
        password: text_field(request, "password")?,
    })
}

// Present but non-string values (numbers, objects, `true`) are malformed, not missing.
fn text_field<'a>(request: &'a HttpRequest, field: &str) -> Result<&'a str, HttpError> {
    request
        .field(field)
        .and_then(Value::as_str)
        .ok_or_else(|| HttpError::invalid_param(field))
}
