use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::{json, Map, Value};

use crate::domain::{Account, AddAccount, AddAccountError, AddAccountInput};
use crate::presentation::controllers::SignUpController;
use crate::presentation::http::HttpRequest;
use crate::presentation::protocols::{EmailValidationError, EmailValidator};

/// Validator double returning a fixed verdict and recording every email it sees.
pub(super) struct EmailValidatorStub {
    verdict: Verdict,
    calls: Mutex<Vec<String>>,
}

enum Verdict {
    Valid(bool),
    Unavailable,
}

impl EmailValidatorStub {
    pub(super) fn accepting() -> Self {
        Self::with(Verdict::Valid(true))
    }

    pub(super) fn rejecting() -> Self {
        Self::with(Verdict::Valid(false))
    }

    pub(super) fn failing() -> Self {
        Self::with(Verdict::Unavailable)
    }

    fn with(verdict: Verdict) -> Self {
        Self {
            verdict,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("validator mutex poisoned").clone()
    }
}

impl EmailValidator for EmailValidatorStub {
    fn is_valid(&self, email: &str) -> Result<bool, EmailValidationError> {
        self.calls
            .lock()
            .expect("validator mutex poisoned")
            .push(email.to_string());
        match self.verdict {
            Verdict::Valid(valid) => Ok(valid),
            Verdict::Unavailable => Err(EmailValidationError::Unavailable(
                "validator offline".to_string(),
            )),
        }
    }
}

/// Account creation double echoing its input back with a fixed id.
#[derive(Default)]
pub(super) struct AddAccountStub {
    inputs: Mutex<Vec<AddAccountInput>>,
}

impl AddAccountStub {
    pub(super) fn inputs(&self) -> Vec<AddAccountInput> {
        self.inputs.lock().expect("add account mutex poisoned").clone()
    }
}

#[async_trait]
impl AddAccount for AddAccountStub {
    async fn add(&self, input: AddAccountInput) -> Result<Account, AddAccountError> {
        self.inputs
            .lock()
            .expect("add account mutex poisoned")
            .push(input.clone());
        Ok(Account {
            id: "valid_id".to_string(),
            name: input.name,
            email: input.email,
            password: input.password,
        })
    }
}

pub(super) struct UnavailableAccountStore;

#[async_trait]
impl AddAccount for UnavailableAccountStore {
    async fn add(&self, _input: AddAccountInput) -> Result<Account, AddAccountError> {
        Err(AddAccountError::Unavailable("database offline".to_string()))
    }
}

pub(super) type StubController = SignUpController<EmailValidatorStub, AddAccountStub>;

pub(super) fn build_controller() -> (StubController, Arc<EmailValidatorStub>, Arc<AddAccountStub>) {
    build_controller_with(EmailValidatorStub::accepting())
}

pub(super) fn build_controller_with(
    validator: EmailValidatorStub,
) -> (StubController, Arc<EmailValidatorStub>, Arc<AddAccountStub>) {
    let validator = Arc::new(validator);
    let accounts = Arc::new(AddAccountStub::default());
    let controller = SignUpController::new(validator.clone(), accounts.clone());
    (controller, validator, accounts)
}

pub(super) fn sign_up_body() -> Value {
    json!({
        "name": "any_name",
        "email": "any_email@mail.com",
        "password": "any_password",
        "passwordConfirmation": "any_password",
    })
}

pub(super) fn request(body: Value) -> HttpRequest {
    match body {
        Value::Object(map) => HttpRequest::new(map),
        other => panic!("expected object body, got {other}"),
    }
}

pub(super) fn request_without(field: &str) -> HttpRequest {
    let mut body = sign_up_body();
    body.as_object_mut()
        .expect("object body")
        .remove(field);
    request(body)
}

pub(super) fn request_with(field: &str, value: Value) -> HttpRequest {
    let mut body = sign_up_body();
    body.as_object_mut()
        .expect("object body")
        .insert(field.to_string(), value);
    request(body)
}

pub(super) fn empty_request() -> HttpRequest {
    HttpRequest::new(Map::new())
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
