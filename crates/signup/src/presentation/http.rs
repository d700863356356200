use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};

use super::errors::HttpError;
use crate::domain::Account;

/// Inbound request as seen by controllers: the decoded JSON object body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpRequest {
    pub body: Map<String, Value>,
}

impl HttpRequest {
    pub fn new(body: Map<String, Value>) -> Self {
        Self { body }
    }

    /// Body field, or `None` when it is absent or falsy (`null`, `false`, `0`, `""`).
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.get(name).filter(|value| is_truthy(value))
    }
}

impl From<Map<String, Value>> for HttpRequest {
    fn from(body: Map<String, Value>) -> Self {
        Self::new(body)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Payload carried by a [`HttpResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Account(Account),
    Error(HttpError),
}

impl From<Account> for ResponseBody {
    fn from(account: Account) -> Self {
        Self::Account(account)
    }
}

impl From<HttpError> for ResponseBody {
    fn from(error: HttpError) -> Self {
        Self::Error(error)
    }
}

/// Response envelope returned for every controller outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: ResponseBody,
}

impl HttpResponse {
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body)).into_response()
    }
}

pub fn bad_request(error: HttpError) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::BAD_REQUEST.as_u16(),
        body: ResponseBody::Error(error),
    }
}

pub fn server_error() -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        body: ResponseBody::Error(HttpError::ServerError),
    }
}

pub fn ok(data: impl Into<ResponseBody>) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::OK.as_u16(),
        body: data.into(),
    }
}
