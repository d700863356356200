//! Transport-neutral request handling: envelopes, client-facing error values, the
//! capability traits controllers consume, and the sign-up controller itself.

pub mod controllers;
pub mod errors;
pub mod http;
pub mod protocols;
pub mod router;

#[cfg(test)]
mod tests;

pub use controllers::SignUpController;
pub use errors::HttpError;
pub use http::{bad_request, ok, server_error, HttpRequest, HttpResponse, ResponseBody};
pub use protocols::{Controller, EmailValidationError, EmailValidator};
pub use router::signup_router;
