//! Concrete implementations of the capabilities the presentation layer consumes.

pub mod email_validator;

pub use email_validator::EmailValidatorAdapter;
