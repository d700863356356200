use crate::infra::{build_controller, InMemoryAccountStore};
use clap::Args;
use serde_json::{Map, Value};
use signup::error::AppError;
use signup::presentation::{Controller, HttpRequest};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct RegisterArgs {
    /// Display name for the new account
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Email address to validate and register
    #[arg(long)]
    pub(crate) email: Option<String>,
    /// Account password
    #[arg(long)]
    pub(crate) password: Option<String>,
    /// Must match --password
    #[arg(long)]
    pub(crate) password_confirmation: Option<String>,
}

impl RegisterArgs {
    // Omitted flags stay out of the body so the controller reports them as missing.
    fn into_request(self) -> HttpRequest {
        let mut body = Map::new();
        let fields = [
            ("name", self.name),
            ("email", self.email),
            ("password", self.password),
            ("passwordConfirmation", self.password_confirmation),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                body.insert(field.to_string(), Value::String(value));
            }
        }
        HttpRequest::new(body)
    }
}

pub(crate) async fn run_register(args: RegisterArgs) -> Result<(), AppError> {
    let controller = build_controller(Arc::new(InMemoryAccountStore::default()));
    let response = controller.handle(args.into_request()).await;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
