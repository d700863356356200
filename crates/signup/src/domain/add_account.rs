use async_trait::async_trait;
use serde::Serialize;

use super::account::Account;

/// Fields handed to account creation. The password confirmation never reaches this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddAccountInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Account creation use case so the controller can be exercised without storage.
#[async_trait]
pub trait AddAccount: Send + Sync {
    async fn add(&self, input: AddAccountInput) -> Result<Account, AddAccountError>;
}

/// Error raised while creating an account.
#[derive(Debug, thiserror::Error)]
pub enum AddAccountError {
    #[error("account store unavailable: {0}")]
    Unavailable(String),
    #[error("account rejected by store: {0}")]
    Rejected(String),
}
