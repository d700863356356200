use async_trait::async_trait;
use metrics_exporter_prometheus::PrometheusHandle;
use signup::adapters::EmailValidatorAdapter;
use signup::domain::{Account, AddAccount, AddAccountError, AddAccountInput};
use signup::presentation::SignUpController;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

pub(crate) type ServiceController = SignUpController<EmailValidatorAdapter, InMemoryAccountStore>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local account storage keyed by email; ids are issued sequentially per store.
#[derive(Default)]
pub(crate) struct InMemoryAccountStore {
    accounts: Mutex<HashMap<String, Account>>,
    sequence: AtomicU64,
}

impl InMemoryAccountStore {
    fn next_account_id(&self) -> String {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        format!("acct-{id:06}")
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.accounts
            .lock()
            .map(|accounts| accounts.len())
            .unwrap_or_default()
    }
}

#[async_trait]
impl AddAccount for InMemoryAccountStore {
    async fn add(&self, input: AddAccountInput) -> Result<Account, AddAccountError> {
        let mut guard = self
            .accounts
            .lock()
            .map_err(|_| AddAccountError::Unavailable("account store lock poisoned".to_string()))?;
        if guard.contains_key(&input.email) {
            return Err(AddAccountError::Rejected(format!(
                "{} is already registered",
                input.email
            )));
        }

        let account = Account {
            id: self.next_account_id(),
            name: input.name,
            email: input.email,
            password: input.password,
        };
        guard.insert(account.email.clone(), account.clone());
        Ok(account)
    }
}

pub(crate) fn build_controller(store: Arc<InMemoryAccountStore>) -> ServiceController {
    SignUpController::new(Arc::new(EmailValidatorAdapter), store)
}
