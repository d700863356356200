//! Account model and the use cases the presentation layer depends on.
//!
//! Nothing in here knows about HTTP. Implementations of [`AddAccount`] decide where
//! accounts live; the sign-up controller only sees the trait.

pub mod account;
pub mod add_account;

pub use account::Account;
pub use add_account::{AddAccount, AddAccountError, AddAccountInput};
