pub mod signup;

pub use signup::{SignUpController, REQUIRED_FIELDS};
