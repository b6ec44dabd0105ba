//! Domain Entities

pub mod credential;
pub mod session_token;

pub use credential::{Credential, CredentialStore};
pub use session_token::SessionToken;
