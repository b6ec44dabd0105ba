//! YAML Credential Source
//!
//! Reads the static user list:
//!
//! ```yaml
//! users:
//!   - username: user1
//!     password: "12345"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::domain::entity::{Credential, CredentialStore};
use crate::error::{AuthError, AuthResult};

#[derive(Debug, Deserialize)]
struct CredentialsFile {
    #[serde(default)]
    users: Vec<Credential>,
}

/// Parse a credential document
pub fn parse_credentials(yaml: &str) -> AuthResult<CredentialStore> {
    parse_with_origin(yaml, "<inline>")
}

/// Read and parse the credential file at `path`
///
/// Any failure here is meant to be fatal at startup.
pub fn load_credentials(path: impl AsRef<Path>) -> AuthResult<CredentialStore> {
    let path = path.as_ref();
    let origin = path.display().to_string();

    let yaml = std::fs::read_to_string(path).map_err(|e| AuthError::CredentialLoad {
        path: origin.clone(),
        reason: e.to_string(),
    })?;

    let store = parse_with_origin(&yaml, &origin)?;

    tracing::info!(path = %origin, users = store.len(), "Loaded credentials");
    Ok(store)
}

fn parse_with_origin(yaml: &str, origin: &str) -> AuthResult<CredentialStore> {
    let file: CredentialsFile =
        serde_yaml::from_str(yaml).map_err(|e| AuthError::CredentialLoad {
            path: origin.to_string(),
            reason: e.to_string(),
        })?;

    if file.users.is_empty() {
        tracing::warn!(path = %origin, "Credential source lists no users; every login will fail");
    }

    Ok(CredentialStore::new(file.users))
}
