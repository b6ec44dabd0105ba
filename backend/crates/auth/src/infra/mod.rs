//! Infrastructure Layer
//!
//! Session storage and credential loading.

pub mod credentials;
pub mod memory;

pub use credentials::{load_credentials, parse_credentials};
pub use memory::InMemorySessionRegistry;
