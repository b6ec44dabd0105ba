//! API DTOs (Data Transfer Objects)

use serde::Deserialize;

/// Create/update request body
///
/// Missing fields decode as empty strings and are rejected by validation.
#[derive(Debug, Clone, Deserialize)]
pub struct HeroRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub difficulty: String,
}
