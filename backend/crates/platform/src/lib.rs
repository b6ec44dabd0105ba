//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (random tokens, Base64, constant-time compare)
//! - `Authorization: Bearer` header parsing

pub mod bearer;
pub mod crypto;
