//! Utility functions shared across layers.
//!
//! - [`email`] - Identifier normalization and format checks
//! - [`secret`] - Argon2 secret hashing and verification
//! - [`session_key`] - Random session key generation

pub mod email;
pub mod secret;
pub mod session_key;
