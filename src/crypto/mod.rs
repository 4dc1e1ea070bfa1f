//! Cryptographic primitives for FileSeal.
//!
//! This module provides:
//! - PBKDF2-HMAC password-based key derivation (`kdf`)
//! - AES-256-GCM sealing and opening with an explicit nonce (`aead`)

pub mod aead;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{derive_key, generate_salt, DerivedKey, ...};
pub use aead::{generate_nonce, NONCE_LEN, TAG_LEN};
pub use kdf::{
    derive_key, derive_key_with_params, generate_salt, DerivedKey, KdfHash, KdfParams, KEY_LEN,
    SALT_LEN,
};
