//! AES-256-GCM authenticated encryption.
//!
//! Unlike a self-framing blob, the nonce here is supplied by the caller:
//! the container header stores it, so `seal` returns only
//! `ciphertext || 16-byte auth tag`.  No associated data is bound.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Nonce};

use crate::crypto::kdf::DerivedKey;
use crate::errors::{AuthError, FileSealError, Result};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag appended to every ciphertext.
pub const TAG_LEN: usize = 16;

/// Encrypt and authenticate `plaintext` under `key` and `nonce`.
pub fn seal(key: &DerivedKey, nonce: &[u8; NONCE_LEN], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| FileSealError::EncryptionFailed(format!("invalid key length: {e}")))?;

    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|e| FileSealError::EncryptionFailed(format!("encryption error: {e}")))
}

/// Verify and decrypt `ciphertext_with_tag`.
///
/// Every failure, including a ciphertext too short to hold a tag,
/// collapses into the same `AuthError`.
pub fn open(
    key: &DerivedKey,
    nonce: &[u8; NONCE_LEN],
    ciphertext_with_tag: &[u8],
) -> std::result::Result<Vec<u8>, AuthError> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| AuthError)?;

    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext_with_tag)
        .map_err(|_| AuthError)
}

/// Generate a cryptographically random 12-byte nonce.
pub fn generate_nonce() -> [u8; NONCE_LEN] {
    let mut nonce = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce);
    nonce
}
