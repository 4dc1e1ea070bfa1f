//! Password-based key derivation using PBKDF2-HMAC.
//!
//! The work factor and hash are part of the container format: they are
//! not stored in the file, so every version-1 container is derived with
//! exactly `KdfParams::for_version(1)`.  The struct exists so tests and
//! future format versions can pick different parameters without touching
//! call sites.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::OsRng;
use hmac::Hmac;
use sha2::{Sha256, Sha512};
use zeroize::Zeroize;

use crate::errors::{FileSealError, PolicyError, Result};

/// Length of the salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// PBKDF2 iteration count for format version 1.
pub const V1_ITERATIONS: u32 = 250_000;

/// HMAC hash used as the PBKDF2 pseudo-random function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KdfHash {
    Sha256,
    Sha512,
}

/// PBKDF2 parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    /// Number of PBKDF2 iterations (default: 250 000).
    pub iterations: u32,
    /// PRF hash (default: SHA-256).
    pub hash: KdfHash,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            iterations: V1_ITERATIONS,
            hash: KdfHash::Sha256,
        }
    }
}

impl KdfParams {
    /// Parameters bound to a container format version.
    ///
    /// Returns `None` for versions this build does not understand.
    pub fn for_version(version: u8) -> Option<Self> {
        match version {
            1 => Some(Self::default()),
            _ => None,
        }
    }
}

/// A 32-byte symmetric key that zeroes its memory when dropped.
///
/// Produced fresh for every seal or open call and never persisted.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct DerivedKey {
    bytes: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Wrap raw key bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to build the AEAD cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKey([REDACTED])")
    }
}

/// Derive a 32-byte key from a password and salt with the version-1 parameters.
pub fn derive_key(password: &str, salt: &[u8; SALT_LEN]) -> Result<DerivedKey> {
    derive_key_with_params(password, salt, &KdfParams::default())
}

/// Derive a 32-byte key with explicit PBKDF2 parameters.
///
/// The password is fed to PBKDF2 as its UTF-8 bytes.  The same password,
/// salt and params always produce the same key.
///
/// A salt must never be reused for two sealing operations with the same
/// password.  That cannot be detected here; `generate_salt` per seal call
/// is the only supported way to obtain one.
pub fn derive_key_with_params(
    password: &str,
    salt: &[u8; SALT_LEN],
    params: &KdfParams,
) -> Result<DerivedKey> {
    if password.is_empty() {
        return Err(PolicyError::EmptyPassword.into());
    }
    if params.iterations < 1 {
        return Err(FileSealError::KeyDerivationFailed(
            "PBKDF2 iterations must be at least 1".into(),
        ));
    }

    let mut key = DerivedKey::new([0u8; KEY_LEN]);
    let outcome = match params.hash {
        KdfHash::Sha256 => pbkdf2::pbkdf2::<Hmac<Sha256>>(
            password.as_bytes(),
            salt,
            params.iterations,
            &mut key.bytes,
        ),
        KdfHash::Sha512 => pbkdf2::pbkdf2::<Hmac<Sha512>>(
            password.as_bytes(),
            salt,
            params.iterations,
            &mut key.bytes,
        ),
    };
    outcome.map_err(|e| FileSealError::KeyDerivationFailed(format!("PBKDF2 failed: {e}")))?;

    Ok(key)
}

/// Generate a cryptographically random 16-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    salt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast() -> KdfParams {
        KdfParams {
            iterations: 1_000,
            ..KdfParams::default()
        }
    }

    #[test]
    fn default_params_match_version_one() {
        let p = KdfParams::default();
        assert_eq!(p.iterations, 250_000);
        assert_eq!(p.hash, KdfHash::Sha256);
        assert_eq!(KdfParams::for_version(1), Some(p));
        assert_eq!(KdfParams::for_version(2), None);
    }

    #[test]
    fn rejects_empty_password() {
        let err = derive_key_with_params("", &[0u8; SALT_LEN], &fast()).unwrap_err();
        assert!(matches!(
            err,
            FileSealError::Policy(PolicyError::EmptyPassword)
        ));
    }

    #[test]
    fn rejects_zero_iterations() {
        let params = KdfParams {
            iterations: 0,
            ..KdfParams::default()
        };
        let err = derive_key_with_params("password", &[0u8; SALT_LEN], &params).unwrap_err();
        assert!(matches!(err, FileSealError::KeyDerivationFailed(_)));
    }

    #[test]
    fn hash_choice_changes_key() {
        let salt = [7u8; SALT_LEN];
        let a = derive_key_with_params("password", &salt, &fast()).unwrap();
        let b = derive_key_with_params(
            "password",
            &salt,
            &KdfParams {
                hash: KdfHash::Sha512,
                ..fast()
            },
        )
        .unwrap();
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn debug_does_not_leak_key() {
        let key = DerivedKey::new([0xAB; KEY_LEN]);
        assert_eq!(format!("{key:?}"), "DerivedKey([REDACTED])");
    }

    #[test]
    fn salts_are_random() {
        assert_ne!(generate_salt(), generate_salt());
    }
}
