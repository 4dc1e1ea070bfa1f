//! Sealer: file bytes + name + MIME type + password → container bytes.

use tracing::debug;

use super::header::{encode_header, HEADER_LEN};
use super::payload::{encode_payload, FileMetadata};
use super::progress::{NoProgress, Phase, Progress};
use crate::crypto::{aead, derive_key_with_params, generate_nonce, generate_salt, KdfParams};
use crate::errors::{PolicyError, Result};

/// Minimum password length (in characters) accepted by default.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Caller-tunable knobs for sealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SealOptions {
    /// Minimum password length in characters (default: 8).
    pub min_password_len: usize,
    /// Key derivation parameters (default: the version-1 parameters).
    pub kdf: KdfParams,
}

impl Default for SealOptions {
    fn default() -> Self {
        Self {
            min_password_len: MIN_PASSWORD_LEN,
            kdf: KdfParams::default(),
        }
    }
}

/// Seal `plaintext` into a new container with the default options.
///
/// An empty `mime_type` is recorded as `application/octet-stream`.
pub fn seal(plaintext: &[u8], filename: &str, mime_type: &str, password: &str) -> Result<Vec<u8>> {
    seal_with(
        plaintext,
        filename,
        mime_type,
        password,
        &SealOptions::default(),
        &mut NoProgress,
    )
}

/// Seal `plaintext`, reporting phases to `progress`.
///
/// Every call draws a fresh salt and nonce, so sealing the same input
/// twice never yields the same container.  On error no container is
/// produced.
pub fn seal_with(
    plaintext: &[u8],
    filename: &str,
    mime_type: &str,
    password: &str,
    options: &SealOptions,
    progress: &mut impl Progress,
) -> Result<Vec<u8>> {
    if password.chars().count() < options.min_password_len {
        return Err(PolicyError::PasswordTooShort {
            min: options.min_password_len,
        }
        .into());
    }
    if filename.is_empty() {
        return Err(PolicyError::EmptyFileName.into());
    }

    let salt = generate_salt();
    let nonce = generate_nonce();

    progress.phase(Phase::DerivingKey);
    debug!(iterations = options.kdf.iterations, "deriving key");
    let key = derive_key_with_params(password, &salt, &options.kdf)?;

    let metadata = FileMetadata::new(filename, mime_type);
    let payload = encode_payload(&metadata, plaintext)?;

    progress.phase(Phase::Encrypting);
    debug!(payload_len = payload.len(), "encrypting payload");
    let ciphertext = aead::seal(&key, &nonce, &payload)?;

    let mut out = Vec::with_capacity(HEADER_LEN + ciphertext.len());
    out.extend_from_slice(&encode_header(&salt, &nonce));
    out.extend_from_slice(&ciphertext);

    debug!(container_len = out.len(), "container sealed");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FileSealError;

    #[test]
    fn short_password_is_rejected_before_any_work() {
        let mut phases = Vec::new();
        let err = seal_with(
            b"data",
            "a.txt",
            "text/plain",
            "1234567",
            &SealOptions::default(),
            &mut |p: Phase| phases.push(p),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            FileSealError::Policy(PolicyError::PasswordTooShort { min: 8 })
        ));
        assert!(phases.is_empty());
    }

    #[test]
    fn password_length_counts_characters() {
        let options = SealOptions {
            kdf: KdfParams {
                iterations: 1,
                ..KdfParams::default()
            },
            ..SealOptions::default()
        };
        // 8 characters, 16 bytes.
        let pw = "éééééééé";
        assert!(seal_with(b"", "a", "", pw, &options, &mut NoProgress).is_ok());
        // 4 characters, 8 bytes.
        let err = seal_with(b"", "a", "", "éééé", &options, &mut NoProgress).unwrap_err();
        assert!(matches!(err, FileSealError::Policy(_)));
    }

    #[test]
    fn configurable_minimum_length() {
        let options = SealOptions {
            min_password_len: 12,
            kdf: KdfParams {
                iterations: 1,
                ..KdfParams::default()
            },
        };
        let err = seal_with(b"x", "a", "", "only-eleven", &options, &mut NoProgress).unwrap_err();
        assert!(matches!(
            err,
            FileSealError::Policy(PolicyError::PasswordTooShort { min: 12 })
        ));
    }

    #[test]
    fn empty_filename_is_rejected() {
        let err = seal(b"x", "", "text/plain", "correcthorse").unwrap_err();
        assert!(matches!(
            err,
            FileSealError::Policy(PolicyError::EmptyFileName)
        ));
    }

    #[test]
    fn reports_phases_in_order() {
        let options = SealOptions {
            kdf: KdfParams {
                iterations: 1,
                ..KdfParams::default()
            },
            ..SealOptions::default()
        };
        let mut phases = Vec::new();
        seal_with(b"x", "a", "", "password", &options, &mut |p: Phase| phases.push(p)).unwrap();
        assert_eq!(phases, vec![Phase::DerivingKey, Phase::Encrypting]);
    }
}
