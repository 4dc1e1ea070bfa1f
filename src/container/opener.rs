//! Opener: container bytes + password → file bytes, name, MIME type.

use tracing::debug;
use zeroize::Zeroizing;

use super::header::decode_header;
use super::payload::decode_payload;
use super::progress::{NoProgress, Phase, Progress};
use crate::crypto::{aead, derive_key_with_params, KdfParams, NONCE_LEN, SALT_LEN, TAG_LEN};
use crate::errors::{FormatError, OpenError, Result};

/// A fully restored file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedFile {
    pub file_bytes: Vec<u8>,
    pub name: String,
    pub mime_type: String,
}

/// Caller-tunable knobs for opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OpenOptions {
    /// Key derivation parameters; must match the ones used to seal.
    pub kdf: KdfParams,
}

/// What can be learned about a container without the password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerInfo {
    pub version: u8,
    pub salt: [u8; SALT_LEN],
    pub nonce: [u8; NONCE_LEN],
    /// Ciphertext length including the 16-byte tag.
    pub ciphertext_len: usize,
}

impl ContainerInfo {
    /// Size of the encrypted inner payload, if the ciphertext can hold a tag.
    pub fn payload_len(&self) -> Option<usize> {
        self.ciphertext_len.checked_sub(TAG_LEN)
    }
}

/// Open a container with the default options.
pub fn open(container: &[u8], password: &str) -> Result<OpenedFile> {
    open_with(container, password, &OpenOptions::default(), &mut NoProgress)
}

/// Open a container, reporting phases to `progress`.
///
/// Header failures surface unchanged as `FormatError`.  Authentication
/// failures become `OpenError::WrongPasswordOrCorrupted` and payload
/// failures become `OpenError::MalformedPayload`.  Nothing is returned
/// unless every step succeeds.
pub fn open_with(
    container: &[u8],
    password: &str,
    options: &OpenOptions,
    progress: &mut impl Progress,
) -> Result<OpenedFile> {
    let header = decode_header(container)?;
    debug!(
        version = header.version,
        ciphertext_len = header.ciphertext.len(),
        "header accepted"
    );

    progress.phase(Phase::DerivingKey);
    let key = derive_key_with_params(password, &header.salt, &options.kdf)?;

    progress.phase(Phase::Decrypting);
    let plaintext = Zeroizing::new(
        aead::open(&key, &header.nonce, header.ciphertext).map_err(OpenError::from)?,
    );
    drop(key);

    progress.phase(Phase::ParsingPayload);
    let decoded = decode_payload(&plaintext).map_err(OpenError::MalformedPayload)?;
    debug!(file_len = decoded.file_bytes.len(), "container opened");

    Ok(OpenedFile {
        file_bytes: decoded.file_bytes.to_vec(),
        name: decoded.metadata.name,
        mime_type: decoded.metadata.mime_type,
    })
}

/// Read the plaintext header fields of a container.
pub fn inspect(container: &[u8]) -> std::result::Result<ContainerInfo, FormatError> {
    let header = decode_header(container)?;
    Ok(ContainerInfo {
        version: header.version,
        salt: header.salt,
        nonce: header.nonce,
        ciphertext_len: header.ciphertext.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::header::{encode_header, HEADER_LEN};
    use crate::container::sealer::{seal_with, SealOptions};
    use crate::crypto::{derive_key_with_params, generate_nonce, generate_salt};
    use crate::errors::{FileSealError, PolicyError};

    fn fast_kdf() -> KdfParams {
        KdfParams {
            iterations: 1_000,
            ..KdfParams::default()
        }
    }

    fn fast_seal(data: &[u8], name: &str, mime: &str, pw: &str) -> Vec<u8> {
        let options = SealOptions {
            kdf: fast_kdf(),
            ..SealOptions::default()
        };
        seal_with(data, name, mime, pw, &options, &mut NoProgress).unwrap()
    }

    fn fast_open(container: &[u8], pw: &str) -> Result<OpenedFile> {
        open_with(
            container,
            pw,
            &OpenOptions { kdf: fast_kdf() },
            &mut NoProgress,
        )
    }

    /// Encrypt an arbitrary inner payload under a valid header.
    fn container_with_payload(payload: &[u8], pw: &str) -> Vec<u8> {
        let salt = generate_salt();
        let nonce = generate_nonce();
        let key = derive_key_with_params(pw, &salt, &fast_kdf()).unwrap();
        let mut out = encode_header(&salt, &nonce).to_vec();
        out.extend(aead::seal(&key, &nonce, payload).unwrap());
        out
    }

    #[test]
    fn roundtrip() {
        let c = fast_seal(b"hello", "a.txt", "text/plain", "correcthorse");
        let opened = fast_open(&c, "correcthorse").unwrap();
        assert_eq!(opened.file_bytes, b"hello");
        assert_eq!(opened.name, "a.txt");
        assert_eq!(opened.mime_type, "text/plain");
    }

    #[test]
    fn wrong_password_is_undifferentiated() {
        let c = fast_seal(b"hello", "a.txt", "text/plain", "correcthorse");
        let err = fast_open(&c, "wrong-password").unwrap_err();
        assert!(err.is_wrong_password());
    }

    #[test]
    fn empty_password_fails_fast() {
        let c = fast_seal(b"hello", "a.txt", "text/plain", "correcthorse");
        let mut phases = Vec::new();
        let err = open_with(
            &c,
            "",
            &OpenOptions { kdf: fast_kdf() },
            &mut |p: Phase| phases.push(p),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            FileSealError::Policy(PolicyError::EmptyPassword)
        ));
        assert_eq!(phases, vec![Phase::DerivingKey]);
    }

    #[test]
    fn header_errors_propagate_unchanged() {
        let err = fast_open(b"short", "correcthorse").unwrap_err();
        assert!(matches!(err, FileSealError::Format(FormatError::TooShort)));
    }

    #[test]
    fn truncated_tag_is_auth_failure() {
        let c = fast_seal(b"hello", "a.txt", "text/plain", "correcthorse");
        let err = fast_open(&c[..HEADER_LEN + 3], "correcthorse").unwrap_err();
        assert!(err.is_wrong_password());
    }

    #[test]
    fn authentic_but_malformed_payload() {
        let c = container_with_payload(&[0, 0], "correcthorse");
        let err = fast_open(&c, "correcthorse").unwrap_err();
        assert!(matches!(
            err,
            FileSealError::Open(OpenError::MalformedPayload(FormatError::PayloadTooShort))
        ));

        let c = container_with_payload(&[0, 0, 0, 50, b'{'], "correcthorse");
        let err = fast_open(&c, "correcthorse").unwrap_err();
        assert!(matches!(
            err,
            FileSealError::Open(OpenError::MalformedPayload(FormatError::BadMetadataLength))
        ));

        let meta = br#"{"name":"a.txt"}"#;
        let mut payload = (meta.len() as u32).to_be_bytes().to_vec();
        payload.extend_from_slice(meta);
        payload.extend_from_slice(b"body");
        let c = container_with_payload(&payload, "correcthorse");
        let err = fast_open(&c, "correcthorse").unwrap_err();
        assert!(matches!(
            err,
            FileSealError::Open(OpenError::MalformedPayload(FormatError::BadMetadata(_)))
        ));
    }

    #[test]
    fn reports_phases_in_order() {
        let c = fast_seal(b"x", "a", "", "password");
        let mut phases = Vec::new();
        open_with(
            &c,
            "password",
            &OpenOptions { kdf: fast_kdf() },
            &mut |p: Phase| phases.push(p),
        )
        .unwrap();
        assert_eq!(
            phases,
            vec![Phase::DerivingKey, Phase::Decrypting, Phase::ParsingPayload]
        );
    }

    #[test]
    fn inspect_reads_header_only() {
        let c = fast_seal(b"hello", "a.txt", "text/plain", "correcthorse");
        let info = inspect(&c).unwrap();
        assert_eq!(info.version, 1);
        assert_eq!(&info.salt[..], &c[9..25]);
        assert_eq!(&info.nonce[..], &c[25..37]);
        assert_eq!(info.ciphertext_len, c.len() - HEADER_LEN);

        let meta_len = br#"{"name":"a.txt","type":"text/plain"}"#.len();
        assert_eq!(info.payload_len(), Some(4 + meta_len + 5));
    }
}
