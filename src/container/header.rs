//! Fixed-size plaintext container header.
//!
//! ```text
//! [FILESEAL: 8 bytes][version: 1 byte][salt: 16 bytes][nonce: 12 bytes][ciphertext + tag]
//! ```
//!
//! Only `magic` and `version` mean anything without the password.  The
//! header is not bound into the AEAD as associated data.

use crate::crypto::{NONCE_LEN, SALT_LEN};
use crate::errors::FormatError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Magic bytes at the start of every container.
pub const MAGIC: &[u8; 8] = b"FILESEAL";

/// Current (and only) container format version.
pub const CURRENT_VERSION: u8 = 1;

const MAGIC_LEN: usize = 8;
const VERSION_LEN: usize = 1;

const SALT_OFFSET: usize = MAGIC_LEN + VERSION_LEN;
const NONCE_OFFSET: usize = SALT_OFFSET + SALT_LEN;

/// Total header size: 8 (magic) + 1 (version) + 16 (salt) + 12 (nonce).
pub const HEADER_LEN: usize = NONCE_OFFSET + NONCE_LEN;

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

/// Parsed header fields, borrowing the ciphertext from the input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header<'a> {
    pub version: u8,
    pub salt: [u8; SALT_LEN],
    pub nonce: [u8; NONCE_LEN],
    /// Everything after the header: AEAD ciphertext with its tag.
    pub ciphertext: &'a [u8],
}

/// Build the 37-byte header `magic || version || salt || nonce`.
pub fn encode_header(salt: &[u8; SALT_LEN], nonce: &[u8; NONCE_LEN]) -> [u8; HEADER_LEN] {
    let mut out = [0u8; HEADER_LEN];
    out[..MAGIC_LEN].copy_from_slice(MAGIC);
    out[MAGIC_LEN] = CURRENT_VERSION;
    out[SALT_OFFSET..NONCE_OFFSET].copy_from_slice(salt);
    out[NONCE_OFFSET..].copy_from_slice(nonce);
    out
}

/// Split a container into its header fields and ciphertext.
///
/// Checks run in order: length, magic, version.
pub fn decode_header(container: &[u8]) -> Result<Header<'_>, FormatError> {
    if container.len() < HEADER_LEN {
        return Err(FormatError::TooShort);
    }

    if &container[..MAGIC_LEN] != MAGIC {
        return Err(FormatError::BadMagic);
    }

    let version = container[MAGIC_LEN];
    if version != CURRENT_VERSION {
        return Err(FormatError::UnsupportedVersion(version));
    }

    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(&container[SALT_OFFSET..NONCE_OFFSET]);
    let mut nonce = [0u8; NONCE_LEN];
    nonce.copy_from_slice(&container[NONCE_OFFSET..HEADER_LEN]);

    Ok(Header {
        version,
        salt,
        nonce,
        ciphertext: &container[HEADER_LEN..],
    })
}
