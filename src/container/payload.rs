//! Inner payload: the plaintext that gets encrypted.
//!
//! ```text
//! [meta_len: 4 bytes BE][metadata JSON: meta_len bytes][file bytes]
//! ```
//!
//! The file content carries no length of its own.  It is everything
//! after the metadata block, so its length is always
//! `payload.len() - 4 - meta_len`.  Readers must not expect trailing
//! fields after it.

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::errors::{FileSealError, FormatError, Result};

/// MIME type recorded when the caller does not supply one.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Size of the big-endian metadata length prefix.
const META_LEN_PREFIX: usize = 4;

/// Original file name and MIME type, stored encrypted alongside the content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileMetadata {
    pub name: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// Wire shape used for decoding, so missing or null fields surface as
/// `BadMetadata` with a readable reason instead of a serde error.
#[derive(Deserialize)]
struct RawMetadata {
    name: Option<String>,
    #[serde(rename = "type")]
    mime_type: Option<String>,
}

impl FileMetadata {
    /// Build metadata, substituting `DEFAULT_MIME_TYPE` for an empty type.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>) -> Self {
        let mime_type = mime_type.into();
        Self {
            name: name.into(),
            mime_type: if mime_type.is_empty() {
                DEFAULT_MIME_TYPE.to_string()
            } else {
                mime_type
            },
        }
    }
}

/// A decoded inner payload, borrowing the file content from the plaintext.
#[derive(Debug, PartialEq, Eq)]
pub struct DecodedPayload<'a> {
    pub metadata: FileMetadata,
    pub file_bytes: &'a [u8],
}

/// Assemble `u32_be(len(meta)) || meta || file_bytes`.
///
/// The result holds plaintext and is wiped on drop.
pub fn encode_payload(metadata: &FileMetadata, file_bytes: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
    let meta_bytes = serde_json::to_vec(metadata)
        .map_err(|e| FileSealError::SerializationError(format!("metadata: {e}")))?;

    let meta_len = u32::try_from(meta_bytes.len()).map_err(|_| {
        FileSealError::SerializationError(format!(
            "metadata length {} exceeds u32::MAX",
            meta_bytes.len()
        ))
    })?;

    let total = META_LEN_PREFIX + meta_bytes.len() + file_bytes.len();
    let mut buf = Zeroizing::new(Vec::with_capacity(total));

    buf.extend_from_slice(&meta_len.to_be_bytes()); // 4 bytes BE
    buf.extend_from_slice(&meta_bytes); // metadata JSON
    buf.extend_from_slice(file_bytes); // file content, to the end

    Ok(buf)
}

/// Parse a decrypted payload back into metadata and file content.
pub fn decode_payload(plaintext: &[u8]) -> std::result::Result<DecodedPayload<'_>, FormatError> {
    if plaintext.len() < META_LEN_PREFIX {
        return Err(FormatError::PayloadTooShort);
    }

    let (prefix, rest) = plaintext.split_at(META_LEN_PREFIX);
    let meta_len_u32 = u32::from_be_bytes(
        prefix
            .try_into()
            .map_err(|_| FormatError::PayloadTooShort)?,
    );

    // Compare in u64 so a huge prefix cannot overflow on 32-bit targets.
    if u64::from(meta_len_u32) > rest.len() as u64 {
        return Err(FormatError::BadMetadataLength);
    }
    let (meta_bytes, file_bytes) = rest.split_at(meta_len_u32 as usize);

    Ok(DecodedPayload {
        metadata: parse_metadata(meta_bytes)?,
        file_bytes,
    })
}

fn parse_metadata(meta_bytes: &[u8]) -> std::result::Result<FileMetadata, FormatError> {
    let raw: RawMetadata = serde_json::from_slice(meta_bytes)
        .map_err(|e| FormatError::BadMetadata(format!("invalid metadata JSON: {e}")))?;

    let name = raw
        .name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| FormatError::BadMetadata("missing name".into()))?;
    let mime_type = raw
        .mime_type
        .filter(|t| !t.is_empty())
        .ok_or_else(|| FormatError::BadMetadata("missing type".into()))?;

    Ok(FileMetadata { name, mime_type })
}
