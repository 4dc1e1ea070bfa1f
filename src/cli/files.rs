//! Filesystem helpers for the seal/open commands.

use std::io::{self, Write};
use std::path::{Component, Path};

use rand::RngCore;
use tempfile::NamedTempFile;

use crate::errors::{FileSealError, Result};

/// Number of random bytes behind an opaque container name (12 hex digits).
const OPAQUE_STEM_BYTES: usize = 6;

/// Fallback name when a recovered file name is unusable on disk.
const FALLBACK_NAME: &str = "restored.bin";

/// Write `bytes` to `path` **atomically**.
///
/// Refuses to replace an existing file unless `force` is set.  The data
/// goes to a randomly named temp file in the same directory which is then
/// moved onto the target, so a failed run never leaves a half-written
/// output and never touches any other file.
pub fn write_output(path: &Path, bytes: &[u8], force: bool) -> Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;

    let persisted = if force {
        tmp.persist(path)
    } else {
        tmp.persist_noclobber(path)
    };

    match persisted {
        Ok(_) => Ok(()),
        Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => {
            Err(FileSealError::OutputExists(path.to_path_buf()))
        }
        Err(e) => Err(e.error.into()),
    }
}

/// A random 12-hex-digit stem, so the container name says nothing
/// about its contents.
pub fn opaque_stem() -> String {
    let mut bytes = [0u8; OPAQUE_STEM_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Reduce a file name recovered from a container to a single safe path
/// component.
///
/// The name is attacker-controlled once a password is shared, so any
/// directory part is discarded, control characters become `_` and
/// `.`/`..`/empty fall back to a fixed name.
pub fn safe_file_name(name: &str) -> String {
    let last = name
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default();

    match Path::new(last).components().next() {
        Some(Component::Normal(part)) => part
            .to_string_lossy()
            .chars()
            .map(|c| if c.is_control() { '_' } else { c })
            .collect(),
        _ => FALLBACK_NAME.to_string(),
    }
}
