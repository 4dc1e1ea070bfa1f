//! Container module — the FileSeal v1 codec.
//!
//! This module provides:
//! - Plaintext header layout and validation (`header`)
//! - Inner payload framing and the `FileMetadata` record (`payload`)
//! - Progress phases reported while sealing/opening (`progress`)
//! - The `seal` and `open` operations (`sealer`, `opener`)

pub mod header;
pub mod opener;
pub mod payload;
pub mod progress;
pub mod sealer;

// Re-export the most commonly used items.
pub use header::{CURRENT_VERSION, HEADER_LEN, MAGIC};
pub use opener::{inspect, open, open_with, ContainerInfo, OpenOptions, OpenedFile};
pub use payload::{FileMetadata, DEFAULT_MIME_TYPE};
pub use progress::{NoProgress, Phase, Progress};
pub use sealer::{seal, seal_with, SealOptions, MIN_PASSWORD_LEN};
