pub mod cli;
pub mod config;
pub mod container;
pub mod crypto;
pub mod errors;

pub use container::{inspect, open, open_with, seal, seal_with, OpenedFile};
pub use errors::{FileSealError, Result};
