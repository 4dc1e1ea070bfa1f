//! Configuration loaded from `.fileseal.toml`.

pub mod settings;

pub use settings::Settings;
