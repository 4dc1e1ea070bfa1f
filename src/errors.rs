use std::path::PathBuf;
use thiserror::Error;

/// Caller-facing policy violations detected before any crypto runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Password required")]
    EmptyPassword,

    #[error("File name required")]
    EmptyFileName,
}

/// Structural violations of the container or inner payload layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    // --- Header ---
    #[error("Invalid FileSeal container (too small)")]
    TooShort,

    #[error("Invalid FileSeal container (magic mismatch)")]
    BadMagic,

    #[error("Unsupported FileSeal version {0}")]
    UnsupportedVersion(u8),

    // --- Inner payload ---
    #[error("Invalid decrypted payload (too short)")]
    PayloadTooShort,

    #[error("Invalid metadata length")]
    BadMetadataLength,

    #[error("Invalid metadata: {0}")]
    BadMetadata(String),
}

/// AEAD authentication failure.
///
/// Deliberately carries no detail: a wrong key and a tampered ciphertext
/// look exactly the same to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("authentication failed")]
pub struct AuthError;

/// Failures on the open path after the header has been accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpenError {
    #[error("Decryption failed — wrong password or corrupted file")]
    WrongPasswordOrCorrupted,

    #[error("Decrypted payload is malformed: {0}")]
    MalformedPayload(#[source] FormatError),
}

impl From<AuthError> for OpenError {
    fn from(_: AuthError) -> Self {
        OpenError::WrongPasswordOrCorrupted
    }
}

/// All errors that can occur in FileSeal.
#[derive(Debug, Error)]
pub enum FileSealError {
    // --- Container errors ---
    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Open(#[from] OpenError),

    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Refusing to overwrite {0} (use --force)")]
    OutputExists(PathBuf),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

impl FileSealError {
    /// The input is not a FileSeal container at all (likely the wrong file).
    pub fn is_not_a_container(&self) -> bool {
        matches!(
            self,
            FileSealError::Format(FormatError::TooShort | FormatError::BadMagic)
        )
    }

    /// The input is a container written by a newer (or unknown) format version.
    pub fn is_unsupported_version(&self) -> bool {
        matches!(
            self,
            FileSealError::Format(FormatError::UnsupportedVersion(_))
        )
    }

    /// Authentication failed: wrong password or corrupted ciphertext.
    pub fn is_wrong_password(&self) -> bool {
        matches!(
            self,
            FileSealError::Open(OpenError::WrongPasswordOrCorrupted)
        )
    }
}

/// Convenience type alias for FileSeal results.
pub type Result<T> = std::result::Result<T, FileSealError>;
