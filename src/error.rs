//! Error types for every fallible concern of the trainer.
//! None of these are fatal: the UI turns them into a toast or a dialog.

use thiserror::Error;

/// Failure of the durable storage port.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    /// The stored custom-unit blob exists but is not valid JSON for the store.
    #[error("stored units could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("storage lock poisoned")]
    Poisoned,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unit '{0}' is built in and cannot be deleted")]
    BuiltInUnit(String),
    #[error("no unit with id '{0}'")]
    UnknownUnit(String),
    #[error("a unit needs a name")]
    EmptyName,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// A share payload that must be ignored.
#[derive(Debug, Error)]
pub enum ShareDecodeError {
    #[error("payload is not base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("payload is not JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("payload has no string 'name'")]
    MissingName,
    #[error("payload has no 'cards' list")]
    MissingCards,
    #[error("card {0} is malformed")]
    InvalidCard(usize),
    #[error("link has no 'deck' parameter")]
    NoPayload,
}

#[derive(Debug, Error)]
pub enum GenerationError {
    /// No API key was configured. Shown to the user with a hint on how to set one.
    #[error("no API key configured (set GEMINI_API_KEY or pass --api-key)")]
    CredentialMissing,
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service answered with status {0}")]
    Status(u16),
    #[error("service returned malformed cards: {0}")]
    Malformed(String),
    #[error("service returned no cards")]
    Empty,
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid unit file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors surfaced by the trainer controller.
#[derive(Debug, Error)]
pub enum TrainerError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Share(#[from] ShareDecodeError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("could not encode unit: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("could not copy to clipboard: {0}")]
    Clipboard(String),
}
