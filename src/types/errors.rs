//! Error types used across pathprobe.
use thiserror::Error;

/// High-level failure categories for snapshots and identity lookups.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("not found")]
    NotFound,
    #[error("status unavailable")]
    StatusUnavailable,
    #[error("identity field unavailable")]
    IdentityFieldUnavailable,
    #[error("unsupported platform")]
    UnsupportedPlatform,
}

/// Structured error with a kind and human message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind:?}: {msg}")]
pub struct Error {
    pub kind: ErrorKind,
    pub msg: String,
}

impl Error {
    pub fn new(kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            kind,
            msg: msg.into(),
        }
    }

    /// Classify an I/O failure from a status lookup.
    ///
    /// Only `NotFound` maps to [`ErrorKind::NotFound`]; permission denied, `ENOTDIR`, I/O errors
    /// and the rest are [`ErrorKind::StatusUnavailable`].
    pub fn from_io(e: &std::io::Error) -> Self {
        let kind = match e.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::NotFound,
            _ => ErrorKind::StatusUnavailable,
        };
        Self::new(kind, format!("stat: {e}"))
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }
}

/// Convenient alias for results returning a `types::Error`.
pub type Result<T> = std::result::Result<T, Error>;
