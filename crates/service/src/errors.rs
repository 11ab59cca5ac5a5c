use thiserror::Error;

/// Caller-facing error taxonomy of the library service.
///
/// Validation variants are produced before any storage call. `SongNotFound`
/// comes from storage and passes through verbatim; every other storage
/// failure is wrapped as `Storage` and never retried here.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("invalid squad")]
    InvalidSquad,
    #[error("invalid song")]
    InvalidSong,
    #[error("invalid id")]
    InvalidId,
    #[error("invalid chunk")]
    InvalidChunk,
    #[error("invalid order")]
    InvalidOrder,
    #[error("invalid field")]
    InvalidField,
    #[error("song not found")]
    SongNotFound,
    #[error("storage error: {0}")]
    Storage(String),
}

impl LibraryError {
    pub fn storage(err: impl std::fmt::Display) -> Self {
        Self::Storage(err.to_string())
    }
}
