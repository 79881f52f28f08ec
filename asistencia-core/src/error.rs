//! Error types for the asistencia ecosystem.

use thiserror::Error;

/// Errors that can occur in asistencia operations.
///
/// `Validation` and `Conflict` messages are rendered to the caller
/// verbatim, so they carry the user-facing (Spanish) wording.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Server configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Storage(String),
}

impl Error {
    /// The rejection for a second fan-out over an already-recorded event.
    pub fn duplicate_event() -> Self {
        Error::Conflict("Ya existe un registro para esta fecha y tipo de evento.".to_string())
    }
}

/// Result type alias for asistencia operations.
pub type Result<T> = std::result::Result<T, Error>;
