//! Result codes returned to the host and the errors behind them

use serde::Serialize;
use thiserror::Error;

use crate::domain::ParameterSlot;

/// Status code handed back to the host for every message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ok,
    /// Not a recognized transaction shape; the host may show raw data
    Unavailable,
    /// The host must block the review
    Error,
}

/// Coarse classification of a [`PluginError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Selector or contract not recognized
    Unavailable,
    /// Host integration mismatch (interface version, context size)
    Incompatible,
    /// The host misused the message sequence or sent bad data
    Malformed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PluginError {
    #[error("unsupported selector 0x{}", hex::encode(.0))]
    UnknownSelector([u8; 4]),

    #[error("interface version {found} is not supported (expected {expected})")]
    InterfaceVersion { found: u8, expected: u8 },

    #[error("context buffer holds {capacity} bytes but {required} are required")]
    ContextTooSmall { capacity: usize, required: usize },

    #[error("context has not been initialized")]
    NotInitialized,

    #[error("transaction data incomplete: {received} of {expected} parameters received")]
    Incomplete { received: usize, expected: usize },

    #[error("context was already finalized")]
    AlreadyFinalized,

    #[error("context has not been finalized")]
    NotFinalized,

    #[error("parameter word must be 32 bytes, got {0}")]
    InvalidWordLength(usize),

    #[error("{slot:?} parameter is not a valid address word")]
    DirtyAddress { slot: ParameterSlot },

    #[error("field {index} out of range ({count} fields)")]
    FieldOutOfRange { index: usize, count: usize },

    #[error("display fields are frozen once the review is shown")]
    FieldsFrozen,
}

impl PluginError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownSelector(_) => ErrorKind::Unavailable,
            Self::InterfaceVersion { .. } | Self::ContextTooSmall { .. } => {
                ErrorKind::Incompatible
            }
            _ => ErrorKind::Malformed,
        }
    }

    /// Map the error onto the status code the host understands
    ///
    /// An interface version mismatch answers `Unavailable` so the host falls
    /// back to its generic display; an undersized context is a hard error.
    pub fn status(&self) -> Status {
        match self {
            Self::UnknownSelector(_) | Self::InterfaceVersion { .. } => Status::Unavailable,
            _ => Status::Error,
        }
    }
}

impl<T> From<&Result<T, PluginError>> for Status {
    fn from(result: &Result<T, PluginError>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(err) => err.status(),
        }
    }
}
