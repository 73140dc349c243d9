use govchain_error::ChainError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainbaseError {
    #[error("item not found")]
    NotFound,
    #[error("item already exists")]
    AlreadyExists,
    #[error("invalid data provided")]
    InvalidData,
    #[error("error reading data")]
    ReadError,
    #[error("internal error: {0}")]
    InternalError(String),
}

impl From<fjall::Error> for ChainbaseError {
    fn from(e: fjall::Error) -> Self {
        ChainbaseError::InternalError(e.to_string())
    }
}

impl From<ChainbaseError> for ChainError {
    fn from(e: ChainbaseError) -> Self {
        ChainError::StateAccessError(e.to_string())
    }
}
