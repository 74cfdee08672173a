use thiserror::Error;

/// Failure of any remote-touching operation. Always caught at the boundary
/// and handed back as a value; never raised as a fault.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteError {
    #[error("network error: {0}")]
    Network(String),
    #[error("remote returned status {0}")]
    Status(u16),
    #[error("malformed remote payload: {0}")]
    Payload(String),
    #[error("not found: {0}")]
    NotFound(String),
}

pub type RemoteResult<T> = Result<T, RemoteError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown game mode: {0}")]
pub struct UnknownMode(pub String);
