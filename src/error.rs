use thiserror::Error;

/// Failures raised by engine operations. Every variant is returned before the
/// operation mutates any state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SimError {
    /// The location key is not in the location catalog.
    #[error("unknown location: {0}")]
    InvalidLocation(String),
    /// No business with this id is owned by the engine.
    #[error("business {0} not found")]
    BusinessNotFound(u64),
    /// The upgrade type is not in the upgrade table.
    #[error("unknown upgrade type: {0}")]
    InvalidUpgrade(String),
    /// A caller-supplied value is missing or out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type SimResult<T> = Result<T, SimError>;
