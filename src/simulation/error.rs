use thiserror::Error;
use crate::memory::FrameSetError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Internal policy error: {0}")]
    Internal(#[from] FrameSetError),
}

/// Result type for simulation operations
pub type Result<T> = std::result::Result<T, SimulationError>;
