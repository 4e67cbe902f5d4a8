use thiserror::Error;
use crate::common::types::Page;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameSetError {
    #[error("Frame set precondition violated: {0}")]
    PrecondViolation(String),
    #[error("Frame set is empty")]
    EmptyState,
    #[error("Page {0} not resident in frame set")]
    NotFound(Page),
}

/// Result type for frame set operations
pub type Result<T> = std::result::Result<T, FrameSetError>;
