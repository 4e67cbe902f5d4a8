//! Parsing of user supplied reference traces and frame counts.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::common::types::Page;
use crate::policy::PolicyKind;

#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Invalid page '{token}' at position {position}")]
    InvalidPage { position: usize, token: String },
    #[error("Invalid frame count '{0}': expected a positive integer")]
    InvalidFrameCount(String),
    #[error("Unknown policy '{0}': expected FIFO or LRU")]
    UnknownPolicy(String),
    #[error("Failed to read trace: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TraceError>;

/// Parse a reference string such as `"7 0 1 2 0 3"` or `"7,0,1"`
pub fn parse_references(input: &str) -> Result<Vec<Page>> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            token.parse::<Page>().map_err(|_| TraceError::InvalidPage {
                position: i + 1,
                token: token.to_string(),
            })
        })
        .collect()
}

pub fn parse_frame_count(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    match trimmed.parse::<usize>() {
        Ok(frames) if frames >= 1 => Ok(frames),
        _ => Err(TraceError::InvalidFrameCount(trimmed.to_string())),
    }
}

pub fn parse_policy(input: &str) -> Result<PolicyKind> {
    input
        .parse::<PolicyKind>()
        .map_err(|_| TraceError::UnknownPolicy(input.trim().to_string()))
}

/// Read a trace file of whitespace or comma separated page numbers
pub fn read_references(path: impl AsRef<Path>) -> Result<Vec<Page>> {
    let contents = fs::read_to_string(path)?;
    parse_references(&contents)
}

/// Number of distinct pages referenced by a trace
pub fn distinct_pages(references: &[Page]) -> usize {
    references.iter().collect::<HashSet<_>>().len()
}
