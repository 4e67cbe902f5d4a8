//! Page replacement policies.
//!
//! Every policy derives its behaviour purely from the order of the frame set,
//! so a policy is a stateless step function over `(FrameSet, Page)`. Adding a
//! policy means adding a `PolicyKind` variant and a `ReplacementPolicy` impl.

pub mod fifo;
pub mod lru;

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::common::types::Page;
use crate::memory::{FrameSet, FrameSetError};

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;

/// What a single reference did to the frame set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    pub faulted: bool,
    pub evicted: Option<Page>,
}

impl StepOutcome {
    pub fn hit() -> Self {
        Self { faulted: false, evicted: None }
    }

    pub fn fault(evicted: Option<Page>) -> Self {
        Self { faulted: true, evicted }
    }
}

pub trait ReplacementPolicy {
    /// Process one reference, mutating the frame set in place
    fn step(&self, frames: &mut FrameSet, page: Page) -> Result<StepOutcome, FrameSetError>;
}

/// Admit a missing page, evicting the front of the set when it is full.
///
/// Shared by FIFO and LRU: both evict the front, they only differ in how a
/// hit reorders the set.
pub(crate) fn admit(frames: &mut FrameSet, page: Page) -> Result<StepOutcome, FrameSetError> {
    let evicted = if frames.is_full() {
        Some(frames.evict_oldest()?)
    } else {
        None
    };
    frames.insert(page)?;
    Ok(StepOutcome::fault(evicted))
}

/// Closed set of supported policies
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum PolicyKind {
    #[default]
    Fifo,
    Lru,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 2] = [PolicyKind::Fifo, PolicyKind::Lru];

    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
        }
    }
}

impl ReplacementPolicy for PolicyKind {
    fn step(&self, frames: &mut FrameSet, page: Page) -> Result<StepOutcome, FrameSetError> {
        match self {
            PolicyKind::Fifo => FifoPolicy.step(frames, page),
            PolicyKind::Lru => LruPolicy.step(frames, page),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FIFO" => Ok(PolicyKind::Fifo),
            "LRU" => Ok(PolicyKind::Lru),
            other => Err(format!("unknown replacement policy '{}'", other)),
        }
    }
}
