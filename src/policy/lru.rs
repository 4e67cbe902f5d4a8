use crate::common::types::Page;
use crate::memory::{FrameSet, FrameSetError};
use super::{admit, ReplacementPolicy, StepOutcome};

/// Least-recently-used replacement.
///
/// The frame set is kept in recency order, most recently used at the tail.
#[derive(Debug, Clone, Copy, Default)]
pub struct LruPolicy;

impl ReplacementPolicy for LruPolicy {
    fn step(&self, frames: &mut FrameSet, page: Page) -> Result<StepOutcome, FrameSetError> {
        if frames.contains(page) {
            frames.touch(page)?;
            return Ok(StepOutcome::hit());
        }
        admit(frames, page)
    }
}
