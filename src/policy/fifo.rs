use crate::common::types::Page;
use crate::memory::{FrameSet, FrameSetError};
use super::{admit, ReplacementPolicy, StepOutcome};

/// First-in-first-out replacement.
///
/// A hit does not refresh the page's position, so the longest resident page
/// is evicted no matter how recently it was referenced.
#[derive(Debug, Clone, Copy, Default)]
pub struct FifoPolicy;

impl ReplacementPolicy for FifoPolicy {
    fn step(&self, frames: &mut FrameSet, page: Page) -> Result<StepOutcome, FrameSetError> {
        if frames.contains(page) {
            return Ok(StepOutcome::hit());
        }
        admit(frames, page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_keeps_admission_order() {
        let mut frames = FrameSet::new(2);
        let policy = FifoPolicy;

        assert!(policy.step(&mut frames, 1).unwrap().faulted);
        assert!(policy.step(&mut frames, 2).unwrap().faulted);
        assert!(!policy.step(&mut frames, 1).unwrap().faulted);

        // 1 is still the oldest admission
        let outcome = policy.step(&mut frames, 3).unwrap();
        assert_eq!(outcome, StepOutcome::fault(Some(1)));
        assert_eq!(frames.snapshot().pages(), &[2, 3]);
    }
}
