use serde::{Deserialize, Serialize};

use crate::common::types::DEFAULT_FRAME_COUNT;
use crate::policy::PolicyKind;
use crate::simulation::error::{Result, SimulationError};

/// Parameters of one simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of frames available to resident pages
    pub frames: usize,

    /// Replacement policy driving evictions
    pub policy: PolicyKind,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAME_COUNT,
            policy: PolicyKind::Fifo,
        }
    }
}

impl SimulationConfig {
    pub fn new(frames: usize, policy: PolicyKind) -> Self {
        Self { frames, policy }
    }

    pub fn with_frames(mut self, frames: usize) -> Self {
        self.frames = frames;
        self
    }

    pub fn with_policy(mut self, policy: PolicyKind) -> Self {
        self.policy = policy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.frames == 0 {
            return Err(SimulationError::InvalidConfiguration(
                "frame count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
