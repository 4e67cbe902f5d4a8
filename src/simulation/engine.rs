use log::{debug, info};

use crate::common::types::Page;
use crate::memory::FrameSet;
use crate::policy::{PolicyKind, ReplacementPolicy};
use crate::simulation::config::SimulationConfig;
use crate::simulation::error::{Result, SimulationError};
use crate::simulation::result::{SimulationResult, StepEvent};

/// Replays reference traces under a fixed configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Replay `references` from an empty frame set.
    ///
    /// A snapshot is recorded after every reference, hit or fault.
    pub fn run(&self, references: &[Page]) -> Result<SimulationResult> {
        if references.is_empty() {
            return Err(SimulationError::InvalidConfiguration(
                "reference sequence must not be empty".to_string(),
            ));
        }

        let SimulationConfig { frames, policy } = self.config;
        let mut frame_set = FrameSet::new(frames);
        let mut fault_count = 0;
        let mut snapshots = Vec::with_capacity(references.len());
        let mut events = Vec::with_capacity(references.len());

        for (step, &page) in references.iter().enumerate() {
            let outcome = policy.step(&mut frame_set, page)?;
            if outcome.faulted {
                fault_count += 1;
            }

            debug!(
                "{} step {}: page {} {}{}",
                policy,
                step + 1,
                page,
                if outcome.faulted { "fault" } else { "hit" },
                outcome.evicted.map(|p| format!(", evicted {}", p)).unwrap_or_default()
            );

            snapshots.push(frame_set.snapshot());
            events.push(StepEvent {
                page,
                faulted: outcome.faulted,
                evicted: outcome.evicted,
            });
        }

        info!(
            "{} with {} frames: {} faults over {} references",
            policy,
            frames,
            fault_count,
            references.len()
        );

        Ok(SimulationResult {
            policy,
            frames,
            fault_count,
            snapshots,
            events,
        })
    }
}

/// Run a single simulation.
///
/// Fails with `InvalidConfiguration` when `frames` is zero or `references`
/// is empty; nothing is simulated in that case.
pub fn run(references: &[Page], frames: usize, policy: PolicyKind) -> Result<SimulationResult> {
    Simulator::new(SimulationConfig::new(frames, policy))?.run(references)
}
