use std::num::NonZeroUsize;
use std::panic;

use crossbeam::thread;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::common::types::Page;
use crate::policy::PolicyKind;
use crate::simulation::engine::run;
use crate::simulation::error::{Result, SimulationError};

/// Fault totals for one (policy, frame count) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub policy: PolicyKind,
    pub frames: usize,
    pub faults: usize,
    pub hits: usize,
}

/// Run every policy against every frame count.
///
/// Pairs are split into contiguous chunks, one scoped worker per chunk, with
/// no more workers than the machine has cores. Rows come back ordered by
/// policy, then by frame count, in the order they were requested.
pub fn compare(
    references: &[Page],
    frame_counts: &[usize],
    policies: &[PolicyKind],
) -> Result<Vec<ComparisonRow>> {
    if frame_counts.is_empty() || policies.is_empty() {
        return Err(SimulationError::InvalidConfiguration(
            "comparison needs at least one policy and one frame count".to_string(),
        ));
    }

    let pairs: Vec<(PolicyKind, usize)> = policies
        .iter()
        .flat_map(|&policy| frame_counts.iter().map(move |&frames| (policy, frames)))
        .collect();

    let workers = worker_limit().min(pairs.len());
    let chunk_size = pairs.len().div_ceil(workers);
    debug!("comparing {} runs on {} workers", pairs.len(), workers);

    let outcomes: Vec<Vec<Result<ComparisonRow>>> = thread::scope(|s| {
        let handles: Vec<_> = pairs
            .chunks(chunk_size)
            .map(|chunk| {
                s.spawn(move |_| {
                    chunk
                        .iter()
                        .map(|&(policy, frames)| compare_one(references, frames, policy))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
            .collect()
    })
    .unwrap_or_else(|payload| panic::resume_unwind(payload));

    outcomes.into_iter().flatten().collect()
}

fn worker_limit() -> usize {
    std::thread::available_parallelism().map(NonZeroUsize::get).unwrap_or(1)
}

fn compare_one(references: &[Page], frames: usize, policy: PolicyKind) -> Result<ComparisonRow> {
    let result = run(references, frames, policy)?;
    Ok(ComparisonRow {
        policy: result.policy,
        frames: result.frames,
        faults: result.fault_count,
        hits: result.hit_count(),
    })
}
