use serde::{Deserialize, Serialize};

use crate::common::types::Page;
use crate::policy::PolicyKind;

/// Frame contents recorded right after one reference was processed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(Vec<Page>);

impl Snapshot {
    pub fn new(pages: Vec<Page>) -> Self {
        Self(pages)
    }

    pub fn pages(&self) -> &[Page] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, page: Page) -> bool {
        self.0.contains(&page)
    }
}

/// Per-reference record of what the policy did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepEvent {
    pub page: Page,
    pub faulted: bool,
    pub evicted: Option<Page>,
}

/// Outcome of replaying a reference sequence.
///
/// `snapshots[i]` and `events[i]` describe the state right after
/// `references[i]`, so both always have one entry per reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub policy: PolicyKind,
    pub frames: usize,
    pub fault_count: usize,
    pub snapshots: Vec<Snapshot>,
    pub events: Vec<StepEvent>,
}

impl SimulationResult {
    /// Number of references replayed
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn hit_count(&self) -> usize {
        self.len() - self.fault_count
    }

    pub fn fault_ratio(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.fault_count as f64 / self.len() as f64
    }

    pub fn eviction_count(&self) -> usize {
        self.events.iter().filter(|e| e.evicted.is_some()).count()
    }

    pub fn final_frames(&self) -> &[Page] {
        self.snapshots.last().map(Snapshot::pages).unwrap_or(&[])
    }
}
