// Page replacement simulator

pub mod common;
pub mod memory;
pub mod policy;
pub mod report;
pub mod simulation;
pub mod trace;

// Re-export key items for convenient access
pub use common::types::Page;
pub use memory::{FrameSet, FrameSetError};
pub use policy::{PolicyKind, ReplacementPolicy};
pub use simulation::{run, compare, SimulationConfig, SimulationError, SimulationResult, Simulator, Snapshot};
pub use trace::TraceError;
