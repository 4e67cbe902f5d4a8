pub mod compare;
pub mod config;
pub mod engine;
pub mod error;
pub mod result;

pub use compare::{compare, ComparisonRow};
pub use config::SimulationConfig;
pub use engine::{run, Simulator};
pub use error::SimulationError;
pub use result::{SimulationResult, Snapshot, StepEvent};
