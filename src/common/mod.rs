pub mod types;

pub use types::{Page, DEFAULT_FRAME_COUNT};
