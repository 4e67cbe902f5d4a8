pub mod error;
pub mod frame_set;

pub use error::FrameSetError;
pub use frame_set::FrameSet;
