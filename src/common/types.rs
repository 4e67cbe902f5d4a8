/// Page identifier as it appears in a reference trace
pub type Page = i64;

/// Number of frames used when none is given
pub const DEFAULT_FRAME_COUNT: usize = 3;
