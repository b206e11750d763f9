//! Shared utilities.

/// Frame clock with FPS smoothing and frame limiting.
pub mod frame_timing;
