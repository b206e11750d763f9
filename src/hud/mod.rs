//! Heads-up display: per-frame snapshots and the overlay compositor.
//!
//! The render loop captures a [`HudData`] after the camera update and
//! publishes it through a lock-free triple buffer. A background
//! [`HudCompositor`] thread picks up the latest snapshot, lays out the
//! crosshair and readout text, and publishes an [`OverlayFrame`] back
//! through a second triple buffer for the renderer to draw.

/// Single-slot snapshot channel between the render loop and the compositor.
pub mod channel;
/// Background overlay layout thread.
pub mod compositor;
/// Frame snapshot captured from the active camera.
pub mod data;

pub use channel::{channel, HudPublisher, HudReader};
pub use compositor::{HudCompositor, LineSegment, OverlayFrame};
pub use data::{FrameInfo, HudData};
