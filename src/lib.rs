// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera models, HUD snapshots and light blocks for a voxel-world game
//! client.
//!
//! Voxview provides the rendering-side state a voxel game needs each frame:
//! a family of cameras sharing one projection contract, an immutable HUD
//! snapshot handed to a background overlay compositor, and a fixed-size
//! light block laid out for a forward shader.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - zoom, projection, and a [`camera::Rig`] deciding
//!   where the camera sits (fixed, third-person, tracking, free-fly player,
//!   legacy movable)
//! - [`camera::PlayerController`] - maps held keys and mouse motion onto
//!   the player camera
//! - [`hud`] - per-frame [`hud::HudData`] snapshots and the
//!   [`hud::HudCompositor`] thread
//! - [`lighting::LightBlock`] - the shader light array
//! - [`options::Options`] - TOML-backed configuration
//!
//! # Architecture
//!
//! Cameras are updated on the render thread once per frame. Followed game
//! objects are looked up by [`scene::ObjectId`] in a [`scene::SceneObjects`]
//! registry, so cameras never own them. The HUD snapshot crosses to the
//! compositor thread through a lock-free triple buffer, and composed
//! overlays come back the same way.

pub mod camera;
pub mod error;
pub mod gpu;
pub mod hud;
pub mod lighting;
pub mod options;
pub mod scene;
pub mod util;

pub use error::VoxviewError;
