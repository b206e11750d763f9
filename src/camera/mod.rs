//! Camera system.
//!
//! A [`Camera`] holds the shared zoom and projection state; its [`Rig`]
//! decides where the camera sits and where it looks each frame (fixed,
//! third-person, fixed-tracking, free-fly player, or the legacy movable
//! rig). Projection is computed the same way for every rig.

/// Orthonormal basis construction.
pub mod basis;
/// Input actions mapped onto camera primitives.
pub mod controller;
/// Shared camera record, projection, and GPU uniform types.
pub mod core;
/// Auto-focus strategies for the player camera.
pub mod focus;
/// Legacy position/target-coupled camera.
pub mod movable;
/// Angle-driven free-fly camera.
pub mod player;
/// Pose strategies and the movement capability.
pub mod rig;
/// Target-derived cameras.
pub mod targeted;

pub use self::basis::Basis;
pub use self::controller::{CameraAction, PlayerController};
pub use self::core::{Camera, CameraUniform, ViewType};
pub use self::focus::{AutoFocus, GroundPlaneFocus, KeepFocus};
pub use self::movable::{CameraHint, MovableRig};
pub use self::player::PlayerRig;
pub use self::rig::{Movable, Rig};
pub use self::targeted::{Aim, FixedTracking, ThirdPerson};
