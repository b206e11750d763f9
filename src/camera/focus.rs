//! Auto-focus strategies for the player camera.

use std::fmt;

use glam::Vec3;

/// Picks a focal distance whenever the player camera re-orients.
///
/// Returning `None` keeps the current focal distance.
pub trait AutoFocus: fmt::Debug + Send {
    /// Focal distance for an eye at `position` looking along `direction`.
    fn focal_distance(&self, position: Vec3, direction: Vec3) -> Option<f32>;
}

/// Never changes the focal distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepFocus;

impl AutoFocus for KeepFocus {
    fn focal_distance(&self, _position: Vec3, _direction: Vec3) -> Option<f32> {
        None
    }
}

/// Focuses where the view ray meets a horizontal ground plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundPlaneFocus {
    /// Height of the plane.
    pub ground_y: f32,
    /// Distance used when the ray never reaches the plane.
    pub fallback: f32,
}

impl AutoFocus for GroundPlaneFocus {
    fn focal_distance(&self, position: Vec3, direction: Vec3) -> Option<f32> {
        let height = position.y - self.ground_y;
        // Ray must head towards the plane.
        if direction.y.abs() < 1e-6 || height * direction.y >= 0.0 {
            return Some(self.fallback);
        }
        Some(-height / direction.y)
    }
}
