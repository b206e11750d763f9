//! Legacy position/target camera.
//!
//! Superseded by [`PlayerRig`](super::player::PlayerRig); kept so old saved
//! camera states still load and behave the same way. Position and target
//! are coupled through a [`CameraHint`].

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::basis::Basis;
use super::player::angles_for_direction;
use super::rig::Movable;
use crate::scene::{ObjectId, SceneObjects};

/// How moving one endpoint affects the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraHint {
    /// The other endpoint stays where it is.
    #[default]
    LockTarget,
    /// The other endpoint moves by the same delta, keeping the view angles.
    LockAngles,
}

/// Legacy movable camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovableRig {
    position: Vec3,
    target: Vec3,
    /// Coupling mode for position/target edits.
    pub hint: CameraHint,
}

impl Default for MovableRig {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 1.0, 1.0), Vec3::ZERO)
    }
}

impl MovableRig {
    /// Camera at `position` looking at `target`.
    #[must_use]
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            hint: CameraHint::LockTarget,
        }
    }

    /// Eye position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Aim point.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// `|target - position|`.
    #[must_use]
    pub fn focal_distance(&self) -> f32 {
        self.position.distance(self.target)
    }

    /// Backwards vector, `+X` if position and target coincide.
    #[must_use]
    pub fn w(&self) -> Vec3 {
        (self.position - self.target).normalize_or(Vec3::X)
    }

    /// Unit view direction (`-W`).
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        -self.w()
    }

    /// Full basis of the current view.
    #[must_use]
    pub fn basis(&self) -> Basis {
        let view = self.direction();
        Basis::new(view, Basis::heading_of(view))
    }

    /// Vertical angle in the player convention: 0 straight down, 0.5 at
    /// the horizon, 1 straight up.
    #[must_use]
    pub fn vertical_angle(&self) -> f32 {
        angles_for_direction(self.direction()).1
    }

    /// Horizontal angle in the player convention, in `[0, 2)` half turns.
    #[must_use]
    pub fn horizontal_angle(&self) -> f32 {
        angles_for_direction(self.direction()).0
    }

    /// Move the eye. With [`CameraHint::LockAngles`] the target follows.
    pub fn set_position(&mut self, position: Vec3) {
        if self.hint == CameraHint::LockAngles {
            self.target += position - self.position;
        }
        self.position = position;
    }

    /// Move the aim point. With [`CameraHint::LockAngles`] the eye follows.
    pub fn set_target(&mut self, target: Vec3) {
        if self.hint == CameraHint::LockAngles {
            self.position += target - self.target;
        }
        self.target = target;
    }

    /// Retarget onto a followed object. Returns `false` if it is gone.
    pub fn focus(&mut self, objects: &SceneObjects, id: ObjectId) -> bool {
        let Some(obj) = objects.get(id) else {
            return false;
        };
        self.set_target(obj.point());
        true
    }
}

impl Movable for MovableRig {
    fn move_forwards(&mut self, dist: f32) {
        let h = self.basis().h;
        self.set_position(self.position + dist * h);
    }

    fn move_right(&mut self, dist: f32) {
        let u = self.basis().u;
        self.set_position(self.position + dist * u);
    }

    fn move_up(&mut self, dist: f32) {
        self.set_position(self.position + Vec3::new(0.0, dist, 0.0));
    }
}
