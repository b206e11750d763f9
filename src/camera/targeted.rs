//! Cameras whose direction is derived from a target point.

use glam::Vec3;

use crate::scene::{ObjectId, SceneObjects};

/// Position/target pair with derived direction and focal distance.
///
/// There is no way to set the direction directly: it is always
/// `normalize(target - position)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aim {
    position: Vec3,
    target: Vec3,
    focal_distance: f32,
}

impl Aim {
    /// Aim from `position` at `target`.
    #[must_use]
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            target,
            focal_distance: position.distance(target),
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

    /// Distance from the eye to the aim point.
    #[must_use]
    pub fn focal_distance(&self) -> f32 {
        self.focal_distance
    }

    /// Unit direction towards the target, `+X` if the two coincide.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        (self.target - self.position).normalize_or(Vec3::X)
    }

    /// Move the aim point and refresh the focal distance.
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
        self.focal_distance = self.position.distance(target);
    }

    /// Move the eye and refresh the focal distance.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.focal_distance = position.distance(self.target);
    }

    /// Move both endpoints at once.
    pub fn reposition(&mut self, position: Vec3, target: Vec3) {
        *self = Self::new(position, target);
    }
}

/// Chase camera trailing a followed object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThirdPerson {
    aim: Aim,
    /// Followed object.
    pub object: ObjectId,
    /// Offset scaled component-wise by the object's facing direction.
    pub offset: Vec3,
}

impl ThirdPerson {
    /// Follow `object` with the given offset.
    #[must_use]
    pub fn new(object: ObjectId, offset: Vec3) -> Self {
        Self {
            aim: Aim::new(Vec3::ZERO, Vec3::ZERO),
            object,
            offset,
        }
    }

    /// Current eye/target pair.
    #[must_use]
    pub fn aim(&self) -> &Aim {
        &self.aim
    }

    /// Re-aim at the object: `target = p`, `position = p + offset * dir`.
    ///
    /// Returns `false` when the object no longer exists; the pose is left
    /// untouched.
    pub fn follow(&mut self, objects: &SceneObjects) -> bool {
        let Some(obj) = objects.get(self.object) else {
            return false;
        };
        let p = obj.point();
        self.aim.reposition(p + self.offset * obj.direction, p);
        true
    }
}

/// Camera fixed in place that keeps turning towards an object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTracking {
    aim: Aim,
    /// Followed object.
    pub object: ObjectId,
}

impl FixedTracking {
    /// Track `object` from `position`.
    #[must_use]
    pub fn new(object: ObjectId, position: Vec3) -> Self {
        Self {
            aim: Aim::new(position, position),
            object,
        }
    }

    /// Current eye/target pair. The position never changes after
    /// construction.
    #[must_use]
    pub fn aim(&self) -> &Aim {
        &self.aim
    }

    /// Point the aim at the object. Returns `false` if it is gone.
    pub fn follow(&mut self, objects: &SceneObjects) -> bool {
        let Some(obj) = objects.get(self.object) else {
            return false;
        };
        self.aim.set_target(obj.point());
        true
    }
}
