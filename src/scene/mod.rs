//! Followed-object registry.
//!
//! Cameras that follow something hold an [`ObjectId`] handle rather than a
//! reference, and look the object up here every frame. The registry owns
//! the objects; cameras only ever read them.

use glam::{Vec3, Vec4, Vec4Swizzles};
use rustc_hash::FxHashMap;

/// Handle to a [`GameObject`] stored in [`SceneObjects`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u32);

impl ObjectId {
    /// Raw numeric id.
    #[must_use]
    pub fn raw(self) -> u32 {
        self.0
    }
}

/// Anything a camera can follow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameObject {
    /// Homogeneous world position (w = 1 for points).
    pub position: Vec4,
    /// Facing direction.
    pub direction: Vec3,
}

impl GameObject {
    /// Object at `position` facing `direction`.
    #[must_use]
    pub fn new(position: Vec3, direction: Vec3) -> Self {
        Self {
            position: position.extend(1.0),
            direction,
        }
    }

    /// Position as a point in 3D.
    #[must_use]
    pub fn point(&self) -> Vec3 {
        self.position.xyz()
    }
}

/// Registry of followable objects keyed by [`ObjectId`].
#[derive(Debug, Default)]
pub struct SceneObjects {
    objects: FxHashMap<ObjectId, GameObject>,
    next_id: u32,
}

impl SceneObjects {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object and return its handle. Handles are never reused.
    pub fn spawn(&mut self, object: GameObject) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        let _ = self.objects.insert(id, object);
        id
    }

    /// Look up an object.
    #[must_use]
    pub fn get(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects.get(&id)
    }

    /// Mutable lookup, for the simulation that drives the objects.
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut GameObject> {
        self.objects.get_mut(&id)
    }

    /// Remove an object. Cameras still holding the handle keep their last
    /// pose.
    pub fn remove(&mut self, id: ObjectId) -> Option<GameObject> {
        self.objects.remove(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawned_objects_are_points() {
        let obj = GameObject::new(Vec3::new(1.0, 2.0, 3.0), Vec3::X);
        assert_eq!(obj.position.w, 1.0);
        assert_eq!(obj.point(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn handles_are_not_reused() {
        let mut objects = SceneObjects::new();
        let a = objects.spawn(GameObject::new(Vec3::ZERO, Vec3::X));
        assert!(objects.remove(a).is_some());
        let b = objects.spawn(GameObject::new(Vec3::ONE, Vec3::X));
        assert_ne!(a, b);
        assert!(objects.get(a).is_none());
        assert_eq!(objects.get(b).map(GameObject::point), Some(Vec3::ONE));
    }

    #[test]
    fn get_mut_moves_the_object() {
        let mut objects = SceneObjects::new();
        let id = objects.spawn(GameObject::new(Vec3::ZERO, Vec3::X));
        if let Some(obj) = objects.get_mut(id) {
            obj.position = Vec4::new(5.0, 0.0, 0.0, 1.0);
        }
        assert_eq!(objects.get(id).map(GameObject::point), Some(Vec3::X * 5.0));
    }
}
