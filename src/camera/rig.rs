//! Pose strategies: the per-variant rule that places a camera each frame.

use glam::Vec3;

use super::basis::Basis;
use super::movable::MovableRig;
use super::player::{angles_for_direction, PlayerRig};
use super::targeted::{Aim, FixedTracking, ThirdPerson};
use crate::scene::SceneObjects;

/// Cameras that can be walked around.
///
/// Backwards, left and down are exactly forwards, right and up with the
/// distance negated.
pub trait Movable {
    /// Move along the ground-plane forward vector.
    fn move_forwards(&mut self, dist: f32);
    /// Move along the right vector.
    fn move_right(&mut self, dist: f32);
    /// Move along world up.
    fn move_up(&mut self, dist: f32);

    /// `move_forwards(-dist)`.
    fn move_backwards(&mut self, dist: f32) {
        self.move_forwards(-dist);
    }

    /// `move_right(-dist)`.
    fn move_left(&mut self, dist: f32) {
        self.move_right(-dist);
    }

    /// `move_up(-dist)`.
    fn move_down(&mut self, dist: f32) {
        self.move_up(-dist);
    }
}

/// How a camera derives its position and direction.
#[derive(Debug)]
pub enum Rig {
    /// Position and target fixed at construction.
    Fixed(Aim),
    /// Trails a followed object.
    ThirdPerson(ThirdPerson),
    /// Stays put, aims at a followed object.
    FixedTracking(FixedTracking),
    /// Angle-driven free-fly camera.
    Player(PlayerRig),
    /// Legacy position/target camera.
    Movable(MovableRig),
}

impl Rig {
    /// Recompute the pose for this frame.
    ///
    /// Followed objects that no longer exist leave the pose unchanged.
    pub fn update(&mut self, _time: f64, _delta: f64, objects: &SceneObjects) {
        let missing = match self {
            Self::ThirdPerson(rig) => (!rig.follow(objects)).then_some(rig.object),
            Self::FixedTracking(rig) => (!rig.follow(objects)).then_some(rig.object),
            Self::Fixed(_) | Self::Player(_) | Self::Movable(_) => None,
        };
        if let Some(id) = missing {
            log::debug!("followed object {} is gone, keeping last pose", id.raw());
        }
    }

    /// Eye position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        match self {
            Self::Fixed(aim) => aim.position(),
            Self::ThirdPerson(rig) => rig.aim().position(),
            Self::FixedTracking(rig) => rig.aim().position(),
            Self::Player(rig) => rig.position(),
            Self::Movable(rig) => rig.position(),
        }
    }

    /// Unit view direction.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        match self {
            Self::Fixed(aim) => aim.direction(),
            Self::ThirdPerson(rig) => rig.aim().direction(),
            Self::FixedTracking(rig) => rig.aim().direction(),
            Self::Player(rig) => rig.direction(),
            Self::Movable(rig) => rig.direction(),
        }
    }

    /// Aim point, for rigs that have one.
    #[must_use]
    pub fn target(&self) -> Option<Vec3> {
        match self {
            Self::Fixed(aim) => Some(aim.target()),
            Self::ThirdPerson(rig) => Some(rig.aim().target()),
            Self::FixedTracking(rig) => Some(rig.aim().target()),
            Self::Player(_) => None,
            Self::Movable(rig) => Some(rig.target()),
        }
    }

    /// Distance to the focus point.
    #[must_use]
    pub fn focal_distance(&self) -> f32 {
        match self {
            Self::Fixed(aim) => aim.focal_distance(),
            Self::ThirdPerson(rig) => rig.aim().focal_distance(),
            Self::FixedTracking(rig) => rig.aim().focal_distance(),
            Self::Player(rig) => rig.focal_distance(),
            Self::Movable(rig) => rig.focal_distance(),
        }
    }

    /// Orthonormal basis of the current view.
    #[must_use]
    pub fn basis(&self) -> Basis {
        match self {
            Self::Player(rig) => rig.basis(),
            Self::Movable(rig) => rig.basis(),
            _ => {
                let dir = self.direction();
                Basis::new(dir, Basis::heading_of(dir))
            }
        }
    }

    /// `(horizontal, vertical)` angles in the player camera's convention.
    ///
    /// The player rig reports its stored angles; the other rigs derive
    /// them from their direction with [`angles_for_direction`].
    #[must_use]
    pub fn orientation_angles(&self) -> (f32, f32) {
        match self {
            Self::Player(rig) => (rig.horizontal_angle(), rig.vertical_angle()),
            Self::Movable(rig) => (rig.horizontal_angle(), rig.vertical_angle()),
            _ => angles_for_direction(self.direction()),
        }
    }

    /// The movement capability, if this rig has one.
    pub fn as_movable(&mut self) -> Option<&mut dyn Movable> {
        match self {
            Self::Player(rig) => Some(rig),
            Self::Movable(rig) => Some(rig),
            _ => None,
        }
    }
}

impl From<PlayerRig> for Rig {
    fn from(rig: PlayerRig) -> Self {
        Self::Player(rig)
    }
}

impl From<MovableRig> for Rig {
    fn from(rig: MovableRig) -> Self {
        Self::Movable(rig)
    }
}

impl From<ThirdPerson> for Rig {
    fn from(rig: ThirdPerson) -> Self {
        Self::ThirdPerson(rig)
    }
}

impl From<FixedTracking> for Rig {
    fn from(rig: FixedTracking) -> Self {
        Self::FixedTracking(rig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::GameObject;

    #[test]
    fn fixed_update_is_a_no_op() {
        let mut rig = Rig::Fixed(Aim::new(Vec3::new(0.0, 2.0, 0.0), Vec3::ZERO));
        rig.update(1.0, 0.016, &SceneObjects::new());
        assert_eq!(rig.position(), Vec3::new(0.0, 2.0, 0.0));
        assert!(rig.direction().abs_diff_eq(Vec3::NEG_Y, 1e-6));
        assert!(rig.basis().u.is_finite());
    }

    #[test]
    fn only_player_and_legacy_move() {
        let mut objects = SceneObjects::new();
        let id = objects.spawn(GameObject::new(Vec3::ZERO, Vec3::X));
        assert!(Rig::from(PlayerRig::default()).as_movable().is_some());
        assert!(Rig::from(MovableRig::default()).as_movable().is_some());
        assert!(Rig::from(ThirdPerson::new(id, Vec3::ONE)).as_movable().is_none());
        assert!(Rig::Fixed(Aim::new(Vec3::ONE, Vec3::ZERO)).as_movable().is_none());
    }

    #[test]
    fn derived_angles_match_player_convention() {
        let rig = Rig::Fixed(Aim::new(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)));
        let (h, v) = rig.orientation_angles();
        assert!(h.abs() < 1e-6);
        assert!((v - 0.5).abs() < 1e-6);
    }

    #[test]
    fn third_person_follows_each_update() {
        let mut objects = SceneObjects::new();
        let id = objects.spawn(GameObject::new(Vec3::ZERO, Vec3::X));
        let mut rig = Rig::from(ThirdPerson::new(id, Vec3::new(2.0, 0.0, 0.0)));
        rig.update(0.0, 0.0, &objects);
        assert!(rig.position().abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), 1e-6));
        assert_eq!(rig.target(), Some(Vec3::ZERO));

        if let Some(obj) = objects.get_mut(id) {
            *obj = GameObject::new(Vec3::new(0.0, 0.0, 4.0), Vec3::Z);
        }
        rig.update(0.1, 0.1, &objects);
        assert!(rig.position().abs_diff_eq(Vec3::new(0.0, 0.0, 4.0), 1e-6));
        assert_eq!(rig.target(), Some(Vec3::new(0.0, 0.0, 4.0)));
    }
}
