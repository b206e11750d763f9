//! Free-fly player camera driven by two angles.
//!
//! The vertical angle runs over `[ε-1, 1-ε]`, the horizontal angle wraps
//! over `[0, 2π)`. The view direction is
//! `RotY(h·π) · RotZ((v - 0.5)·π) · X`, so `v = 0.5` looks at the horizon
//! and `v = 0` straight down.

use std::f32::consts::{PI, TAU};

use glam::{Mat3, Vec3};

use super::basis::{Basis, WORLD_UP};
use super::focus::{AutoFocus, KeepFocus};
use super::rig::Movable;
use crate::scene::{ObjectId, SceneObjects};

/// Margin keeping the vertical angle away from ±1.
pub const VERTICAL_EPSILON: f32 = 1e-4;

/// Smallest focal distance accepted by [`PlayerRig::set_focus`].
pub const MIN_FOCUS: f32 = 0.01;

/// Angle-driven free-fly rig.
#[derive(Debug)]
pub struct PlayerRig {
    position: Vec3,
    horizontal_angle: f32,
    vertical_angle: f32,
    direction: Vec3,
    basis: Basis,
    focal_distance: f32,
    fixed_focus: bool,
    focus: Box<dyn AutoFocus>,
}

impl Default for PlayerRig {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

impl PlayerRig {
    /// Player camera at `position` with both angles zero.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self::new(position, 0.0, 0.0)
    }

    /// Player camera at `position` with the given angles (clamped/wrapped).
    #[must_use]
    pub fn new(position: Vec3, horizontal_angle: f32, vertical_angle: f32) -> Self {
        let mut rig = Self {
            position,
            horizontal_angle: 0.0,
            vertical_angle: 0.0,
            direction: Vec3::NEG_Y,
            basis: Basis::new(Vec3::NEG_Y, Vec3::X),
            focal_distance: 0.0,
            fixed_focus: false,
            focus: Box::new(KeepFocus),
        };
        rig.vertical_angle = clamp_vertical(vertical_angle).unwrap_or(0.0);
        rig.horizontal_angle = wrap_horizontal(horizontal_angle).unwrap_or(0.0);
        rig.update_directions();
        rig
    }

    /// Replace the auto-focus strategy and apply it once.
    #[must_use]
    pub fn with_auto_focus(mut self, focus: impl AutoFocus + 'static) -> Self {
        self.focus = Box::new(focus);
        if !self.fixed_focus {
            self.auto_focus();
        }
        self
    }

    /// Eye position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit view direction.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Current basis vectors.
    #[must_use]
    pub fn basis(&self) -> Basis {
        self.basis
    }

    /// Right vector.
    #[must_use]
    pub fn u(&self) -> Vec3 {
        self.basis.u
    }

    /// Camera-up vector.
    #[must_use]
    pub fn v(&self) -> Vec3 {
        self.basis.v
    }

    /// Ground-plane forward vector.
    #[must_use]
    pub fn h(&self) -> Vec3 {
        self.basis.h
    }

    /// Horizontal angle in `[0, 2π)`.
    #[must_use]
    pub fn horizontal_angle(&self) -> f32 {
        self.horizontal_angle
    }

    /// Vertical angle in `[ε-1, 1-ε]`.
    #[must_use]
    pub fn vertical_angle(&self) -> f32 {
        self.vertical_angle
    }

    /// Distance to the current focus point.
    #[must_use]
    pub fn focal_distance(&self) -> f32 {
        self.focal_distance
    }

    /// Whether auto-focus is suspended.
    #[must_use]
    pub fn fixed_focus(&self) -> bool {
        self.fixed_focus
    }

    /// Suspend or resume auto-focus.
    pub fn set_fixed_focus(&mut self, fixed: bool) {
        self.fixed_focus = fixed;
    }

    /// Set the focal distance by hand, at least [`MIN_FOCUS`].
    pub fn set_focus(&mut self, distance: f32) {
        if !distance.is_nan() {
            self.focal_distance = distance.max(MIN_FOCUS);
        }
    }

    /// Ask the auto-focus strategy for a new focal distance.
    pub fn auto_focus(&mut self) {
        if let Some(d) = self.focus.focal_distance(self.position, self.direction) {
            self.set_focus(d);
        }
    }

    /// Clamp and store the vertical angle. Non-finite input is ignored.
    pub fn set_vertical_angle(&mut self, angle: f32) {
        if let Some(v) = clamp_vertical(angle) {
            self.vertical_angle = v;
            self.update_directions();
        }
    }

    /// Wrap and store the horizontal angle. Non-finite input is ignored.
    pub fn set_horizontal_angle(&mut self, angle: f32) {
        if let Some(h) = wrap_horizontal(angle) {
            self.horizontal_angle = h;
            self.update_directions();
        }
    }

    /// Tilt up by `delta_degree` (one unit of vertical angle is 90°).
    pub fn rotate_up(&mut self, delta_degree: f32) {
        self.set_vertical_angle(self.vertical_angle + delta_degree / 90.0);
    }

    /// Tilt down.
    pub fn rotate_down(&mut self, delta_degree: f32) {
        self.rotate_up(-delta_degree);
    }

    /// Turn left by `delta_degree`, converted to radians.
    pub fn rotate_left(&mut self, delta_degree: f32) {
        self.set_horizontal_angle(self.horizontal_angle + delta_degree / 180.0 * PI);
    }

    /// Turn right.
    pub fn rotate_right(&mut self, delta_degree: f32) {
        self.rotate_left(-delta_degree);
    }

    /// Teleport to `location`.
    pub fn move_to(&mut self, location: Vec3) {
        self.position = location;
        if !self.fixed_focus {
            self.auto_focus();
        }
    }

    /// Set both angles to zero.
    pub fn reset_angles(&mut self) {
        self.set_vertical_angle(0.0);
        self.set_horizontal_angle(0.0);
    }

    /// Orient the camera towards `point`. No-op if the eye is on it.
    pub fn look_at_point(&mut self, point: Vec3) {
        let Some(dir) = (point - self.position).try_normalize() else {
            return;
        };
        let (h, v) = angles_for_direction(dir);
        self.vertical_angle = clamp_vertical(v).unwrap_or(self.vertical_angle);
        self.horizontal_angle = wrap_horizontal(h).unwrap_or(self.horizontal_angle);
        self.update_directions();
    }

    /// Orient the camera towards a followed object.
    ///
    /// Returns `false` when the handle no longer resolves.
    pub fn center_object(&mut self, objects: &SceneObjects, id: ObjectId) -> bool {
        match objects.get(id) {
            Some(obj) => {
                self.look_at_point(obj.point());
                true
            }
            None => {
                log::debug!("center_object: object {} is gone", id.raw());
                false
            }
        }
    }

    fn update_directions(&mut self) {
        let rot_y = Mat3::from_rotation_y(self.horizontal_angle * PI);

        self.direction =
            rot_y * Mat3::from_rotation_z((self.vertical_angle - 0.5) * PI) * Vec3::X;
        self.basis = Basis::new(self.direction, rot_y * Vec3::X);

        if !self.fixed_focus {
            self.auto_focus();
        }
    }
}

impl Movable for PlayerRig {
    fn move_forwards(&mut self, dist: f32) {
        self.move_to(self.position + self.basis.h * dist);
    }

    fn move_right(&mut self, dist: f32) {
        self.move_to(self.position + self.basis.u * dist);
    }

    fn move_up(&mut self, dist: f32) {
        self.move_to(self.position + WORLD_UP * dist);
    }
}

/// Player angles `(horizontal, vertical)` whose view direction is
/// `direction`. Inverse of the player's direction formula.
#[must_use]
pub fn angles_for_direction(direction: Vec3) -> (f32, f32) {
    let d = direction.normalize_or(Vec3::X);
    let vertical = (-d.y).clamp(-1.0, 1.0).acos() / PI;
    let heading = (-d.z).atan2(d.x);
    let horizontal = (heading / PI).rem_euclid(2.0);
    (horizontal, vertical)
}

fn clamp_vertical(angle: f32) -> Option<f32> {
    if angle.is_nan() {
        return None;
    }
    Some(angle.clamp(VERTICAL_EPSILON - 1.0, 1.0 - VERTICAL_EPSILON))
}

fn wrap_horizontal(angle: f32) -> Option<f32> {
    if !angle.is_finite() {
        return None;
    }
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    Some(if wrapped >= TAU { 0.0 } else { wrapped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::focus::GroundPlaneFocus;
    use crate::scene::GameObject;

    fn assert_unit(v: Vec3) {
        assert!((v.length() - 1.0).abs() < 1e-5, "not unit: {v:?}");
    }

    #[test]
    fn horizon_looks_along_x() {
        let rig = PlayerRig::new(Vec3::ZERO, 0.0, 0.5);
        assert!(rig.direction().abs_diff_eq(Vec3::X, 1e-6));
        assert!(rig.h().abs_diff_eq(Vec3::X, 1e-6));
        assert!(rig.u().abs_diff_eq(Vec3::Z, 1e-6));
        assert!(rig.v().abs_diff_eq(Vec3::Y, 1e-6));
        for axis in [rig.u(), rig.v(), rig.h()] {
            assert_unit(axis);
        }
        assert!(rig.u().dot(rig.v()).abs() < 1e-6);
        assert!(rig.u().dot(rig.h()).abs() < 1e-6);
        assert!(rig.v().dot(rig.h()).abs() < 1e-6);
    }

    #[test]
    fn vertical_angle_is_clamped() {
        let mut rig = PlayerRig::default();
        for v in [-10.0, -1.0, -0.3, 0.0, 0.7, 1.0, 42.0] {
            rig.set_vertical_angle(v);
            let stored = rig.vertical_angle();
            assert!(stored >= VERTICAL_EPSILON - 1.0);
            assert!(stored <= 1.0 - VERTICAL_EPSILON);
            assert_unit(rig.direction());
        }
        rig.set_vertical_angle(f32::NAN);
        assert_eq!(rig.vertical_angle(), 1.0 - VERTICAL_EPSILON);
    }

    #[test]
    fn horizontal_angle_wraps() {
        let mut rig = PlayerRig::default();
        for h in [-7.0f32, -TAU, -0.5, 0.0, 1.0, TAU, 3.0 * TAU + 0.25, 100.0] {
            rig.set_horizontal_angle(h);
            let stored = rig.horizontal_angle();
            assert!((0.0..TAU).contains(&stored), "{h} -> {stored}");
            let diff = (stored - h).rem_euclid(TAU);
            assert!(diff < 1e-3 || TAU - diff < 1e-3, "{h} -> {stored}");
            assert_unit(rig.direction());
        }
        rig.set_horizontal_angle(-1e-9);
        assert!(rig.horizontal_angle() < TAU);
    }

    #[test]
    fn rotation_scale_factors() {
        let mut rig = PlayerRig::new(Vec3::ZERO, 0.0, 0.5);
        rig.rotate_up(9.0);
        assert!((rig.vertical_angle() - 0.6).abs() < 1e-6);
        rig.rotate_down(9.0);
        assert!((rig.vertical_angle() - 0.5).abs() < 1e-6);
        rig.rotate_left(90.0);
        assert!((rig.horizontal_angle() - PI / 2.0).abs() < 1e-6);
        rig.rotate_right(180.0);
        assert!((rig.horizontal_angle() - 1.5 * PI).abs() < 1e-5);
    }

    #[test]
    fn reset_angles_zeroes_both() {
        let mut rig = PlayerRig::new(Vec3::ONE, 2.0, 0.3);
        rig.reset_angles();
        assert_eq!(rig.horizontal_angle(), 0.0);
        assert_eq!(rig.vertical_angle(), 0.0);
        assert!(rig.direction().abs_diff_eq(Vec3::NEG_Y, 1e-6));
        assert!(rig.u().is_finite() && rig.v().is_finite());
    }

    #[test]
    fn backwards_mirrors_forwards() {
        let mut a = PlayerRig::new(Vec3::ZERO, 0.7, 0.4);
        let mut b = PlayerRig::new(Vec3::ZERO, 0.7, 0.4);
        for d in [-3.0, 0.0, 0.5, 12.0] {
            a.move_backwards(d);
            b.move_forwards(-d);
            assert!(a.position().abs_diff_eq(b.position(), 1e-6));
            a.move_left(d);
            b.move_right(-d);
            a.move_down(d);
            b.move_up(-d);
            assert!(a.position().abs_diff_eq(b.position(), 1e-6));
        }
    }

    #[test]
    fn forward_ignores_tilt() {
        let mut rig = PlayerRig::new(Vec3::ZERO, 0.0, 0.9);
        rig.move_forwards(2.0);
        assert!(rig.position().abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), 1e-5));
        rig.move_up(1.0);
        assert!((rig.position().y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn look_at_point_round_trips() {
        let mut rig = PlayerRig::at(Vec3::new(1.0, 1.0, 1.0));
        let target = Vec3::new(4.0, 5.0, 1.0);
        rig.look_at_point(target);
        let expected = (target - rig.position()).normalize();
        assert!(rig.direction().abs_diff_eq(expected, 1e-4), "{:?}", rig.direction());

        rig.look_at_point(Vec3::new(1.0, 1.0, -9.0));
        assert!(rig.direction().abs_diff_eq(Vec3::NEG_Z, 1e-4));
    }

    #[test]
    fn center_object_uses_registry() {
        let mut objects = SceneObjects::new();
        let id = objects.spawn(GameObject::new(Vec3::new(-5.0, 0.0, 0.0), Vec3::X));
        let mut rig = PlayerRig::default();
        assert!(rig.center_object(&objects, id));
        assert!(rig.direction().abs_diff_eq(Vec3::NEG_X, 1e-4));
        let _ = objects.remove(id);
        assert!(!rig.center_object(&objects, id));
    }

    #[test]
    fn auto_focus_respects_fixed_focus() {
        let focus = GroundPlaneFocus {
            ground_y: 0.0,
            fallback: 100.0,
        };
        let mut rig = PlayerRig::new(Vec3::new(0.0, 10.0, 0.0), 0.0, 0.0)
            .with_auto_focus(focus);
        assert!((rig.focal_distance() - 10.0).abs() < 1e-4);

        rig.set_fixed_focus(true);
        rig.set_vertical_angle(0.5);
        assert!((rig.focal_distance() - 10.0).abs() < 1e-4);

        rig.set_fixed_focus(false);
        rig.rotate_up(1.0);
        assert_eq!(rig.focal_distance(), 100.0);
    }

    #[test]
    fn set_focus_has_a_floor() {
        let mut rig = PlayerRig::default();
        rig.set_focus(-4.0);
        assert_eq!(rig.focal_distance(), MIN_FOCUS);
        rig.set_focus(7.5);
        assert_eq!(rig.focal_distance(), 7.5);
    }
}
