use glam::{Mat4, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::basis::{is_vertical, WORLD_UP};
use super::movable::MovableRig;
use super::player::PlayerRig;
use super::rig::{Movable, Rig};
use super::targeted::{Aim, FixedTracking, ThirdPerson};
use crate::options::CameraOptions;
use crate::scene::{ObjectId, SceneObjects};

/// Near clipping plane distance, shared by every camera.
pub const NEAR_PLANE: f32 = 0.01;
/// Far clipping plane distance, shared by every camera.
pub const FAR_PLANE: f32 = 10_000.0;
/// Narrowest field of view in degrees.
pub const MIN_ZOOM: f32 = 2.0;
/// Widest field of view in degrees.
pub const MAX_ZOOM: f32 = 135.0;
/// Field of view restored by [`Camera::reset_zoom`].
pub const DEFAULT_ZOOM: f32 = 60.0;

/// Projection applied after the look-at transform.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ViewType {
    /// No projection beyond the view transform.
    Orthogonal,
    /// Perspective projection with the camera's field of view.
    #[default]
    Perspective,
}

impl ViewType {
    /// The other view type.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Orthogonal => Self::Perspective,
            Self::Perspective => Self::Orthogonal,
        }
    }
}

/// A camera: shared zoom/projection state plus a [`Rig`] that places it.
#[derive(Debug)]
pub struct Camera {
    /// Projection kind used by [`Camera::update`].
    pub view_type: ViewType,
    field_of_view: f32,
    projection: Mat4,
    rig: Rig,
}

impl Camera {
    /// Camera driven by `rig`, perspective, zoom 60.
    #[must_use]
    pub fn new(rig: impl Into<Rig>) -> Self {
        Self {
            view_type: ViewType::Perspective,
            field_of_view: DEFAULT_ZOOM,
            projection: Mat4::IDENTITY,
            rig: rig.into(),
        }
    }

    /// Camera at `position` looking at `target`, never moving.
    #[must_use]
    pub fn fixed(position: Vec3, target: Vec3) -> Self {
        Self::new(Rig::Fixed(Aim::new(position, target)))
    }

    /// Camera trailing `object` at `offset`.
    #[must_use]
    pub fn third_person(object: ObjectId, offset: Vec3) -> Self {
        Self::new(ThirdPerson::new(object, offset))
    }

    /// Camera at `position` that keeps aiming at `object`.
    #[must_use]
    pub fn fixed_tracking(object: ObjectId, position: Vec3) -> Self {
        Self::new(FixedTracking::new(object, position))
    }

    /// Free-fly player camera.
    #[must_use]
    pub fn player(rig: PlayerRig) -> Self {
        Self::new(rig)
    }

    /// Legacy movable camera.
    #[must_use]
    pub fn movable(rig: MovableRig) -> Self {
        Self::new(rig)
    }

    /// Apply the configured initial zoom and view type.
    pub fn configure(&mut self, options: &CameraOptions) {
        self.view_type = options.view_type;
        self.set_zoom_factor(options.zoom);
    }

    /// Recompute the rig pose, then the view-projection matrix.
    ///
    /// A non-positive or non-finite `aspect_ratio` is treated as 1.
    pub fn update(
        &mut self,
        time: f64,
        delta: f64,
        aspect_ratio: f32,
        objects: &SceneObjects,
    ) {
        self.rig.update(time, delta, objects);
        self.projection = self.build_matrix(aspect_ratio);
    }

    /// Combined view-projection matrix for the current pose.
    #[must_use]
    pub fn build_matrix(&self, aspect_ratio: f32) -> Mat4 {
        let position = self.position();
        let direction = self.direction();
        let up = if is_vertical(direction) {
            self.rig.basis().v
        } else {
            WORLD_UP
        };
        // Built from the direction itself; `position + direction` loses the
        // horizontal part of a near-vertical view far from the origin.
        let view = Mat4::look_to_rh(position, direction, up);

        match self.view_type {
            ViewType::Orthogonal => view,
            ViewType::Perspective => {
                let aspect = if aspect_ratio.is_finite() && aspect_ratio > 0.0 {
                    aspect_ratio
                } else {
                    log::debug!("invalid aspect ratio {aspect_ratio}, using 1");
                    1.0
                };
                // perspective_rh uses the [0,1] depth range (wgpu/Vulkan
                // convention)
                let proj = Mat4::perspective_rh(
                    self.field_of_view.to_radians(),
                    aspect,
                    NEAR_PLANE,
                    FAR_PLANE,
                );
                proj * view
            }
        }
    }

    /// View-projection matrix from the last [`Camera::update`].
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// Field of view in degrees.
    #[must_use]
    pub fn zoom_factor(&self) -> f32 {
        self.field_of_view
    }

    /// Set the field of view, clamped to `[2, 135]`. NaN is ignored.
    pub fn set_zoom_factor(&mut self, degrees: f32) {
        if !degrees.is_nan() {
            self.field_of_view = degrees.clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }

    /// Restore the default 60° field of view.
    pub fn reset_zoom(&mut self) {
        self.set_zoom_factor(DEFAULT_ZOOM);
    }

    /// Eye position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.rig.position()
    }

    /// Unit view direction.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        self.rig.direction()
    }

    /// Aim point, `None` for the player camera.
    #[must_use]
    pub fn target(&self) -> Option<Vec3> {
        self.rig.target()
    }

    /// Distance to the focus point.
    #[must_use]
    pub fn focal_distance(&self) -> f32 {
        self.rig.focal_distance()
    }

    /// `(horizontal, vertical)` angles, see [`Rig::orientation_angles`].
    #[must_use]
    pub fn orientation_angles(&self) -> (f32, f32) {
        self.rig.orientation_angles()
    }

    /// The pose strategy.
    #[must_use]
    pub fn rig(&self) -> &Rig {
        &self.rig
    }

    /// The player rig, if this is a player camera.
    #[must_use]
    pub fn player_rig(&self) -> Option<&PlayerRig> {
        match &self.rig {
            Rig::Player(rig) => Some(rig),
            _ => None,
        }
    }

    /// Mutable player rig, if this is a player camera.
    pub fn player_rig_mut(&mut self) -> Option<&mut PlayerRig> {
        match &mut self.rig {
            Rig::Player(rig) => Some(rig),
            _ => None,
        }
    }

    /// Movement capability, for player and legacy cameras.
    pub fn movable_mut(&mut self) -> Option<&mut dyn Movable> {
        self.rig.as_movable()
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Distance to the focus point, for depth-of-field effects.
    pub focal_distance: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Field of view in degrees.
    pub fovy: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            focal_distance: 0.0,
            forward: [1.0, 0.0, 0.0],
            fovy: DEFAULT_ZOOM,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.projection().to_cols_array_2d();
        self.position = camera.position().to_array();
        self.focal_distance = camera.focal_distance();
        self.forward = camera.direction().to_array();
        self.fovy = camera.zoom_factor();
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;
    use crate::scene::GameObject;

    fn is_finite(m: Mat4) -> bool {
        m.to_cols_array().iter().all(|x| x.is_finite())
    }

    #[test]
    fn near_vertical_view_far_from_origin_is_finite() {
        let objects = SceneObjects::new();
        let mut player = Camera::player(PlayerRig::new(Vec3::new(10_000.0, 64.0, 0.0), 0.0, 0.5));
        if let Some(rig) = player.player_rig_mut() {
            rig.rotate_up(3600.0);
        }
        assert!(player.direction().y > 0.9999);
        player.update(0.0, 0.016, 16.0 / 9.0, &objects);
        assert!(is_finite(player.projection()));

        let mut fixed = Camera::fixed(
            Vec3::new(1000.0, 0.0, 0.0),
            Vec3::new(1000.0012, 100.0, 0.0),
        );
        fixed.update(0.0, 0.016, 16.0 / 9.0, &objects);
        assert!(is_finite(fixed.projection()));
        fixed.view_type = ViewType::Orthogonal;
        fixed.update(0.0, 0.016, 16.0 / 9.0, &objects);
        assert!(is_finite(fixed.projection()));
    }

    #[test]
    fn fixed_positions_survive_updates() {
        let mut objects = SceneObjects::new();
        let id = objects.spawn(GameObject::new(Vec3::new(0.0, 0.0, -5.0), Vec3::X));
        let mut fixed = Camera::fixed(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO);
        let mut tracking = Camera::fixed_tracking(id, Vec3::new(0.0, 8.0, 0.0));
        for step in 0..3 {
            if let Some(obj) = objects.get_mut(id) {
                obj.position = Vec4::new(step as f32, 0.0, -5.0, 1.0);
            }
            fixed.update(f64::from(step), 0.016, 1.0, &objects);
            tracking.update(f64::from(step), 0.016, 1.0, &objects);
        }
        assert_eq!(fixed.position(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(tracking.position(), Vec3::new(0.0, 8.0, 0.0));
        assert_eq!(tracking.rig().target(), Some(Vec3::new(2.0, 0.0, -5.0)));
        assert!(fixed.movable_mut().is_none());
        assert!(tracking.movable_mut().is_none());
    }

    #[test]
    fn configure_applies_options() {
        let mut cam = Camera::fixed(Vec3::Z, Vec3::ZERO);
        cam.configure(&CameraOptions {
            zoom: 500.0,
            view_type: ViewType::Orthogonal,
            ..CameraOptions::default()
        });
        assert_eq!(cam.zoom_factor(), 135.0);
        assert_eq!(cam.view_type, ViewType::Orthogonal);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = Camera::fixed(Vec3::Z, Vec3::ZERO);
        assert_eq!(cam.zoom_factor(), 60.0);
        for (input, expected) in [
            (-5.0, 2.0),
            (1.0, 2.0),
            (2.0, 2.0),
            (45.0, 45.0),
            (135.0, 135.0),
            (500.0, 135.0),
        ] {
            cam.set_zoom_factor(input);
            assert_eq!(cam.zoom_factor(), expected);
        }
        cam.set_zoom_factor(f32::NAN);
        assert_eq!(cam.zoom_factor(), 135.0);
        cam.reset_zoom();
        assert_eq!(cam.zoom_factor(), 60.0);
    }

    #[test]
    fn projection_recomputed_every_update() {
        let mut objects = SceneObjects::new();
        let id = objects.spawn(GameObject::new(Vec3::new(0.0, 0.0, -5.0), Vec3::X));
        let mut cam = Camera::fixed_tracking(id, Vec3::ZERO);
        cam.update(0.0, 0.016, 16.0 / 9.0, &objects);
        let first = cam.projection();

        if let Some(obj) = objects.get_mut(id) {
            obj.position = Vec4::new(5.0, 0.0, 0.0, 1.0);
        }
        cam.update(0.016, 0.016, 16.0 / 9.0, &objects);
        assert_ne!(first, cam.projection());
        assert!(is_finite(cam.projection()));
    }

    #[test]
    fn target_lands_in_front_of_the_camera() {
        let mut cam = Camera::fixed(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        cam.update(0.0, 0.016, 1.0, &SceneObjects::new());
        let clip = cam.projection() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5);
        assert!((0.0..=1.0).contains(&ndc.z));
    }

    #[test]
    fn orthogonal_is_view_only() {
        let mut cam = Camera::fixed(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        cam.view_type = ViewType::Orthogonal;
        cam.update(0.0, 0.016, 2.0, &SceneObjects::new());
        let expected =
            Mat4::look_at_rh(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
        assert!(cam.projection().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn vertical_view_stays_finite() {
        let mut cam = Camera::player(PlayerRig::default());
        cam.update(0.0, 0.016, 1.5, &SceneObjects::new());
        assert!(is_finite(cam.projection()));

        let mut top_down = Camera::fixed(Vec3::new(0.0, 20.0, 0.0), Vec3::ZERO);
        top_down.update(0.0, 0.016, 1.5, &SceneObjects::new());
        assert!(is_finite(top_down.projection()));
    }

    #[test]
    fn bad_aspect_ratio_is_replaced() {
        let mut cam = Camera::fixed(Vec3::Z, Vec3::ZERO);
        cam.update(0.0, 0.016, 0.0, &SceneObjects::new());
        let zero = cam.projection();
        cam.update(0.0, 0.016, 1.0, &SceneObjects::new());
        assert!(zero.abs_diff_eq(cam.projection(), 1e-6));
        cam.update(0.0, 0.016, f32::NAN, &SceneObjects::new());
        assert!(is_finite(cam.projection()));
    }

    #[test]
    fn direction_is_unit_for_every_rig() {
        let mut objects = SceneObjects::new();
        let id = objects.spawn(GameObject::new(Vec3::new(3.0, 1.0, -2.0), Vec3::Z));
        let mut cameras = [
            Camera::fixed(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO),
            Camera::third_person(id, Vec3::new(0.0, 2.0, -4.0)),
            Camera::fixed_tracking(id, Vec3::new(0.0, 10.0, 0.0)),
            Camera::player(PlayerRig::new(Vec3::ZERO, 1.3, 0.2)),
            Camera::movable(MovableRig::default()),
        ];
        for cam in &mut cameras {
            cam.update(0.0, 0.016, 1.0, &objects);
            assert!((cam.direction().length() - 1.0).abs() < 1e-5);
            if let Some(m) = cam.movable_mut() {
                m.move_forwards(3.0);
                m.move_left(1.0);
            }
            if let Some(p) = cam.player_rig_mut() {
                p.rotate_up(33.0);
                p.rotate_left(-270.0);
            }
            cam.update(0.016, 0.016, 1.0, &objects);
            assert!((cam.direction().length() - 1.0).abs() < 1e-5);
            assert!(is_finite(cam.projection()));
        }
    }

    #[test]
    fn uniform_mirrors_camera() {
        let mut cam = Camera::fixed(Vec3::new(0.0, 0.0, 4.0), Vec3::ZERO);
        cam.set_zoom_factor(75.0);
        cam.update(0.0, 0.016, 1.0, &SceneObjects::new());
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&cam);
        assert_eq!(uniform.position, [0.0, 0.0, 4.0]);
        assert_eq!(uniform.fovy, 75.0);
        assert!((uniform.focal_distance - 4.0).abs() < 1e-6);
        assert_eq!(size_of::<CameraUniform>(), 96);
    }
}
