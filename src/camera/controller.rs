use rustc_hash::FxHashSet;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::core::Camera;
use crate::options::{CameraOptions, KeybindingOptions};

/// Camera actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// move_forwards = "KeyW"
/// reset_zoom = "KeyZ"
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CameraAction {
    /// Walk along the ground heading.
    MoveForwards,
    /// Walk against the ground heading.
    MoveBackwards,
    /// Strafe left.
    MoveLeft,
    /// Strafe right.
    MoveRight,
    /// Rise along world up.
    MoveUp,
    /// Sink along world up.
    MoveDown,
    /// Tilt up.
    RotateUp,
    /// Tilt down.
    RotateDown,
    /// Turn left.
    RotateLeft,
    /// Turn right.
    RotateRight,
    /// Narrow the field of view.
    ZoomIn,
    /// Widen the field of view.
    ZoomOut,
    /// Back to the default field of view.
    ResetZoom,
    /// Back to zero angles.
    ResetAngles,
    /// Switch between perspective and orthogonal.
    ToggleViewType,
}

impl CameraAction {
    /// Every action, in application order.
    pub const ALL: [Self; 15] = [
        Self::MoveForwards,
        Self::MoveBackwards,
        Self::MoveLeft,
        Self::MoveRight,
        Self::MoveUp,
        Self::MoveDown,
        Self::RotateUp,
        Self::RotateDown,
        Self::RotateLeft,
        Self::RotateRight,
        Self::ZoomIn,
        Self::ZoomOut,
        Self::ResetZoom,
        Self::ResetAngles,
        Self::ToggleViewType,
    ];

    /// Whether the action fires once per press rather than while held.
    #[must_use]
    pub fn is_one_shot(self) -> bool {
        matches!(
            self,
            Self::ResetZoom | Self::ResetAngles | Self::ToggleViewType
        )
    }
}

/// Turns held actions and mouse motion into camera primitives.
#[derive(Debug)]
pub struct PlayerController {
    held: FxHashSet<CameraAction>,
    pending: Vec<CameraAction>,
    look_delta: (f32, f32),
    /// World units per second.
    pub move_speed: f32,
    /// Degrees per second for held rotation keys.
    pub rotate_speed: f32,
    /// Degrees per second for held zoom keys.
    pub zoom_speed: f32,
    /// Degrees per pixel of mouse motion.
    pub mouse_sensitivity: f32,
}

impl PlayerController {
    /// Controller with speeds taken from the camera options.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        Self {
            held: FxHashSet::default(),
            pending: Vec::new(),
            look_delta: (0.0, 0.0),
            move_speed: options.move_speed,
            rotate_speed: options.rotate_speed,
            zoom_speed: options.zoom_speed,
            mouse_sensitivity: options.mouse_sensitivity,
        }
    }

    /// Start an action. One-shot actions are queued for the next
    /// [`apply`](Self::apply).
    pub fn press(&mut self, action: CameraAction) {
        if action.is_one_shot() {
            self.pending.push(action);
        } else {
            let _ = self.held.insert(action);
        }
    }

    /// Stop a held action.
    pub fn release(&mut self, action: CameraAction) {
        let _ = self.held.remove(&action);
    }

    /// Press whatever action `key` is bound to. Returns true if bound.
    pub fn press_key(&mut self, key: &str, bindings: &KeybindingOptions) -> bool {
        let Some(action) = bindings.lookup(key) else {
            return false;
        };
        self.press(action);
        true
    }

    /// Release whatever action `key` is bound to. Returns true if bound.
    pub fn release_key(&mut self, key: &str, bindings: &KeybindingOptions) -> bool {
        let Some(action) = bindings.lookup(key) else {
            return false;
        };
        self.release(action);
        true
    }

    /// Whether an action is currently held.
    #[must_use]
    pub fn is_held(&self, action: CameraAction) -> bool {
        self.held.contains(&action)
    }

    /// Accumulate mouse motion in pixels (positive x right, positive y
    /// down).
    pub fn look(&mut self, dx: f32, dy: f32) {
        self.look_delta.0 += dx;
        self.look_delta.1 += dy;
    }

    /// Release everything and drop queued actions and mouse motion.
    pub fn clear(&mut self) {
        self.held.clear();
        self.pending.clear();
        self.look_delta = (0.0, 0.0);
    }

    /// Apply one frame of input to `camera`.
    ///
    /// Movement only affects cameras with the movement capability and
    /// rotation only the player camera; zoom and view type apply to all.
    pub fn apply(&mut self, camera: &mut Camera, delta: f32) {
        let step = self.move_speed * delta;
        let turn = self.rotate_speed * delta;
        let zoom = self.zoom_speed * delta;
        let (dx, dy) = std::mem::take(&mut self.look_delta);

        for action in CameraAction::ALL {
            if !self.held.contains(&action) {
                continue;
            }
            match action {
                CameraAction::ZoomIn => {
                    camera.set_zoom_factor(camera.zoom_factor() - zoom);
                }
                CameraAction::ZoomOut => {
                    camera.set_zoom_factor(camera.zoom_factor() + zoom);
                }
                _ => {}
            }
            if let Some(m) = camera.movable_mut() {
                match action {
                    CameraAction::MoveForwards => m.move_forwards(step),
                    CameraAction::MoveBackwards => m.move_backwards(step),
                    CameraAction::MoveLeft => m.move_left(step),
                    CameraAction::MoveRight => m.move_right(step),
                    CameraAction::MoveUp => m.move_up(step),
                    CameraAction::MoveDown => m.move_down(step),
                    _ => {}
                }
            }
            if let Some(p) = camera.player_rig_mut() {
                match action {
                    CameraAction::RotateUp => p.rotate_up(turn),
                    CameraAction::RotateDown => p.rotate_down(turn),
                    CameraAction::RotateLeft => p.rotate_left(turn),
                    CameraAction::RotateRight => p.rotate_right(turn),
                    _ => {}
                }
            }
        }

        if let Some(p) = camera.player_rig_mut() {
            if dx != 0.0 {
                p.rotate_right(dx * self.mouse_sensitivity);
            }
            if dy != 0.0 {
                p.rotate_down(dy * self.mouse_sensitivity);
            }
        }

        for action in self.pending.drain(..) {
            match action {
                CameraAction::ResetZoom => camera.reset_zoom(),
                CameraAction::ResetAngles => {
                    if let Some(p) = camera.player_rig_mut() {
                        p.reset_angles();
                    }
                }
                CameraAction::ToggleViewType => {
                    camera.view_type = camera.view_type.toggled();
                    log::debug!("view type now {:?}", camera.view_type);
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::camera::core::ViewType;
    use crate::camera::player::PlayerRig;

    fn player_camera() -> Camera {
        Camera::player(PlayerRig::new(Vec3::ZERO, 0.0, 0.5))
    }

    #[test]
    fn held_forward_moves_speed_times_delta() {
        let mut ctl = PlayerController::new(&CameraOptions::default());
        ctl.move_speed = 4.0;
        let mut cam = player_camera();
        ctl.press(CameraAction::MoveForwards);
        ctl.apply(&mut cam, 0.5);
        assert!(cam.position().abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), 1e-5));

        ctl.release(CameraAction::MoveForwards);
        ctl.apply(&mut cam, 0.5);
        assert!(cam.position().abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut ctl = PlayerController::new(&CameraOptions::default());
        let mut cam = player_camera();
        ctl.press(CameraAction::MoveLeft);
        ctl.press(CameraAction::MoveRight);
        ctl.press(CameraAction::MoveUp);
        ctl.press(CameraAction::MoveDown);
        ctl.apply(&mut cam, 0.25);
        assert!(cam.position().abs_diff_eq(Vec3::ZERO, 1e-5));
    }

    #[test]
    fn mouse_look_turns_player() {
        let mut ctl = PlayerController::new(&CameraOptions::default());
        ctl.mouse_sensitivity = 0.5;
        let mut cam = player_camera();
        ctl.look(-180.0, 0.0);
        ctl.apply(&mut cam, 0.016);
        let h = cam.player_rig().map_or(0.0, PlayerRig::horizontal_angle);
        assert!((h - std::f32::consts::FRAC_PI_2).abs() < 1e-5);

        // Motion is consumed.
        ctl.apply(&mut cam, 0.016);
        let h2 = cam.player_rig().map_or(0.0, PlayerRig::horizontal_angle);
        assert_eq!(h, h2);
    }

    #[test]
    fn one_shot_actions_fire_once() {
        let mut ctl = PlayerController::new(&CameraOptions::default());
        let mut cam = player_camera();
        cam.set_zoom_factor(20.0);
        ctl.press(CameraAction::ResetZoom);
        ctl.press(CameraAction::ToggleViewType);
        assert!(!ctl.is_held(CameraAction::ResetZoom));
        ctl.apply(&mut cam, 0.016);
        assert_eq!(cam.zoom_factor(), 60.0);
        assert_eq!(cam.view_type, ViewType::Orthogonal);
        ctl.apply(&mut cam, 0.016);
        assert_eq!(cam.view_type, ViewType::Orthogonal);
    }

    #[test]
    fn held_zoom_is_clamped() {
        let mut ctl = PlayerController::new(&CameraOptions::default());
        ctl.zoom_speed = 1000.0;
        let mut cam = Camera::fixed(Vec3::Z, Vec3::ZERO);
        ctl.press(CameraAction::ZoomIn);
        ctl.apply(&mut cam, 1.0);
        assert_eq!(cam.zoom_factor(), 2.0);
    }

    #[test]
    fn fixed_camera_ignores_movement() {
        let mut ctl = PlayerController::new(&CameraOptions::default());
        let mut cam = Camera::fixed(Vec3::Z, Vec3::ZERO);
        ctl.press(CameraAction::MoveForwards);
        ctl.press(CameraAction::RotateLeft);
        ctl.apply(&mut cam, 1.0);
        assert_eq!(cam.position(), Vec3::Z);
    }

    #[test]
    fn keys_go_through_bindings() {
        let bindings = KeybindingOptions::default();
        let mut ctl = PlayerController::new(&CameraOptions::default());
        assert!(ctl.press_key("KeyW", &bindings));
        assert!(ctl.is_held(CameraAction::MoveForwards));
        assert!(ctl.release_key("KeyW", &bindings));
        assert!(!ctl.is_held(CameraAction::MoveForwards));
        assert!(!ctl.press_key("F13", &bindings));
    }
}
