use glam::Vec3;

use crate::camera::Camera;

/// Window and timing state for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInfo {
    /// Seconds since start.
    pub time: f64,
    /// Seconds since the previous frame.
    pub delta: f64,
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    /// Whether the game is paused.
    pub paused: bool,
}

/// Immutable readout of one frame, consumed by the overlay compositor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HudData {
    /// Instantaneous frames per second, `1 / delta`.
    pub fps: f64,
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    /// Seconds since start.
    pub time: f64,
    /// Seconds since the previous frame.
    pub delta: f64,
    /// Whether the game is paused.
    pub paused: bool,
    /// Camera eye position.
    pub position: Vec3,
    /// Camera horizontal angle in the player convention (the heading is
    /// `h_angle * π`).
    pub h_angle: f32,
    /// Camera vertical angle: 0 straight down, 0.5 at the horizon, 1
    /// straight up.
    pub v_angle: f32,
}

impl HudData {
    /// Snapshot the frame and the camera's state after its update.
    ///
    /// `fps` is 0 when `delta` is not positive.
    #[must_use]
    pub fn capture(frame: &FrameInfo, camera: &Camera) -> Self {
        let (h_angle, v_angle) = camera.orientation_angles();
        Self {
            fps: if frame.delta > 0.0 { frame.delta.recip() } else { 0.0 },
            width: frame.width,
            height: frame.height,
            time: frame.time,
            delta: frame.delta,
            paused: frame.paused,
            position: camera.position(),
            h_angle,
            v_angle,
        }
    }

    /// Readout text block drawn at the top-left of the overlay.
    #[must_use]
    pub fn readout(&self) -> String {
        let p = self.position;
        format!(
            "Position: ({:.2}, {:.2}, {:.2})\nVAngle: {:.4}\nHAngle: {:.4}",
            p.x, p.y, p.z, self.v_angle, self.h_angle
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::PlayerRig;

    fn frame(delta: f64) -> FrameInfo {
        FrameInfo {
            time: 3.0,
            delta,
            width: 800,
            height: 600,
            paused: false,
        }
    }

    #[test]
    fn capture_reads_player_state() {
        let cam = Camera::player(PlayerRig::new(Vec3::new(1.0, 2.0, 3.0), 0.5, 0.25));
        let data = HudData::capture(&frame(0.02), &cam);
        assert!((data.fps - 50.0).abs() < 1e-9);
        assert_eq!(data.position, Vec3::new(1.0, 2.0, 3.0));
        assert!((data.h_angle - 0.5).abs() < 1e-6);
        assert!((data.v_angle - 0.25).abs() < 1e-6);
        assert_eq!((data.width, data.height), (800, 600));
    }

    #[test]
    fn derived_angles_use_player_scale() {
        // Fixed camera looking down at 45 degrees along +X.
        let cam = Camera::fixed(Vec3::new(0.0, 5.0, 0.0), Vec3::new(5.0, 0.0, 0.0));
        let data = HudData::capture(&frame(0.02), &cam);
        assert!((data.v_angle - 0.25).abs() < 1e-5);
        assert!(data.h_angle.abs() < 1e-5);
        assert!((0.0..=1.0).contains(&data.v_angle));
    }

    #[test]
    fn non_positive_delta_gives_zero_fps() {
        let cam = Camera::player(PlayerRig::default());
        assert_eq!(HudData::capture(&frame(0.0), &cam).fps, 0.0);
        assert_eq!(HudData::capture(&frame(-1.0), &cam).fps, 0.0);
    }

    #[test]
    fn readout_has_three_lines() {
        let data = HudData {
            position: Vec3::new(1.0, -2.5, 0.0),
            v_angle: 0.5,
            h_angle: 3.0,
            ..HudData::default()
        };
        assert_eq!(
            data.readout(),
            "Position: (1.00, -2.50, 0.00)\nVAngle: 0.5000\nHAngle: 3.0000"
        );
    }
}
