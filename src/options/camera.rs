use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::ViewType;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera zoom and control parameters.
///
/// Near and far planes are crate constants and not configurable.
pub struct CameraOptions {
    /// Field of view in degrees applied when a camera is created.
    #[schemars(title = "Field of View", range(min = 2.0, max = 135.0), extend("step" = 1.0))]
    pub zoom: f32,
    /// Projection kind for new cameras.
    #[schemars(title = "View Type")]
    pub view_type: ViewType,
    /// Movement speed in world units per second.
    #[schemars(title = "Move Speed", range(min = 0.5, max = 50.0), extend("step" = 0.5))]
    pub move_speed: f32,
    /// Rotation speed for held keys, degrees per second.
    #[schemars(title = "Rotate Speed", range(min = 10.0, max = 360.0), extend("step" = 5.0))]
    pub rotate_speed: f32,
    /// Zoom speed for held keys, degrees per second.
    #[schemars(skip)]
    pub zoom_speed: f32,
    /// Mouse-look sensitivity, degrees per pixel.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub mouse_sensitivity: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            zoom: 60.0,
            view_type: ViewType::Perspective,
            move_speed: 4.0,
            rotate_speed: 90.0,
            zoom_speed: 30.0,
            mouse_sensitivity: 0.1,
        }
    }
}
