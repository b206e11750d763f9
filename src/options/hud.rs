use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "HUD", inline)]
#[serde(default)]
/// Overlay compositor parameters.
pub struct HudOptions {
    /// Compose overlays at all.
    #[schemars(title = "Show HUD")]
    pub enabled: bool,
    /// How often the compositor wakes up, in milliseconds.
    #[schemars(skip)]
    pub refresh_interval_ms: u64,
    /// Half-length of each crosshair arm in pixels.
    #[schemars(title = "Crosshair Size", range(min = 2.0, max = 64.0), extend("step" = 1.0))]
    pub crosshair_size: f32,
    /// Stroke width for the crosshair in pixels.
    #[schemars(skip)]
    pub line_width: f32,
    /// Text size in points.
    #[schemars(title = "Font Size", range(min = 8.0, max = 48.0), extend("step" = 1.0))]
    pub font_size: f32,
    /// Mirror overlays vertically for bottom-up texture uploads.
    #[schemars(skip)]
    pub flip_y: bool,
}

impl Default for HudOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            refresh_interval_ms: 100,
            crosshair_size: 15.0,
            line_width: 3.0,
            font_size: 16.0,
            flip_y: true,
        }
    }
}
