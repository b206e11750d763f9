use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::camera::CameraAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `MoveForwards` → `"KeyW"`).
    pub bindings: HashMap<CameraAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, CameraAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (CameraAction::MoveForwards, "KeyW".into()),
            (CameraAction::MoveBackwards, "KeyS".into()),
            (CameraAction::MoveLeft, "KeyA".into()),
            (CameraAction::MoveRight, "KeyD".into()),
            (CameraAction::MoveUp, "Space".into()),
            (CameraAction::MoveDown, "ShiftLeft".into()),
            (CameraAction::RotateUp, "ArrowUp".into()),
            (CameraAction::RotateDown, "ArrowDown".into()),
            (CameraAction::RotateLeft, "ArrowLeft".into()),
            (CameraAction::RotateRight, "ArrowRight".into()),
            (CameraAction::ZoomIn, "Equal".into()),
            (CameraAction::ZoomOut, "Minus".into()),
            (CameraAction::ResetZoom, "KeyZ".into()),
            (CameraAction::ResetAngles, "KeyR".into()),
            (CameraAction::ToggleViewType, "KeyV".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<CameraAction> {
        self.key_to_action.get(key).copied()
    }

    /// Bind `action` to `key`, replacing its previous key.
    pub fn bind(&mut self, action: CameraAction, key: &str) {
        let _ = self.bindings.insert(action, key.to_owned());
        self.rebuild_reverse_map();
    }
}
