//! Hard-mode switch and settings-panel visibility.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Hard-mode flags owned by a game session.
///
/// Both flags start off: the opponent plays the easy strategy and the
/// settings panel holding the switch is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HardModeState {
    enabled: bool,
    panel_visible: bool,
}

impl HardModeState {
    /// Creates the state with both flags off.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the computer uses the hard-mode selector.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the settings panel is shown.
    pub fn is_panel_visible(&self) -> bool {
        self.panel_visible
    }

    /// Flips hard mode and returns the new value for the UI to reflect.
    #[instrument(skip(self))]
    pub fn toggle_enabled(&mut self) -> bool {
        self.enabled = !self.enabled;
        info!(enabled = self.enabled, "Hard mode toggled");
        self.enabled
    }

    /// Flips settings-panel visibility and returns the new value.
    #[instrument(skip(self))]
    pub fn toggle_visibility(&mut self) -> bool {
        self.panel_visible = !self.panel_visible;
        info!(visible = self.panel_visible, "Settings panel toggled");
        self.panel_visible
    }
}
