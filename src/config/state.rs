// src/config/state.rs
use super::consts::{WINDOW_H, WINDOW_W};
use super::options::AppOptions;
use crate::core::classify::Tier;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Collapsing section state, indexed by `Tier::index()`
    pub expanded: [bool; 3],

    /// Where the last export went (shown in the export field)
    pub export_path: String,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: WINDOW_W,
            window_h: WINDOW_H,
            expanded: [true, true, true],
            export_path: s!("out/staff.csv"),
        }
    }
}

impl GuiState {
    pub fn is_expanded(&self, tier: Tier) -> bool {
        self.expanded[tier.index()]
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn from_options(options: AppOptions) -> Self {
        let gui = GuiState {
            expanded: options.view.expanded,
            ..GuiState::default()
        };
        Self { options, gui }
    }
}
