use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    Single,
    #[default]
    Columns,
    Grid,
}

/// Panel visibility and layout mode for the dashboard shell.
#[derive(Clone, Copy, Debug)]
pub struct LayoutState {
    pub left_panel: bool,
    pub right_panel: bool,
    pub bottom_panel: bool,
    pub mode: LayoutMode,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            left_panel: true,
            right_panel: true,
            bottom_panel: true,
            mode: LayoutMode::default(),
        }
    }
}

impl LayoutState {
    pub fn toggle_left(&mut self) -> bool {
        self.left_panel = !self.left_panel;
        self.left_panel
    }

    pub fn toggle_right(&mut self) -> bool {
        self.right_panel = !self.right_panel;
        self.right_panel
    }

    pub fn toggle_bottom(&mut self) -> bool {
        self.bottom_panel = !self.bottom_panel;
        self.bottom_panel
    }

    pub fn set_mode(&mut self, mode: LayoutMode) {
        self.mode = mode;
    }
}
