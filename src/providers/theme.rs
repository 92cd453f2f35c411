use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ThemeState {
    pub mode: ThemeMode,
}

impl ThemeState {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = match self.mode {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        };
        self.mode
    }
}
