// src/config/state.rs
use super::consts::EXAMPLE_INPUT;
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Raw CSV in the input box
    pub input_text: String,

    pub window_w: f32,
    pub window_h: f32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            input_text: s!(EXAMPLE_INPUT),
            window_w: 1100.0,
            window_h: 700.0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
