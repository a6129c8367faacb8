// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use card_pricer::{config::state::GuiState, gui};
use eframe::egui::ViewportBuilder;

fn main() {
    let defaults = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Card Price Checker")
            .with_inner_size([defaults.window_w, defaults.window_h]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
