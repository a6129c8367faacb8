// src/gui/components/input_panel.rs
//
// CSV text box. The card count under it is re-parsed every frame; the input
// is small.

use eframe::egui;
use crate::{card::parse_cards, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Card Price Checker");
    ui.label("Enter cards (CSV format)");

    let resp = ui.add_enabled(
        !app.running,
        egui::TextEdit::multiline(&mut app.state.gui.input_text)
            .font(egui::TextStyle::Monospace)
            .desired_rows(6)
            .desired_width(f32::INFINITY),
    );
    if resp.changed() {
        logd!("UI: input changed ({} bytes)", app.state.gui.input_text.len());
    }

    let n = parse_cards(&app.state.gui.input_text).len();
    ui.small(format!("{n} card(s) · header: name,set,number,edition,holo,condition"));
}
