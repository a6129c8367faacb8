// src/gui/components/notices.rs
//
// Request failures from the last fetch, shown as they were reported.

use eframe::egui;
use crate::gui::app::App;

const ERROR_RED: egui::Color32 = egui::Color32::from_rgb(0xDC, 0x61, 0x49);

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let notices = lock!(app.notices).clone();
    if notices.is_empty() {
        return;
    }

    ui.separator();
    let mut dismiss = false;
    ui.horizontal(|ui| {
        ui.colored_label(ERROR_RED, format!("{} request(s) failed", notices.len()));
        dismiss = ui.small_button("Dismiss").clicked();
    });
    egui::ScrollArea::vertical()
        .id_salt("notices")
        .max_height(80.0)
        .show(ui, |ui| {
            for n in &notices {
                ui.colored_label(ERROR_RED, n);
            }
        });

    if dismiss {
        lock!(app.notices).clear();
    }
}
