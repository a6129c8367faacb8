// src/gui/components/action_bar.rs

use eframe::egui::{self, widgets::Spinner};
use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers + Output ---
        let prev_fmt = export.format;
        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");

            if export.format != prev_fmt {
                logf!("UI: Export format → {:?}", export.format);
                if !app.out_path_dirty {
                    app.out_path_text = export.out_path().to_string_lossy().into_owned();
                }
            }

            let before_headers = export.include_headers;
            ui.checkbox(&mut export.include_headers, "Include headers");
            if export.include_headers != before_headers {
                logf!("UI: Include_headers → {}", export.include_headers);
            }

            ui.label("Output:");
            if ui
                .add(egui::TextEdit::singleline(&mut app.out_path_text)
                    .font(egui::TextStyle::Monospace))
                .changed()
            {
                app.out_path_dirty = true;
                logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
            }
        });
    }

    // --- Actions (FETCH / Clear cache / Copy / Export) ---
    ui.horizontal(|ui| {
        let green = egui::Color32::from_rgb(40, 160, 70);
        let button_fetch = ui.add_enabled(
            !app.running,
            egui::Button::new(
                egui::RichText::new("Fetch Prices")
                .color(egui::Color32::BLACK)
                .strong())
            .fill(green));
        if button_fetch.clicked() {
            logf!("UI: Fetch clicked");
            app.request_fetch(ui.ctx());
        }

        let cached = app.cache.len();
        let button_clear = ui
            .add_enabled(!app.running && cached > 0, egui::Button::new("Clear cache"))
            .on_hover_text(format!("{cached} card(s) memoized this session"));
        if button_clear.clicked() {
            actions::clear_cache(app);
        }

        if ui.add_enabled(!app.running, egui::Button::new("Copy")).clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.add_enabled(!app.running, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }

        let status = lock!(app.status).clone();
        ui.label(status);
    });
}
