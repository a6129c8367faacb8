// src/gui/components/data_table.rs
//
// Draws the result table. Purely a view over App::table.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};
use crate::{gui::app::App, table::PriceTable};

// Bargain rows: light red fill, black text.
const BARGAIN_FILL: egui::Color32 = egui::Color32::from_rgb(0xFF, 0xCC, 0xCC);
const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(0xDC, 0x61, 0x49);

// name, set, number, edition, holo, condition, avg, low, error
const WIDTHS: [f32; 9] = [160.0, 140.0, 60.0, 90.0, 45.0, 90.0, 130.0, 140.0, 260.0];
const FIRST_PRICE_COL: usize = 6;
const ERROR_COL: usize = 8;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.table.is_empty() {
        ui.add_space(12.0);
        ui.weak("No results yet. Enter cards above and press Fetch Prices.");
        return;
    }

    let bargains = app.table.bargain_count();
    if bargains > 0 {
        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 2.0, BARGAIN_FILL);
            ui.label(format!(
                "{bargains} potential bargain(s): lowest listing under 80% of average sold"
            ));
        });
    }

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;           // reserve space instead of overlaying content
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let headers = PriceTable::headers();
    let rows = app.table.to_rows();
    let flags: Vec<bool> = app.table.rows.iter().map(|r| r.bargain).collect();

    let avail_h = ui.available_height();
    egui::ScrollArea::new([true, false])
        .id_salt("price_table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt("price_table");
            for w in WIDTHS {
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(30.0));
            }

            table
                .header(24.0, |mut header| {
                    for (ci, h) in headers.iter().enumerate() {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            let label = egui::Label::new(RichText::new(h).strong()).selectable(false);
                            if is_price_col(ci) {
                                ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.add(label); });
                            } else {
                                ui.add(label);
                            }
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, rows.len(), |mut row| {
                        let ri = row.index();
                        let bargain = flags.get(ri).copied().unwrap_or(false);
                        let Some(cells) = rows.get(ri) else { return };

                        for (ci, cell) in cells.iter().enumerate() {
                            row.col(|ui| {
                                if bargain {
                                    ui.painter().rect_filled(ui.max_rect(), 0.0, BARGAIN_FILL);
                                }
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);

                                let mut rt = RichText::new(cell);
                                if bargain {
                                    rt = rt.color(egui::Color32::BLACK);
                                } else if ci == ERROR_COL {
                                    rt = rt.color(ERROR_TEXT);
                                }

                                if is_price_col(ci) {
                                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.label(rt); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(rt); });
                                }
                            });
                        }
                    });
                });
        });
}

#[inline]
fn is_price_col(ci: usize) -> bool {
    (FIRST_PRICE_COL..ERROR_COL).contains(&ci)
}
