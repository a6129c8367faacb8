// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    core::HttpClient,
    store::PriceCache,
    table::PriceTable,
};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Card Price Checker",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // session: memoized prices + lazily built HTTP client
    pub cache: PriceCache,
    pub client: Option<HttpClient>,

    // last fetch cycle's output
    pub table: PriceTable,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // status line + request failure notices (progress writes here)
    pub status: Arc<Mutex<String>>,
    pub notices: Arc<Mutex<Vec<String>>>,

    // set on click; the cycle runs at the start of the next frame
    pub running: bool,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();
        logf!("Init: cards in example input={}", crate::card::parse_cards(&state.gui.input_text).len());

        Self {
            state,
            cache: PriceCache::new(),
            client: None,
            table: PriceTable::default(),
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
            notices: Arc::new(Mutex::new(Vec::new())),
            running: false,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *lock!(self.status) = msg.into();
    }

    /// Queue a fetch cycle; the button stays disabled until it finishes.
    pub fn request_fetch(&mut self, ctx: &egui::Context) {
        if self.running {
            return;
        }
        self.running = true;
        self.status("Fetching…");
        ctx.request_repaint();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Blocks the UI thread: one card at a time, two requests each.
        if self.running {
            actions::fetch(self);
        }

        egui::TopBottomPanel::top("input")
            .resizable(false)
            .show(ctx, |ui| {
                components::input_panel::draw(ui, self);
                ui.separator();
                components::action_bar::draw(ui, self);
                components::notices::draw(ui, self);
                ui.add_space(4.0);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::data_table::draw(ui, self);
        });
    }
}
