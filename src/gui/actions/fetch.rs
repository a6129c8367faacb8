// src/gui/actions/fetch.rs
use crate::{
    core::HttpClient,
    gui::app::App,
    gui::progress::GuiProgress,
    runner,
};

pub fn fetch(app: &mut App) {
    let opts = app.state.options.fetch.clone();

    if app.client.is_none() {
        match HttpClient::new(&opts) {
            Ok(c) => app.client = Some(c),
            Err(e) => {
                loge!("Fetch: Client build failed: {}", e);
                app.status(format!("Error: {e}"));
                app.running = false;
                return;
            }
        }
    }
    let Some(client) = app.client.as_ref() else {
        app.running = false;
        return;
    };

    lock!(app.notices).clear();
    let mut prog = GuiProgress::new(app.status.clone(), app.notices.clone());

    logf!("Fetch: Begin (cache entries={})", app.cache.len());

    // → This is where the fetching happens ←
    let table = runner::run(
        &app.state.gui.input_text,
        &mut app.cache,
        client,
        &opts,
        Some(&mut prog),
    );

    let failures = lock!(app.notices).len();
    logf!(
        "Fetch: OK rows={} bargains={} failures={}",
        table.nrows(),
        table.bargain_count(),
        failures
    );

    app.table = table;
    app.running = false;
}

/// Drop memoized prices so the next fetch hits the network again.
pub fn clear_cache(app: &mut App) {
    let n = app.cache.len();
    app.cache.clear();
    app.status(format!("Cache cleared ({n} card(s))"));
}
