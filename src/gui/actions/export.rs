// src/gui/actions/export.rs
use crate::{gui::app::App, file};

pub fn export(app: &mut App) {
    // normalize out_path first
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_dirty = false;
    }

    if app.table.is_empty() {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    }

    logf!("Export: Begin rows={}", app.table.nrows());

    let status_msg = match file::write_export(&app.state.options.export, &app.table) {
        Ok(path) => {
            logf!("Export: OK {}", path.display());
            format!("Exported {} row(s) to {}", app.table.nrows(), path.display())
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };

    app.status(status_msg);
}
