// src/gui/components/export_bar.rs

use std::path::PathBuf;

use eframe::egui;

use crate::{config::options::ExportFormat, file, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let shown = app.directory.view().len();
        let total = app.directory.roster().len();
        ui.label(format!("{shown} of {total} shown"));
        ui.separator();

        if ui.button("Copy").on_hover_text("Copy visible rows as TSV").clicked() {
            let txt = file::to_export_string(&app.directory.view(), ExportFormat::Tsv);
            ui.ctx().copy_text(txt);
            app.status("Copied to clipboard.");
            logf!("UI: Copied {} row(s)", shown);
        }

        ui.add(egui::TextEdit::singleline(&mut app.state.gui.export_path).desired_width(200.0));
        if ui.button("Export").clicked() {
            let path = PathBuf::from(app.state.gui.export_path.trim());
            let fmt = file::format_for_path(&path);
            let res = file::write_export(&path, &app.directory.view(), fmt);
            match res {
                Ok(p) => app.status(format!("Exported {} row(s) → {}", shown, p.display())),
                Err(e) => {
                    loge!("UI: Export failed ({})", e);
                    app.status(format!("Export error: {}", e));
                }
            }
        }

        ui.separator();
        ui.label(&app.status);
    });
}
