// src/gui/components/nav_bar.rs
//
// Back / forward and the address field. The field shows the current deep link
// and doubles as the place to paste one.

use eframe::egui;

use crate::gui::app::App;
use crate::link::Navigator;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let nav = app.directory.navigator();
        let (can_back, can_forward) = (nav.can_go_back(), nav.can_go_forward());

        if ui.add_enabled(can_back, egui::Button::new("◀")).on_hover_text("Back (Alt+←)").clicked() {
            app.directory.back();
        }
        if ui.add_enabled(can_forward, egui::Button::new("▶")).on_hover_text("Forward (Alt+→)").clicked() {
            app.directory.forward();
        }

        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.address_text)
                .desired_width(ui.available_width() - 60.0)
                .hint_text("Paste a directory link"),
        );
        if resp.changed() {
            app.address_dirty = true;
        }
        let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let go = ui.button("Go").clicked();
        if submitted || go {
            let href = app.address_text.clone();
            app.navigate_to(&href);
        }

        if ui.button("Copy").on_hover_text("Copy link").clicked() {
            let href = app.directory.location().href();
            ui.ctx().copy_text(href);
            app.status("Link copied to clipboard.");
        }
    });
}
