// src/gui/components/search_bar.rs
//
// Search field and A–Z letter strip. Every change becomes a navigation on the
// controller; nothing here keeps its own filter state.

use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Search:");
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.search_text)
                .desired_width(260.0)
                .hint_text("Name, role or department"),
        );
        if resp.changed() {
            let text = app.search_text.clone();
            app.directory.set_query(&text);
        }

        let has_filters = !app.directory.state().query.is_empty() || app.directory.state().has_letter();
        if ui.add_enabled(has_filters, egui::Button::new("Clear")).clicked() {
            app.directory.clear_filters();
            logf!("UI: Filters cleared");
        }
    });

    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;
        let current = app.directory.state().letter;

        if ui.selectable_label(current.is_none(), "All").clicked() && current.is_some() {
            app.directory.set_letter(None);
        }
        for c in 'A'..='Z' {
            let selected = current == Some(c);
            if ui.selectable_label(selected, c.to_string()).clicked() {
                // Clicking the active letter again clears it
                app.directory.set_letter(if selected { None } else { Some(c) });
            }
        }
    });
}
