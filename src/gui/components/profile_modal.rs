// src/gui/components/profile_modal.rs
//
// Profile overlay for the open record. Every optional field is its own line
// and simply disappears when absent.

use eframe::egui::{self, RichText};

use crate::gui::{app::App, photo};
use crate::link::CloseTrigger;

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(record) = app.directory.current().cloned() else { return };

    let mut close: Option<CloseTrigger> = None;
    let grab_focus = app.directory.host_mut().take_close_focus();

    let modal = egui::Modal::new(egui::Id::new("profile_modal")).show(ctx, |ui| {
        ui.set_width(420.0);
        ui.horizontal(|ui| {
            ui.heading(record.display_name());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let resp = ui.button("✕ Close");
                if grab_focus {
                    resp.request_focus();
                }
                if resp.clicked() {
                    close = Some(CloseTrigger::CloseButton);
                }
            });
        });
        ui.separator();

        ui.horizontal_top(|ui| {
            if let Some(src) = record.photo() {
                if let Some(tex) = app.photos.get(ctx, src) {
                    let sized = egui::load::SizedTexture::from_handle(tex);
                    ui.add(egui::Image::from_texture(sized).max_width(140.0).max_height(180.0));
                } else if photo::is_remote(src) {
                    ui.hyperlink_to("Photo", src);
                }
            }

            ui.vertical(|ui| {
                if let Some(role) = record.role() {
                    ui.label(RichText::new(role).strong());
                }
                if let Some(dept) = record.department() {
                    ui.label(dept);
                }
                ui.add_space(6.0);
                if let (Some(email), Some(href)) = (record.email(), record.mailto()) {
                    ui.hyperlink_to(format!("✉ {email}"), href);
                }
                if let (Some(phone), Some(href)) = (record.phone(), record.tel()) {
                    ui.hyperlink_to(format!("☎ {phone}"), href);
                }
            });
        });
    });

    if close.is_none() && modal.should_close() {
        let escape = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        close = Some(if escape { CloseTrigger::Escape } else { CloseTrigger::Backdrop });
    }

    if let Some(trigger) = close {
        app.directory.close(trigger);
    }
}
