// src/gui/components/sections.rs
//
// The three collapsible tier sections. Purely a view over the controller's
// TieredView; a click on a name is reported back as `open(id)`.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::core::Tier;
use crate::gui::app::App;
use crate::roster::StaffRecord;

const ROW_H: f32 = 20.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let locked = app.directory.host().scroll_locked();
    let mut clicked: Option<String> = None;
    let mut toggled: Option<(Tier, bool)> = None;

    {
        let view = app.directory.view();
        if view.is_empty() {
            ui.add_space(12.0);
            ui.label(RichText::new("No matches").italics());
            return;
        }

        egui::ScrollArea::vertical()
            .id_salt("directory_scroll")
            .enable_scrolling(!locked)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for tier in Tier::ALL {
                    let rows = view.tier(tier);
                    let expanded = app.state.gui.is_expanded(tier);
                    let title = format!("{} ({})", tier.title(), rows.len());

                    let resp = egui::CollapsingHeader::new(RichText::new(title).strong())
                        .id_salt(("tier", tier.index()))
                        .open(Some(expanded))
                        .show(ui, |ui| {
                            if rows.is_empty() {
                                ui.label(RichText::new("No matches").weak());
                            } else if let Some(id) = table(ui, tier, rows) {
                                clicked = Some(id);
                            }
                        });
                    if resp.header_response.clicked() {
                        toggled = Some((tier, !expanded));
                    }
                }
            });
    }

    if let Some((tier, open)) = toggled {
        app.state.gui.expanded[tier.index()] = open;
        logd!("UI: {:?} section {}", tier, if open { "expanded" } else { "collapsed" });
    }
    if let Some(id) = clicked {
        app.directory.open(&id);
    }
}

fn table(ui: &mut egui::Ui, tier: Tier, rows: &[&StaffRecord]) -> Option<String> {
    let mut clicked = None;
    TableBuilder::new(ui)
        .id_salt(("tier_table", tier.index()))
        .striped(true)
        .vscroll(false)
        .column(Column::initial(220.0).at_least(120.0).resizable(true).clip(true))
        .column(Column::initial(220.0).at_least(80.0).resizable(true).clip(true))
        .column(Column::remainder().clip(true))
        .header(ROW_H, |mut header| {
            for h in ["Name", "Role", "Department"] {
                header.col(|ui| { ui.strong(h); });
            }
        })
        .body(|body| {
            body.rows(ROW_H, rows.len(), |mut row| {
                let Some(r) = rows.get(row.index()) else { return };
                row.col(|ui| {
                    if ui.link(r.display_name()).clicked() {
                        clicked = Some(s!(r.id()));
                    }
                });
                row.col(|ui| { ui.label(r.role().unwrap_or("")); });
                row.col(|ui| { ui.label(r.department().unwrap_or("")); });
            });
        });
    clicked
}
