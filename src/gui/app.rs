// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::state::AppState,
    link::{DeepLinkController, Location, MemoryHistory},
    roster::Roster,
    store,
};

use super::{components, host::EguiModalHost, photo::PhotoCache};

pub type Directory = DeepLinkController<MemoryHistory, EguiModalHost>;

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Staff Directory",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    pub state: AppState,

    // single source of truth for what is shown
    pub directory: Directory,

    // text field buffers, mirrored from the location each frame
    pub search_text: String,
    pub address_text: String,
    pub address_dirty: bool,

    pub photos: PhotoCache,
    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let path = state.options.source.roster_path.clone();
        let (roster, status) = match store::load_roster(&path) {
            Ok(r) => {
                let msg = format!("Loaded {} staff from {}", r.len(), path.display());
                (r, msg)
            }
            Err(e) => {
                loge!("Init: {}", e);
                (Roster::default(), format!("Error: {}", e))
            }
        };

        let start = Location::new(state.options.link.base_path.clone());
        let directory = DeepLinkController::with_auto_open(
            roster,
            MemoryHistory::new(start),
            EguiModalHost::default(),
            state.options.link.auto_open,
        );
        logf!("Init: {} record(s), base path {}", directory.roster().len(), state.options.link.base_path);

        let address_text = directory.location().href();
        Self {
            state,
            directory,
            search_text: s!(),
            address_text,
            address_dirty: false,
            photos: PhotoCache::default(),
            status,
        }
    }

    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Paste-a-link entry point.
    pub fn navigate_to(&mut self, href: &str) {
        match self.directory.navigate(href) {
            Ok(()) => self.address_dirty = false,
            Err(e) => {
                loge!("GUI: bad link {:?} ({})", href, e);
                self.status(format!("Bad link: {}", e));
            }
        }
    }

    /// Pull the text fields back in line after back/forward or a pasted link.
    fn mirror_location(&mut self) {
        let q = &self.directory.state().query;
        if self.search_text != *q {
            self.search_text = q.clone();
        }
        if !self.address_dirty {
            self.address_text = self.directory.location().href();
        }
    }

    fn handle_history_keys(&mut self, ctx: &egui::Context) {
        let (back, forward) = ctx.input(|i| {
            (
                i.modifiers.alt && i.key_pressed(egui::Key::ArrowLeft),
                i.modifiers.alt && i.key_pressed(egui::Key::ArrowRight),
            )
        });
        if back { self.directory.back(); }
        if forward { self.directory.forward(); }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.directory.host_mut().begin_frame(ctx);
        self.handle_history_keys(ctx);

        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            components::nav_bar::draw(ui, self);
            ui.separator();
            components::search_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            components::export_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::sections::draw(ui, self);
        });

        components::profile_modal::draw(ctx, self);

        self.mirror_location();
        self.directory.host_mut().end_frame(ctx);
    }
}
