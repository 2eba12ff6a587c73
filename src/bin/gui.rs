// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use eframe::egui::{IconData, ViewportBuilder};
use image::{Rgba, RgbaImage};
use staff_directory::config::{self, consts::CONFIG_FILE, state::AppState};
use staff_directory::{gui, log};

// Plain two-tone badge; no icon asset to ship.
fn app_icon() -> IconData {
    let rgba = RgbaImage::from_fn(32, 32, |x, y| {
        let edge = x < 2 || y < 2 || x > 29 || y > 29;
        if edge { Rgba([20, 60, 110, 255]) } else { Rgba([235, 240, 248, 255]) }
    });
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}

fn main() {
    let opts = config::file::load(Path::new(CONFIG_FILE));
    log::set_level(opts.view.log_level);
    let state = AppState::from_options(opts);

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
