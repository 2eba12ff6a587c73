// src/gui/photo.rs
//
// Staff photos as egui textures. Local files are decoded once with `image`
// and cached by source string; failures are cached too so a broken path is
// not re-read every frame. Remote URLs are not fetched.

use std::{collections::HashMap, error::Error, path::Path};

use eframe::egui;

#[derive(Default)]
pub struct PhotoCache {
    textures: HashMap<String, Option<egui::TextureHandle>>,
}

pub fn is_remote(src: &str) -> bool {
    let lower = src.trim().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

impl PhotoCache {
    pub fn get(&mut self, ctx: &egui::Context, src: &str) -> Option<&egui::TextureHandle> {
        if is_remote(src) {
            return None;
        }
        self.textures
            .entry(s!(src))
            .or_insert_with(|| match load(ctx, Path::new(src)) {
                Ok(tex) => Some(tex),
                Err(e) => {
                    loge!("Photo: cannot load {} ({})", src, e);
                    None
                }
            })
            .as_ref()
    }
}

fn load(ctx: &egui::Context, path: &Path) -> Result<egui::TextureHandle, Box<dyn Error>> {
    let rgba = image::open(path)?.to_rgba8();
    let (w, h) = rgba.dimensions();
    let color = egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], rgba.as_raw());
    Ok(ctx.load_texture(path.to_string_lossy(), color, egui::TextureOptions::LINEAR))
}
