// src/config/file.rs
//
// `key = value` settings file. Missing file or unreadable lines fall back to
// defaults; unknown keys are ignored.

use std::{fs, path::Path};

use super::options::AppOptions;
use crate::core::classify::Tier;
use crate::log::Level;

pub fn load(path: &Path) -> AppOptions {
    if !path.exists() {
        logd!("Config: {} not found, using defaults", path.display());
        return AppOptions::default();
    }
    match fs::read_to_string(path) {
        Ok(text) => {
            logf!("Config: loaded {}", path.display());
            parse(&text)
        }
        Err(e) => {
            loge!("Config: failed to read {} ({})", path.display(), e);
            AppOptions::default()
        }
    }
}

pub fn parse(text: &str) -> AppOptions {
    let mut opts = AppOptions::default();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue; }
        let Some(eq) = line.find('=') else { continue };
        let key = line[..eq].trim();
        let val = line[eq + 1..].trim();
        match key {
            "roster" if !val.is_empty() => opts.source.roster_path = val.into(),
            "base_path" if !val.is_empty() => opts.link.base_path = normalize_base(val),
            "auto_open" => opts.link.auto_open = truthy(val),
            "log_level" => {
                if let Some(level) = Level::parse(val) { opts.view.log_level = level; }
            }
            "expand_leadership" => opts.view.expanded[Tier::Leadership.index()] = truthy(val),
            "expand_teaching" => opts.view.expanded[Tier::Teaching.index()] = truthy(val),
            "expand_support" => opts.view.expanded[Tier::Support.index()] = truthy(val),
            _ => {}
        }
    }
    opts
}

fn truthy(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true") || val.eq_ignore_ascii_case("yes")
}

fn normalize_base(val: &str) -> String {
    let trimmed = val.trim_end_matches('/');
    if trimmed.starts_with('/') { s!(trimmed) } else { join!("/", trimmed) }
}
