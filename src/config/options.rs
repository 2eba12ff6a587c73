// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;
use crate::log::Level;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub link: LinkOptions,
    pub view: ViewOptions,
}

/// Where the roster export lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub roster_path: PathBuf,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self { roster_path: PathBuf::from(DEFAULT_ROSTER) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkOptions {
    /// Path every deep link starts from, e.g. `/staff`.
    pub base_path: String,
    /// Open the single remaining match of a search automatically.
    pub auto_open: bool,
}

impl Default for LinkOptions {
    fn default() -> Self {
        Self {
            base_path: s!(DEFAULT_BASE_PATH),
            auto_open: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewOptions {
    pub log_level: Level,
    /// Initial open/closed state of the leadership, teaching, support sections.
    pub expanded: [bool; 3],
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            expanded: [true, true, true],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}
