// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod host;
pub mod photo;

pub use app::run;
