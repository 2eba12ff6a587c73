// src/gui/components/mod.rs
pub mod export_bar;
pub mod nav_bar;
pub mod profile_modal;
pub mod search_bar;
pub mod sections;
