// src/core/mod.rs

pub mod classify;
pub mod filter;
pub mod names;
pub mod sanitize;

pub use classify::Tier;
pub use names::NameParts;
