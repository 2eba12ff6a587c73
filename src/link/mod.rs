// src/link/mod.rs
//! # Deep links
//!
//! The directory's view state (search text, letter, open profile) is kept in
//! a URL-style [`Location`] rather than in widgets, so any view can be copied
//! as a link, pasted back in, and walked with back/forward.
//!
//! ```text
//! user action ──► DeepLinkController ──► Navigator (push / replace)
//!                        ▲                      │
//!                        └────── reconcile ◄────┘  (also after back/forward/paste)
//! ```
//!
//! - `location`: path + ordered query params, `url`-crate codec.
//! - `state`: `FilterState` ⇄ `q` / `letter` / `open`.
//! - `navigator`: the history trait and an in-memory implementation.
//! - `modal`: focus + scroll-lock side effects as a scoped session.
//! - `controller`: the state machine tying them together.

pub mod controller;
pub mod location;
pub mod modal;
pub mod navigator;
pub mod state;

pub use controller::{CloseTrigger, DeepLinkController, Pane};
pub use location::Location;
pub use modal::{ModalHost, ModalSession, NullHost};
pub use navigator::{MemoryHistory, Navigator};
pub use state::FilterState;
