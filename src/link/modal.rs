// src/link/modal.rs
//
// Focus and scroll side effects of the profile modal, as a scoped resource.

use std::fmt::Debug;

/// What the frontend must do when a profile opens or closes.
pub trait ModalHost {
    /// Whatever identifies a focusable element in this frontend.
    type Focus: Clone + Debug + PartialEq;

    fn focused(&self) -> Option<Self::Focus>;

    /// Put focus back where it was (`None` = nothing focused).
    fn restore_focus(&mut self, target: Option<Self::Focus>);

    fn focus_close_control(&mut self);

    fn set_scroll_locked(&mut self, locked: bool);
}

/// Held while a profile is open. `release` consumes it, so every exit path
/// (close button, backdrop, Escape, history navigation) runs the same cleanup
/// exactly once.
#[derive(Debug)]
#[must_use = "a modal session must be released to unlock scroll and restore focus"]
pub struct ModalSession<F> {
    previous_focus: Option<F>,
}

impl<F: Clone + Debug + PartialEq> ModalSession<F> {
    pub fn acquire<H: ModalHost<Focus = F>>(host: &mut H) -> Self {
        let previous_focus = host.focused();
        host.set_scroll_locked(true);
        host.focus_close_control();
        Self { previous_focus }
    }

    pub fn release<H: ModalHost<Focus = F>>(self, host: &mut H) {
        host.set_scroll_locked(false);
        host.restore_focus(self.previous_focus);
    }
}

/// Host for frontends without focus or scrolling (the CLI).
#[derive(Clone, Copy, Debug, Default)]
pub struct NullHost;

impl ModalHost for NullHost {
    type Focus = ();
    fn focused(&self) -> Option<()> { None }
    fn restore_focus(&mut self, _target: Option<()>) {}
    fn focus_close_control(&mut self) {}
    fn set_scroll_locked(&mut self, _locked: bool) {}
}
