// src/gui/host.rs
//
// egui side of the modal focus/scroll discipline.
//
// The controller runs in the middle of a frame and has no egui context, so
// this host records what it was asked to do and the app applies it at the
// frame edges: `begin_frame` snapshots the focused widget, `end_frame`
// performs any pending focus restore. The close button asks
// `take_close_focus` when it is drawn.

use eframe::egui;

use crate::link::ModalHost;

#[derive(Debug, Default)]
pub struct EguiModalHost {
    focused: Option<egui::Id>,
    scroll_locked: bool,
    focus_close: bool,
    restore: Option<Option<egui::Id>>,
}

impl EguiModalHost {
    pub fn begin_frame(&mut self, ctx: &egui::Context) {
        self.focused = ctx.memory(|m| m.focused());
    }

    pub fn end_frame(&mut self, ctx: &egui::Context) {
        let Some(target) = self.restore.take() else { return };
        match target {
            Some(id) => ctx.memory_mut(|m| m.request_focus(id)),
            None => {
                if let Some(cur) = ctx.memory(|m| m.focused()) {
                    ctx.memory_mut(|m| m.surrender_focus(cur));
                }
            }
        }
        logd!("GUI: focus restored to {:?}", target);
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// True once after the modal opened; the close button then grabs focus.
    pub fn take_close_focus(&mut self) -> bool {
        std::mem::take(&mut self.focus_close)
    }
}

impl ModalHost for EguiModalHost {
    type Focus = egui::Id;

    fn focused(&self) -> Option<egui::Id> {
        self.focused
    }

    fn restore_focus(&mut self, target: Option<egui::Id>) {
        self.focus_close = false;
        self.restore = Some(target);
    }

    fn focus_close_control(&mut self) {
        self.focus_close = true;
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }
}
