// src/link/controller.rs
//
// Deep-link controller: which profile is open, derived from the location.
//
// The navigator's location is the only writer of truth. Every user action is
// turned into a navigation, and after every navigation `reconcile` re-derives
// the filter state, the pane and the modal side effects from the location.
// Nothing else changes `pane`, so in-memory state cannot drift from the URL.

use std::collections::HashSet;

use super::location::Location;
use super::modal::{ModalHost, ModalSession};
use super::navigator::Navigator;
use super::state::FilterState;
use crate::config::consts::PARAM_OPEN;
use crate::roster::{Roster, StaffRecord};
use crate::view::TieredView;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pane {
    Closed,
    Open(String),
}

impl Pane {
    pub fn open_id(&self) -> Option<&str> {
        match self {
            Pane::Closed => None,
            Pane::Open(id) => Some(id),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Pane::Open(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    Backdrop,
    Escape,
}

pub struct DeepLinkController<N: Navigator, H: ModalHost> {
    roster: Roster,
    navigator: N,
    host: H,

    state: FilterState,
    pane: Pane,
    modal: Option<ModalSession<H::Focus>>,

    auto_open: bool,
    /// (raw query, id) pairs the user closed; auto-open skips them
    dismissed: HashSet<(String, String)>,
}

impl<N: Navigator, H: ModalHost> DeepLinkController<N, H> {
    /// Takes over `navigator` and immediately reconciles with its location,
    /// so a shared link that arrives with `open=<id>` opens straight away.
    pub fn new(roster: Roster, navigator: N, host: H) -> Self {
        Self::with_auto_open(roster, navigator, host, true)
    }

    pub fn with_auto_open(roster: Roster, navigator: N, host: H, auto_open: bool) -> Self {
        let mut ctl = Self {
            roster,
            navigator,
            host,
            state: FilterState::default(),
            pane: Pane::Closed,
            modal: None,
            auto_open,
            dismissed: HashSet::new(),
        };
        ctl.reconcile();
        ctl
    }

    /* ---------- read side ---------- */

    pub fn state(&self) -> &FilterState { &self.state }
    pub fn pane(&self) -> &Pane { &self.pane }
    pub fn roster(&self) -> &Roster { &self.roster }
    pub fn location(&self) -> &Location { self.navigator.location() }
    pub fn navigator(&self) -> &N { &self.navigator }
    pub fn host(&self) -> &H { &self.host }
    pub fn host_mut(&mut self) -> &mut H { &mut self.host }

    /// Direct access for frontends that change the location themselves;
    /// call `reconcile` afterwards.
    pub fn navigator_mut(&mut self) -> &mut N { &mut self.navigator }

    pub fn view(&self) -> TieredView<'_> {
        self.roster.view(&self.state)
    }

    /// The open profile, if any.
    pub fn current(&self) -> Option<&StaffRecord> {
        self.pane.open_id().and_then(|id| self.roster.get(id))
    }

    pub fn is_dismissed(&self, query: &str, id: &str) -> bool {
        self.dismissed.contains(&(s!(query), s!(id)))
    }

    /* ---------- user actions ---------- */

    pub fn open(&mut self, id: &str) {
        if self.navigator.location().get(PARAM_OPEN) != Some(id) {
            logf!("Link: open {:?}", id);
            let next = self.location_with(&self.state.with_open(Some(id)));
            self.navigator.push(next);
        }
        self.reconcile();
    }

    pub fn close(&mut self, trigger: CloseTrigger) {
        let Some(id) = self.pane.open_id().map(String::from) else {
            return;
        };
        logf!("Link: close {:?} via {:?}", id, trigger);
        self.dismissed.insert((self.state.query.clone(), id));
        let next = self.location_with(&self.state.with_open(None));
        self.navigator.push(next);
        self.reconcile();
    }

    /// Typing rewrites the current entry rather than stacking history.
    pub fn set_query(&mut self, query: &str) {
        if self.state.query == query {
            return;
        }
        logd!("Link: query {:?}", query);
        let next = FilterState { query: s!(query), ..self.state.clone() };
        let loc = self.location_with(&next);
        self.navigator.replace(loc);
        self.reconcile();
    }

    pub fn set_letter(&mut self, letter: Option<char>) {
        let letter = letter
            .map(|c| c.to_ascii_uppercase())
            .filter(|c| c.is_ascii_uppercase());
        if self.state.letter == letter {
            return;
        }
        logd!("Link: letter {:?}", letter);
        let next = FilterState { letter, ..self.state.clone() };
        let loc = self.location_with(&next);
        self.navigator.push(loc);
        self.reconcile();
    }

    pub fn clear_filters(&mut self) {
        let next = FilterState { query: s!(), letter: None, ..self.state.clone() };
        let loc = self.location_with(&next);
        self.navigator.push(loc);
        self.reconcile();
    }

    /* ---------- external navigation ---------- */

    pub fn back(&mut self) -> bool {
        let moved = self.navigator.back();
        if moved { self.reconcile(); }
        moved
    }

    pub fn forward(&mut self) -> bool {
        let moved = self.navigator.forward();
        if moved { self.reconcile(); }
        moved
    }

    /// A pasted or shared link. Relative hrefs resolve against the current path.
    pub fn navigate(&mut self, href: &str) -> Result<(), url::ParseError> {
        let loc = Location::parse(href, self.navigator.location().path())?;
        logf!("Link: navigate {}", loc);
        self.navigator.push(loc);
        self.reconcile();
        Ok(())
    }

    /* ---------- the one place state is derived ---------- */

    pub fn reconcile(&mut self) {
        self.state = FilterState::from_location(self.navigator.location());

        // An id that is unknown or filtered out is dropped from the location,
        // so a later filter change cannot bring the profile back by itself.
        let stale = match self.state.open.as_deref() {
            Some(id) => self.view().find(id).is_none(),
            None => false,
        };
        if stale {
            logd!("Link: open={:?} not in the current view, dropping it", self.state.open);
            self.state.open = None;
            let loc = self.location_with(&self.state);
            self.navigator.replace(loc);
        }

        let next = match self.state.open.as_deref() {
            Some(id) => Pane::Open(s!(id)),
            None => Pane::Closed,
        };
        self.enter(next);

        if let Some(id) = self.auto_open_candidate() {
            logd!("Link: auto-open {:?} for query {:?}", id, self.state.query);
            self.open(&id);
        }
    }

    /// Pane transition plus its side effects. Only edges touch the host.
    /// Leaving a profile by any route (including history) counts as
    /// dismissing it for the query now in effect.
    fn enter(&mut self, next: Pane) {
        match (self.pane.is_open(), next.is_open()) {
            (false, true) => {
                self.modal = Some(ModalSession::acquire(&mut self.host));
            }
            (true, false) => {
                if let Pane::Open(id) = &self.pane {
                    self.dismissed.insert((self.state.query.clone(), id.clone()));
                }
                if let Some(session) = self.modal.take() {
                    session.release(&mut self.host);
                }
            }
            _ => {}
        }
        self.pane = next;
    }

    fn auto_open_candidate(&self) -> Option<String> {
        if !self.auto_open || self.state.has_letter() || self.state.query.trim().is_empty() {
            return None;
        }
        let only = self.view().single()?;
        let id = only.id();
        if self.state.open.as_deref() == Some(id) || self.is_dismissed(&self.state.query, id) {
            return None;
        }
        Some(s!(id))
    }

    fn location_with(&self, state: &FilterState) -> Location {
        let mut loc = self.navigator.location().clone();
        state.write_to(&mut loc);
        loc
    }
}
