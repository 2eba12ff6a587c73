// tests/deep_link.rs
//
// Controller behaviour through a host that records focus and scroll effects.

use staff_directory::link::{
    CloseTrigger, DeepLinkController, Location, MemoryHistory, ModalHost, Navigator, Pane,
};
use staff_directory::roster::{Roster, StaffRecord};

const CLOSE_BUTTON: u32 = 999;

#[derive(Debug, Default)]
struct RecordingHost {
    focus: Option<u32>,
    locked: bool,
    acquired: usize,
    released: usize,
}

impl ModalHost for RecordingHost {
    type Focus = u32;

    fn focused(&self) -> Option<u32> {
        self.focus
    }

    fn restore_focus(&mut self, target: Option<u32>) {
        self.released += 1;
        self.focus = target;
    }

    fn focus_close_control(&mut self) {
        self.acquired += 1;
        self.focus = Some(CLOSE_BUTTON);
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.locked = locked;
    }
}

type Ctl = DeepLinkController<MemoryHistory, RecordingHost>;

fn roster() -> Roster {
    Roster::new(vec![
        StaffRecord::new("1", "Zara Ahmed").with_role("Teacher"),
        StaffRecord::new("abc123", "Ahmed Khan").with_role("Site Manager").with_team("support"),
        StaffRecord::new("3", "Alice Brown").with_role("Headteacher"),
    ])
}

fn at(href: &str) -> Ctl {
    let loc = Location::parse(href, "/staff").unwrap();
    DeepLinkController::new(roster(), MemoryHistory::new(loc), RecordingHost::default())
}

#[test]
fn open_then_escape_restores_url_and_focus() {
    let mut ctl = at("/staff?q=ahmed&letter=K");
    ctl.host_mut().focus = Some(7);

    ctl.open("abc123");
    assert_eq!(ctl.location().href(), "/staff?q=ahmed&letter=K&open=abc123");
    assert_eq!(ctl.pane(), &Pane::Open("abc123".into()));
    assert_eq!(ctl.current().map(|r| r.name()), Some("Ahmed Khan"));
    assert!(ctl.host().locked);
    assert_eq!(ctl.host().focus, Some(CLOSE_BUTTON));

    ctl.close(CloseTrigger::Escape);
    assert_eq!(ctl.location().href(), "/staff?q=ahmed&letter=K");
    assert_eq!(ctl.pane(), &Pane::Closed);
    assert!(!ctl.host().locked);
    assert_eq!(ctl.host().focus, Some(7));
}

#[test]
fn every_close_trigger_runs_the_same_cleanup() {
    for trigger in [CloseTrigger::CloseButton, CloseTrigger::Backdrop, CloseTrigger::Escape] {
        let mut ctl = at("/staff");
        ctl.host_mut().focus = Some(3);
        ctl.open("3");
        ctl.close(trigger);
        let host = ctl.host();
        assert_eq!((host.acquired, host.released), (1, 1), "{trigger:?}");
        assert!(!host.locked);
        assert_eq!(host.focus, Some(3));
        assert_eq!(ctl.location().href(), "/staff");
    }
}

#[test]
fn back_closes_like_any_other_exit_and_forward_reopens() {
    let mut ctl = at("/staff");
    ctl.host_mut().focus = Some(11);
    ctl.open("1");
    assert!(ctl.host().locked);

    assert!(ctl.back());
    assert_eq!(ctl.pane(), &Pane::Closed);
    assert!(!ctl.host().locked);
    assert_eq!(ctl.host().focus, Some(11));
    assert_eq!(ctl.host().released, 1);

    assert!(ctl.forward());
    assert_eq!(ctl.pane(), &Pane::Open("1".into()));
    assert!(ctl.host().locked);
    assert_eq!(ctl.host().acquired, 2);
}

#[test]
fn shared_link_opens_on_arrival() {
    let ctl = at("/staff?open=abc123");
    assert_eq!(ctl.pane(), &Pane::Open("abc123".into()));
    assert!(ctl.host().locked);
}

#[test]
fn unknown_or_filtered_out_id_stays_closed() {
    let ctl = at("/staff?open=nope");
    assert_eq!(ctl.pane(), &Pane::Closed);
    assert!(!ctl.host().locked);
    assert_eq!(ctl.host().acquired, 0);

    assert_eq!(ctl.location().href(), "/staff");

    // Present in the roster but hidden by the current filter.
    let ctl = at("/staff?q=zara&letter=Z&open=abc123");
    assert_eq!(ctl.pane(), &Pane::Closed);
    assert_eq!(ctl.location().href(), "/staff?q=zara&letter=Z");
}

#[test]
fn filtered_out_id_does_not_open_when_the_filter_changes() {
    let mut ctl = at("/staff?letter=Z&open=abc123");
    assert_eq!(ctl.pane(), &Pane::Closed);
    assert_eq!(ctl.location().href(), "/staff?letter=Z");

    // Ahmed Khan is back in view under K, but nobody asked to open him.
    ctl.set_letter(Some('K'));
    assert_eq!(ctl.location().href(), "/staff?letter=K");
    assert_eq!(ctl.pane(), &Pane::Closed);
    assert_eq!(ctl.host().acquired, 0);
    assert!(!ctl.host().locked);
}

#[test]
fn switching_profiles_keeps_one_modal_session() {
    let mut ctl = at("/staff");
    ctl.host_mut().focus = Some(5);

    ctl.open("1");
    ctl.navigate("?open=3").unwrap();
    assert_eq!(ctl.pane(), &Pane::Open("3".into()));
    assert_eq!(ctl.host().acquired, 1);
    assert_eq!(ctl.host().released, 0);
    assert!(ctl.host().locked);

    ctl.close(CloseTrigger::Escape);
    assert_eq!(ctl.pane(), &Pane::Closed);
    assert_eq!((ctl.host().acquired, ctl.host().released), (1, 1));
    assert_eq!(ctl.host().focus, Some(5));
    assert!(!ctl.host().locked);
}

#[test]
fn single_match_auto_opens_once() {
    let mut ctl = at("/staff");
    ctl.set_query("khan");
    assert_eq!(ctl.pane(), &Pane::Open("abc123".into()));
    assert_eq!(ctl.location().href(), "/staff?q=khan&open=abc123");

    ctl.close(CloseTrigger::CloseButton);
    assert_eq!(ctl.pane(), &Pane::Closed);
    assert!(ctl.is_dismissed("khan", "abc123"));
    assert_eq!(ctl.location().href(), "/staff?q=khan");

    // Re-deriving with the same query does not reopen it.
    ctl.reconcile();
    assert_eq!(ctl.pane(), &Pane::Closed);
}

#[test]
fn dismissal_is_keyed_on_the_exact_query() {
    let mut ctl = at("/staff");
    ctl.set_query("khan");
    ctl.close(CloseTrigger::Escape);

    ctl.set_query("khan ");
    assert_eq!(ctl.pane(), &Pane::Open("abc123".into()));
}

#[test]
fn back_out_of_auto_open_does_not_bounce() {
    let mut ctl = at("/staff");
    ctl.set_query("khan");
    assert!(ctl.pane().is_open());

    assert!(ctl.back());
    assert_eq!(ctl.location().href(), "/staff?q=khan");
    assert_eq!(ctl.pane(), &Pane::Closed);
}

#[test]
fn letter_or_blank_query_suppresses_auto_open() {
    let mut ctl = at("/staff?q=khan&letter=K");
    assert_eq!(ctl.pane(), &Pane::Closed);
    ctl.set_letter(None);
    assert_eq!(ctl.pane(), &Pane::Open("abc123".into()));

    // One record overall, but nothing typed.
    let one = Roster::new(vec![StaffRecord::new("only", "Sole Person")]);
    let ctl = DeepLinkController::new(
        one,
        MemoryHistory::new(Location::new("/staff")),
        RecordingHost::default(),
    );
    assert_eq!(ctl.pane(), &Pane::Closed);
}

#[test]
fn auto_open_can_be_switched_off() {
    let loc = Location::new("/staff");
    let mut ctl = DeepLinkController::with_auto_open(
        roster(),
        MemoryHistory::new(loc),
        RecordingHost::default(),
        false,
    );
    ctl.set_query("khan");
    assert_eq!(ctl.pane(), &Pane::Closed);
    assert_eq!(ctl.view().len(), 1);
}

#[test]
fn typing_replaces_and_clicks_push() {
    let mut ctl = Ctl::with_auto_open(
        roster(),
        MemoryHistory::new(Location::new("/staff")),
        RecordingHost::default(),
        false,
    );
    ctl.set_query("a");
    ctl.set_query("al");
    assert_eq!(ctl.navigator().len(), 1);

    ctl.set_letter(Some('b'));
    assert_eq!(ctl.state().letter, Some('B'));
    assert_eq!(ctl.navigator().len(), 2);

    ctl.open("3");
    ctl.close(CloseTrigger::Backdrop);
    assert_eq!(ctl.navigator().len(), 4);
    assert_eq!(ctl.location().href(), "/staff?q=al&letter=B");

    ctl.clear_filters();
    assert_eq!(ctl.location().href(), "/staff");
    assert!(ctl.navigator().can_go_back());
    assert!(!ctl.navigator().can_go_forward());
}

#[test]
fn closing_when_closed_is_a_no_op() {
    let mut ctl = at("/staff?q=zz");
    ctl.close(CloseTrigger::Escape);
    assert_eq!(ctl.navigator().len(), 1);
    assert_eq!(ctl.host().released, 0);
}

#[test]
fn pasted_link_resolves_against_current_path() {
    let mut ctl = at("/staff");
    ctl.navigate("?letter=b").unwrap();
    assert_eq!(ctl.location().href(), "/staff?letter=b");
    assert_eq!(ctl.state().letter, Some('B'));
    assert_eq!(ctl.view().len(), 1);
}
