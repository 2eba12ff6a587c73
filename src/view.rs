// src/view.rs
//
// Derived, borrowed view of the roster for one FilterState.
//
// - Roster: canonical records, loaded once and never mutated.
// - TieredView: the filtered + sorted records split into the three display
//   tiers. Rebuilt from scratch on every state change; holds references only.

use crate::core::{filter, Tier};
use crate::link::state::FilterState;
use crate::roster::{Roster, StaffRecord};

#[derive(Clone, Debug, Default)]
pub struct TieredView<'a> {
    tiers: [Vec<&'a StaffRecord>; 3],
}

impl<'a> TieredView<'a> {
    pub fn build(roster: &'a Roster, state: &FilterState) -> Self {
        let mut tiers: [Vec<&StaffRecord>; 3] = Default::default();
        for record in roster.iter().filter(|r| filter::matches(r, state)) {
            tiers[record.tier().index()].push(record);
        }
        for tier in &mut tiers {
            filter::sort_records(tier);
        }
        Self { tiers }
    }

    pub fn tier(&self, tier: Tier) -> &[&'a StaffRecord] {
        &self.tiers[tier.index()]
    }

    pub fn len(&self) -> usize {
        self.tiers.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.iter().all(Vec::is_empty)
    }

    /// Records in display order: leadership, teaching, support.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &'a StaffRecord)> + '_ {
        Tier::ALL
            .into_iter()
            .flat_map(move |t| self.tier(t).iter().map(move |r| (t, *r)))
    }

    pub fn find(&self, id: &str) -> Option<&'a StaffRecord> {
        self.iter().map(|(_, r)| r).find(|r| r.id() == id)
    }

    /// The only visible record, if exactly one is visible.
    pub fn single(&self) -> Option<&'a StaffRecord> {
        let mut it = self.iter().map(|(_, r)| r);
        match (it.next(), it.next()) {
            (Some(r), None) => Some(r),
            _ => None,
        }
    }
}

impl Roster {
    pub fn view(&self, state: &FilterState) -> TieredView<'_> {
        TieredView::build(self, state)
    }
}
