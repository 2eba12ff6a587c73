// src/core/filter.rs
//
// Query + letter filtering and (surname, given name) ordering.
// Pure: the same records and state always give the same output.

use std::cmp::Ordering;

use crate::link::state::FilterState;
use crate::roster::StaffRecord;

/// Case- and accent-insensitive substring match over name, role, department.
pub fn matches_query(record: &StaffRecord, query: &str) -> bool {
    let needle = super::names::match_key(query.trim());
    if needle.is_empty() {
        return true;
    }
    record.search_key().contains(&needle)
}

/// Surname initial, given-name initial, or the initial of any word in the name.
pub fn matches_letter(record: &StaffRecord, letter: Option<char>) -> bool {
    let Some(letter) = letter else { return true };
    let letter = letter.to_ascii_uppercase();
    let parts = record.name_parts();
    parts.last_initial() == Some(letter)
        || parts.first_initial() == Some(letter)
        || parts.initials().any(|c| c == letter)
}

pub fn matches(record: &StaffRecord, state: &FilterState) -> bool {
    matches_query(record, &state.query) && matches_letter(record, state.letter)
}

/// Surname first, then given name. Empty names compare as "" and so come first.
pub fn compare(a: &StaffRecord, b: &StaffRecord) -> Ordering {
    let (a_last, a_first) = a.sort_key();
    let (b_last, b_first) = b.sort_key();
    a_last.cmp(b_last).then_with(|| a_first.cmp(b_first))
}

/// Stable, so records with equal keys keep roster order.
pub fn sort_records(records: &mut [&StaffRecord]) {
    records.sort_by(|a, b| compare(a, b));
}

pub fn apply<'a, I>(records: I, state: &FilterState) -> Vec<&'a StaffRecord>
where
    I: IntoIterator<Item = &'a StaffRecord>,
{
    let mut out: Vec<&StaffRecord> = records
        .into_iter()
        .filter(|r| matches(r, state))
        .collect();
    sort_records(&mut out);
    out
}
