// src/link/state.rs
use super::location::Location;
use crate::config::consts::{PARAM_LETTER, PARAM_OPEN, PARAM_QUERY};

/// Everything that decides what the directory shows. Lives only in the
/// location's query string, so a reload or shared link reproduces the view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Raw search text, exactly as typed
    pub query: String,
    /// 'A'..='Z'
    pub letter: Option<char>,
    /// Id of the open profile
    pub open: Option<String>,
}

impl FilterState {
    pub fn from_location(loc: &Location) -> Self {
        Self {
            query: loc.get(PARAM_QUERY).map(String::from).unwrap_or_default(),
            letter: loc.get(PARAM_LETTER).and_then(parse_letter),
            open: loc.get(PARAM_OPEN).filter(|v| !v.is_empty()).map(String::from),
        }
    }

    /// Merge into `loc`, dropping keys that are absent and leaving any other
    /// parameters where they are.
    pub fn write_to(&self, loc: &mut Location) {
        loc.set(PARAM_QUERY, Some(self.query.as_str()).filter(|q| !q.is_empty()));
        let letter = self.letter.map(|c| c.to_string());
        loc.set(PARAM_LETTER, letter.as_deref());
        loc.set(PARAM_OPEN, self.open.as_deref().filter(|v| !v.is_empty()));
    }

    pub fn has_letter(&self) -> bool {
        self.letter.is_some()
    }

    pub fn with_open(&self, id: Option<&str>) -> Self {
        Self { open: id.map(String::from), ..self.clone() }
    }
}

/// First character, upper-cased; anything outside A–Z is no letter.
pub fn parse_letter(s: &str) -> Option<char> {
    s.trim()
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| c.is_ascii_uppercase())
}
