// src/core/names.rs
//
// Display names → matchable parts.
//
// Names arrive from the content store as typed by editors: accents, NBSPs,
// zero-width joiners and "Last, First" ordering all happen. Everything here
// is total; garbage in gives empty parts out, never an error.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use super::sanitize::clean_invisible;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameParts {
    /// Latin-letter runs of the whole name, in order
    pub words: Vec<String>,
    /// Given name ("" when unknown)
    pub first: String,
    /// Surname ("" when unknown)
    pub last: String,
}

impl NameParts {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Uppercase initials of every word, in order.
    pub fn initials(&self) -> impl Iterator<Item = char> + '_ {
        self.words.iter().filter_map(|w| initial(w))
    }

    pub fn first_initial(&self) -> Option<char> {
        initial(&self.first)
    }

    pub fn last_initial(&self) -> Option<char> {
        initial(&self.last)
    }
}

fn initial(word: &str) -> Option<char> {
    word.chars().next().map(|c| c.to_ascii_uppercase())
}

/// Invisible characters cleaned, NFD applied and combining marks dropped.
/// Punctuation, digits and commas survive so the result can be normalized again.
pub fn fold(name: &str) -> String {
    clean_invisible(name)
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Folded and lower-cased; the key used for sorting and substring search.
pub fn match_key(s: &str) -> String {
    fold(s).to_lowercase()
}

fn words_of(s: &str) -> Vec<String> {
    s.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect()
}

pub fn normalize(name: &str) -> NameParts {
    let folded = fold(name);
    let words = words_of(&folded);
    if words.is_empty() {
        return NameParts::default();
    }

    let (first, last) = match folded.split_once(',') {
        // "Last, First": surname phrase on the left, given names on the right
        Some((surname, given)) => {
            let last = words_of(surname).pop().unwrap_or_default();
            let first = words_of(given).into_iter().next().unwrap_or_default();
            (first, last)
        }
        None => (words[0].clone(), words[words.len() - 1].clone()),
    };

    NameParts { words, first, last }
}
