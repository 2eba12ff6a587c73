// src/core/classify.rs
//
// Tier classification.
//
// An explicit `team` tag from the content store always wins. Without one we
// fall back to keyword matching over role + department. That fallback is an
// approximation: anything it cannot place lands in Teaching, and the fix for
// a misplaced person is to tag them in the content store, not to grow the
// keyword lists until they contradict each other.

use std::fmt;

use crate::roster::StaffRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tier {
    Leadership,
    Teaching,
    Support,
}

impl Tier {
    /// Display order.
    pub const ALL: [Tier; 3] = [Tier::Leadership, Tier::Teaching, Tier::Support];

    pub fn index(self) -> usize {
        match self {
            Tier::Leadership => 0,
            Tier::Teaching => 1,
            Tier::Support => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tier::Leadership => "Senior Leadership",
            Tier::Teaching => "Teaching Staff",
            Tier::Support => "Support Staff",
        }
    }

    /// Explicit content-store tag → tier. Unknown tags are ignored.
    pub fn from_tag(tag: &str) -> Option<Tier> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "slt" => Some(Tier::Leadership),
            "teaching" => Some(Tier::Teaching),
            "support" => Some(Tier::Support),
            _ => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// How a keyword is allowed to match the role/department words.
#[derive(Clone, Copy, Debug)]
enum Term {
    /// A complete word ("it" must not match "italian")
    Word(&'static str),
    /// Any word starting with the stem ("admin" matches "administrator")
    Stem(&'static str),
    /// Consecutive complete words ("assistant head")
    Phrase(&'static [&'static str]),
}

const LEADERSHIP: &[Term] = &[
    Term::Stem("headteacher"),
    Term::Phrase(&["head", "teacher"]),
    Term::Stem("deputy"),
    Term::Phrase(&["assistant", "head"]),
    Term::Phrase(&["executive", "head"]),
    Term::Phrase(&["head", "of", "school"]),
    Term::Stem("principal"),
    Term::Word("slt"),
    Term::Phrase(&["senior", "leadership"]),
];

// Support keywords are checked against the whole role text, so a subject
// name that is also a department ("Teacher of IT") lands in Support. Such
// records need the explicit `team` tag.
const SUPPORT: &[Term] = &[
    Term::Stem("admin"),
    Term::Word("site"),
    Term::Stem("finance"),
    Term::Stem("librar"),
    Term::Word("it"),
    Term::Stem("pastoral"),
    Term::Word("office"),
    Term::Stem("reception"),
    Term::Stem("technician"),
    Term::Stem("attendance"),
    Term::Stem("exams"),
    Term::Stem("catering"),
    Term::Stem("cleaner"),
    Term::Stem("cleaning"),
    Term::Stem("premises"),
    Term::Word("hr"),
    Term::Phrase(&["data", "manager"]),
    Term::Phrase(&["business", "manager"]),
];

fn lower_words(s: &str) -> Vec<String> {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn term_matches(term: &Term, words: &[String]) -> bool {
    match term {
        Term::Word(w) => words.iter().any(|x| x == w),
        Term::Stem(stem) => words.iter().any(|x| x.starts_with(stem)),
        Term::Phrase(parts) => words
            .windows(parts.len())
            .any(|win| win.iter().zip(parts.iter()).all(|(a, b)| a == b)),
    }
}

fn any_term(terms: &[Term], words: &[String]) -> bool {
    terms.iter().any(|t| term_matches(t, words))
}

/// Keyword fallback over free text (role and department joined).
pub fn classify_text(text: &str) -> Tier {
    let words = lower_words(text);
    if any_term(LEADERSHIP, &words) {
        Tier::Leadership
    } else if any_term(SUPPORT, &words) {
        Tier::Support
    } else {
        Tier::Teaching
    }
}

pub fn classify(record: &StaffRecord) -> Tier {
    if let Some(tier) = record.team().and_then(Tier::from_tag) {
        return tier;
    }
    let role = record.role().unwrap_or("");
    let department = record.department().unwrap_or("");
    classify_text(&join!(role, " ", department))
}
