// src/link/navigator.rs
use super::location::Location;

/// Where the current location lives. Frontends own one; the controller only
/// talks to it through this trait.
pub trait Navigator {
    fn location(&self) -> &Location;

    /// New history entry. Never reloads data or resets scroll.
    fn push(&mut self, to: Location);

    /// Overwrite the current entry.
    fn replace(&mut self, to: Location);

    /// Returns false when there is nothing to go back to.
    fn back(&mut self) -> bool;

    fn forward(&mut self) -> bool;

    fn can_go_back(&self) -> bool { false }
    fn can_go_forward(&self) -> bool { false }
}

/// In-process history stack with a cursor.
#[derive(Clone, Debug)]
pub struct MemoryHistory {
    entries: Vec<Location>,
    cursor: usize,
}

impl MemoryHistory {
    pub fn new(start: Location) -> Self {
        Self { entries: vec![start], cursor: 0 }
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
    pub fn entries(&self) -> &[Location] { &self.entries }
}

impl Navigator for MemoryHistory {
    fn location(&self) -> &Location {
        &self.entries[self.cursor]
    }

    fn push(&mut self, to: Location) {
        if *self.location() == to {
            return;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(to);
        self.cursor += 1;
    }

    fn replace(&mut self, to: Location) {
        self.entries[self.cursor] = to;
    }

    fn back(&mut self) -> bool {
        if self.cursor == 0 { return false; }
        self.cursor -= 1;
        true
    }

    fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() { return false; }
        self.cursor += 1;
        true
    }

    fn can_go_back(&self) -> bool { self.cursor > 0 }
    fn can_go_forward(&self) -> bool { self.cursor + 1 < self.entries.len() }
}
