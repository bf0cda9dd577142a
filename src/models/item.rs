// src/models/item.rs
use std::fmt;

/// A single checklist entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub task: String,
    pub completed: bool,
}

impl Item {
    #[inline]
    #[must_use]
    pub const fn marker(&self) -> char {
        if self.completed { 'x' } else { ' ' }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.marker(), self.id, self.task)
    }
}
