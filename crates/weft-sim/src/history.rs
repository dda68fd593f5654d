//! Bounded pointer history used to lag deeper layers.

use std::collections::VecDeque;

use weft_types::Vec2;

/// FIFO of past pointer positions, most recent last.
#[derive(Debug, Clone)]
pub struct PointerHistory {
    entries: VecDeque<Vec2>,
    capacity: usize,
}

impl PointerHistory {
    /// Creates an empty history. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `position`, dropping the oldest entry when full.
    pub fn push(&mut self, position: Vec2) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(position);
    }

    /// Pointer position seen by the layer at `depth`.
    ///
    /// Layer `i` reads `history[len - 1 - i]`, clamped to the oldest entry.
    /// Returns `None` only when the history is empty.
    pub fn delayed(&self, depth: usize) -> Option<Vec2> {
        let len = self.entries.len();
        let index = len.checked_sub(1)?.saturating_sub(depth);
        self.entries.get(index).copied()
    }

    pub fn get(&self, index: usize) -> Option<Vec2> {
        self.entries.get(index).copied()
    }

    pub fn latest(&self) -> Option<Vec2> {
        self.entries.back().copied()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
    pub fn capacity(&self) -> usize { self.capacity }
}
