//! Per-path cursor memory.

use std::path::{Path, PathBuf};

/// Bounded map from directory path to the cursor index it last showed.
///
/// Eviction is by insertion order: when the map is full the oldest saved
/// path is dropped. Re-saving a path moves it to the most-recent position,
/// so directories the user keeps returning to are never the ones evicted.
///
/// Backed by a plain vector of pairs; at the default capacity of a few
/// hundred entries a linear scan beats hashing.
#[derive(Debug, Clone)]
pub struct CursorMemory {
    slots: Vec<(PathBuf, usize)>,
    capacity: usize,
}

impl CursorMemory {
    /// Creates an empty memory holding at most `capacity` paths.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::new(),
            capacity,
        }
    }

    /// Remembers `cursor` for `path`, refreshing its eviction position.
    pub fn save(&mut self, path: &Path, cursor: usize) {
        if let Some(existing) = self.slots.iter().position(|(p, _)| p == path) {
            self.slots.remove(existing);
        }
        self.slots.push((path.to_path_buf(), cursor));
        if self.slots.len() > self.capacity {
            self.slots.remove(0);
        }
    }

    /// Returns the last-known cursor for `path`, if any.
    pub fn get(&self, path: &Path) -> Option<usize> {
        self.slots
            .iter()
            .find(|(p, _)| p == path)
            .map(|&(_, cursor)| cursor)
    }

    /// Number of remembered paths.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if nothing has been remembered yet.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
