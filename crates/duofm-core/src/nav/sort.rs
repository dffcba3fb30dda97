//! Canonical listing order for file entries.

use std::cmp::Ordering;

use crate::fs::entry::FileEntry;

/// Sorts entries in place: directories (including symlinks to directories)
/// first, then case-insensitive by name. The sort is stable, so entries
/// whose lowercased names collide keep their incoming relative order.
pub fn sort_entries(entries: &mut [FileEntry]) {
    entries.sort_by(compare_entries);
}

fn compare_entries(a: &FileEntry, b: &FileEntry) -> Ordering {
    b.is_dir()
        .cmp(&a.is_dir())
        .then_with(|| a.name().to_lowercase().cmp(&b.name().to_lowercase()))
}
