//! File entry representation.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A single entry in a directory listing.
///
/// Entries are immutable once constructed. Symlinks carry both the literal
/// link target and whether the resolved target is a directory; entries whose
/// metadata could not be read are kept in the listing as [`Unreadable`]
/// rather than being dropped.
///
/// [`Unreadable`]: FileEntry::Unreadable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileEntry {
    File {
        name: String,
        path: PathBuf,
        size: u64,
        modified: Option<SystemTime>,
    },
    Directory {
        name: String,
        path: PathBuf,
        modified: Option<SystemTime>,
    },
    Symlink {
        name: String,
        path: PathBuf,
        size: u64,
        modified: Option<SystemTime>,
        /// The literal link target, preserved even when it does not exist.
        target: PathBuf,
        target_is_dir: bool,
    },
    Unreadable {
        name: String,
        path: PathBuf,
        reason: String,
    },
}

impl FileEntry {
    /// Returns the file or directory name (last component of the path).
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            FileEntry::File { name, .. }
            | FileEntry::Directory { name, .. }
            | FileEntry::Symlink { name, .. }
            | FileEntry::Unreadable { name, .. } => name,
        }
    }

    /// Returns the full path of this entry.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            FileEntry::File { path, .. }
            | FileEntry::Directory { path, .. }
            | FileEntry::Symlink { path, .. }
            | FileEntry::Unreadable { path, .. } => path,
        }
    }

    /// Returns `true` for directories and for symlinks whose target is a
    /// directory, i.e. the set of entries that can be navigated into.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        matches!(
            self,
            FileEntry::Directory { .. }
                | FileEntry::Symlink {
                    target_is_dir: true,
                    ..
                }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> FileEntry {
        FileEntry::File {
            name: name.to_string(),
            path: PathBuf::from(format!("/test/{name}")),
            size: 0,
            modified: None,
        }
    }

    #[test]
    fn accessors_cover_all_variants() {
        let entries = [
            file("a.txt"),
            FileEntry::Directory {
                name: "docs".to_string(),
                path: PathBuf::from("/test/docs"),
                modified: None,
            },
            FileEntry::Symlink {
                name: "link".to_string(),
                path: PathBuf::from("/test/link"),
                size: 0,
                modified: None,
                target: PathBuf::from("/elsewhere"),
                target_is_dir: false,
            },
            FileEntry::Unreadable {
                name: "locked".to_string(),
                path: PathBuf::from("/test/locked"),
                reason: "permission denied".to_string(),
            },
        ];

        let names: Vec<&str> = entries.iter().map(FileEntry::name).collect();
        assert_eq!(names, vec!["a.txt", "docs", "link", "locked"]);
        for entry in &entries {
            assert_eq!(entry.path(), Path::new(&format!("/test/{}", entry.name())));
        }
    }

    #[test]
    fn plain_file_is_not_a_directory() {
        assert!(!file("a.txt").is_dir());
    }

    #[test]
    fn directory_is_a_directory() {
        let dir = FileEntry::Directory {
            name: "docs".to_string(),
            path: PathBuf::from("/test/docs"),
            modified: None,
        };
        assert!(dir.is_dir());
    }

    #[test]
    fn symlink_follows_target_kind() {
        let to_dir = FileEntry::Symlink {
            name: "d".to_string(),
            path: PathBuf::from("/test/d"),
            size: 0,
            modified: None,
            target: PathBuf::from("/somewhere"),
            target_is_dir: true,
        };
        let to_file = FileEntry::Symlink {
            name: "f".to_string(),
            path: PathBuf::from("/test/f"),
            size: 12,
            modified: None,
            target: PathBuf::from("/somewhere/f.txt"),
            target_is_dir: false,
        };
        assert!(to_dir.is_dir());
        assert!(!to_file.is_dir());
    }

    #[test]
    fn unreadable_is_not_a_directory() {
        let entry = FileEntry::Unreadable {
            name: "x".to_string(),
            path: PathBuf::from("/test/x"),
            reason: "io error".to_string(),
        };
        assert!(!entry.is_dir());
    }
}
