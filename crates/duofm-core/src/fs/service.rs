//! The directory service — the seam between panes and the operating system.
//!
//! [`DirectoryService`] is the trait panes talk to; [`OsDirectoryService`]
//! is the real implementation backed by `tokio::fs`. Tests substitute mock
//! implementations to drive panes without touching the filesystem.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::{OpenReason, ServiceError, ServiceResult};
use crate::fs::entry::FileEntry;
use crate::nav::sort::sort_entries;

/// Asynchronous directory operations consumed by a pane store.
///
/// Expected failures (permission, not-found, invalid path, I/O) are returned
/// as typed [`ServiceError`] values, never panics. Implementations are not
/// required to sort listings; callers that need ordering apply it
/// themselves.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Lists the immediate contents of a directory.
    async fn list_directory(&self, path: &Path) -> ServiceResult<Vec<FileEntry>>;

    /// Returns the directory a fresh pane should display.
    async fn initial_directory(&self) -> ServiceResult<PathBuf>;

    /// Hands a file to the system's default application.
    async fn open_file(&self, path: &Path) -> ServiceResult<()>;
}

/// [`DirectoryService`] implementation backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsDirectoryService;

#[async_trait]
impl DirectoryService for OsDirectoryService {
    async fn list_directory(&self, path: &Path) -> ServiceResult<Vec<FileEntry>> {
        reject_nul(path)?;

        let meta = tokio::fs::metadata(path)
            .await
            .map_err(|e| ServiceError::from_io(&e, path))?;
        if !meta.is_dir() {
            return Err(ServiceError::InvalidPath {
                message: format!("not a directory: {}", path.display()),
            });
        }

        let mut read_dir = tokio::fs::read_dir(path)
            .await
            .map_err(|e| ServiceError::from_io(&e, path))?;

        let mut entries = Vec::new();
        while let Some(dir_entry) = read_dir
            .next_entry()
            .await
            .map_err(|e| ServiceError::from_io(&e, path))?
        {
            entries.push(read_entry(dir_entry).await);
        }

        // Courtesy only; the trait contract leaves ordering to the caller.
        sort_entries(&mut entries);
        tracing::debug!("listed {} entries in {}", entries.len(), path.display());
        Ok(entries)
    }

    async fn initial_directory(&self) -> ServiceResult<PathBuf> {
        dirs::home_dir().ok_or_else(|| ServiceError::Io {
            message: "could not determine the home directory".to_string(),
            path: None,
        })
    }

    async fn open_file(&self, path: &Path) -> ServiceResult<()> {
        reject_nul(path)?;

        if tokio::fs::symlink_metadata(path).await.is_err() {
            return Err(ServiceError::OpenFailed {
                path: path.to_path_buf(),
                reason: OpenReason::NotFound,
            });
        }

        open::that_detached(path).map_err(|e| ServiceError::OpenFailed {
            path: path.to_path_buf(),
            reason: OpenReason::from_message(&e.to_string()),
        })
    }
}

/// Builds a [`FileEntry`] for one directory child, degrading to
/// [`FileEntry::Unreadable`] instead of failing the whole listing.
async fn read_entry(dir_entry: tokio::fs::DirEntry) -> FileEntry {
    let path = dir_entry.path();
    let name = crate::nfc_string(&dir_entry.file_name().to_string_lossy());

    // DirEntry metadata does not traverse symlinks.
    let meta = match dir_entry.metadata().await {
        Ok(m) => m,
        Err(e) => {
            return FileEntry::Unreadable {
                name,
                path,
                reason: e.to_string(),
            }
        }
    };

    if meta.is_symlink() {
        let target = match tokio::fs::read_link(&path).await {
            Ok(t) => t,
            Err(e) => {
                return FileEntry::Unreadable {
                    name,
                    path,
                    reason: e.to_string(),
                }
            }
        };
        // Follow the link for the target's kind and size. A broken link
        // keeps its literal target and reads as a zero-sized non-directory.
        return match tokio::fs::metadata(&path).await {
            Ok(resolved) => FileEntry::Symlink {
                name,
                path,
                size: if resolved.is_dir() { 0 } else { resolved.len() },
                modified: resolved.modified().ok(),
                target,
                target_is_dir: resolved.is_dir(),
            },
            Err(_) => FileEntry::Symlink {
                name,
                path,
                size: 0,
                modified: None,
                target,
                target_is_dir: false,
            },
        };
    }

    if meta.is_dir() {
        FileEntry::Directory {
            name,
            path,
            modified: meta.modified().ok(),
        }
    } else {
        FileEntry::File {
            name,
            path,
            size: meta.len(),
            modified: meta.modified().ok(),
        }
    }
}

fn reject_nul(path: &Path) -> ServiceResult<()> {
    if path.as_os_str().as_encoded_bytes().contains(&0) {
        return Err(ServiceError::InvalidPath {
            message: "path contains a NUL byte".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    async fn list(path: &Path) -> ServiceResult<Vec<FileEntry>> {
        OsDirectoryService.list_directory(path).await
    }

    #[tokio::test]
    async fn lists_sorted_dirs_first_then_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("alpha_dir")).unwrap();
        fs::create_dir(tmp.path().join("beta_dir")).unwrap();
        fs::write(tmp.path().join("charlie.txt"), "").unwrap();
        fs::write(tmp.path().join("alpha.txt"), "").unwrap();
        fs::write(tmp.path().join("Beta.txt"), "").unwrap();

        let entries = list(tmp.path()).await.unwrap();
        let names: Vec<&str> = entries.iter().map(FileEntry::name).collect();
        assert_eq!(
            names,
            vec!["alpha_dir", "beta_dir", "alpha.txt", "Beta.txt", "charlie.txt"]
        );
    }

    #[tokio::test]
    async fn lists_hidden_files_and_sorts_directories_first() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("documents")).unwrap();
        fs::create_dir(tmp.path().join("downloads")).unwrap();
        fs::write(tmp.path().join("file.txt"), "").unwrap();
        fs::write(tmp.path().join("readme.md"), "").unwrap();
        fs::write(tmp.path().join(".hidden"), "").unwrap();

        let entries = list(tmp.path()).await.unwrap();
        let names: Vec<&str> = entries.iter().map(FileEntry::name).collect();
        assert_eq!(
            names,
            vec!["documents", "downloads", ".hidden", "file.txt", "readme.md"]
        );
    }

    #[tokio::test]
    async fn empty_directory_lists_nothing() {
        let tmp = TempDir::new().unwrap();
        let entries = list(tmp.path()).await.unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn missing_path_is_not_found() {
        let result = list(Path::new("/nonexistent/path/that/does/not/exist")).await;
        assert!(matches!(result, Err(ServiceError::NotFound { .. })));
    }

    #[tokio::test]
    async fn file_path_is_invalid() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("plain.txt");
        fs::write(&file, "").unwrap();

        let result = list(&file).await;
        match result {
            Err(ServiceError::InvalidPath { message }) => {
                assert!(message.contains("not a directory"));
            }
            other => panic!("expected InvalidPath, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn nul_byte_path_is_invalid() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"/tmp/with\0nul"));
        let result = list(path).await;
        assert!(matches!(result, Err(ServiceError::InvalidPath { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn unreadable_directory_is_permission_denied() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let restricted = tmp.path().join("restricted");
        fs::create_dir(&restricted).unwrap();
        fs::set_permissions(&restricted, fs::Permissions::from_mode(0o000)).unwrap();

        let result = list(&restricted).await;

        fs::set_permissions(&restricted, fs::Permissions::from_mode(0o755)).unwrap();
        assert!(matches!(result, Err(ServiceError::PermissionDenied { .. })));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn broken_symlink_keeps_literal_target() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("valid.txt"), "content").unwrap();
        std::os::unix::fs::symlink("/nonexistent/target", tmp.path().join("broken_link"))
            .unwrap();

        let entries = list(tmp.path()).await.unwrap();
        let broken = entries.iter().find(|e| e.name() == "broken_link").unwrap();
        match broken {
            FileEntry::Symlink {
                target,
                target_is_dir,
                size,
                ..
            } => {
                assert_eq!(target, Path::new("/nonexistent/target"));
                assert!(!target_is_dir);
                assert_eq!(*size, 0);
            }
            other => panic!("expected Symlink, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn symlink_to_directory_sorts_with_directories() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("real_dir")).unwrap();
        fs::write(tmp.path().join("aaa.txt"), "").unwrap();
        std::os::unix::fs::symlink(tmp.path().join("real_dir"), tmp.path().join("dir_link"))
            .unwrap();

        let entries = list(tmp.path()).await.unwrap();
        let names: Vec<&str> = entries.iter().map(FileEntry::name).collect();
        assert_eq!(names, vec!["dir_link", "real_dir", "aaa.txt"]);

        let link = entries.iter().find(|e| e.name() == "dir_link").unwrap();
        assert!(link.is_dir());
    }

    #[tokio::test]
    async fn readable_entries_are_never_unreadable() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("file1.txt"), "content1").unwrap();
        fs::write(tmp.path().join("file2.txt"), "content2").unwrap();
        fs::create_dir(tmp.path().join("subdir")).unwrap();

        let entries = list(tmp.path()).await.unwrap();
        assert_eq!(entries.len(), 3);
        for entry in &entries {
            assert!(!matches!(entry, FileEntry::Unreadable { .. }));
        }
    }

    #[tokio::test]
    async fn unicode_names_survive_listing() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("日本語.txt"), "").unwrap();
        fs::create_dir(tmp.path().join("中文目录")).unwrap();

        let entries = list(tmp.path()).await.unwrap();
        let names: Vec<&str> = entries.iter().map(FileEntry::name).collect();
        assert!(names.contains(&"日本語.txt"));
        assert!(names.contains(&"中文目录"));
    }

    #[tokio::test]
    async fn file_sizes_and_timestamps_are_reported() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("five.txt"), "12345").unwrap();

        let entries = list(tmp.path()).await.unwrap();
        match &entries[0] {
            FileEntry::File { size, modified, .. } => {
                assert_eq!(*size, 5);
                assert!(modified.is_some());
            }
            other => panic!("expected File, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn open_missing_file_fails_with_not_found_reason() {
        let result = OsDirectoryService
            .open_file(Path::new("/nonexistent/file.txt"))
            .await;
        match result {
            Err(ServiceError::OpenFailed { reason, path }) => {
                assert_eq!(reason, OpenReason::NotFound);
                assert_eq!(path, PathBuf::from("/nonexistent/file.txt"));
            }
            other => panic!("expected OpenFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn initial_directory_points_at_home() {
        let dir = OsDirectoryService.initial_directory().await;
        // CI containers always have a home directory.
        assert!(dir.is_ok());
    }
}
