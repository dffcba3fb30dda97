//! Pane state and the navigation store.
//!
//! [`PaneStore`] owns one pane's [`PaneState`] and sequences its directory
//! loads. Loads may overlap (rapid double-click plus keyboard navigation);
//! a monotonically increasing token decides which in-flight result is still
//! current, and every stale result is discarded wholesale. There is no
//! cancellation signal to the directory service — last navigation wins at
//! the resumption point.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::fs::entry::FileEntry;
use crate::fs::service::DirectoryService;
use crate::nav::cursor::CursorMemory;
use crate::nav::history::History;
use crate::nav::sort::sort_entries;

/// How many directories a pane remembers cursor positions for.
const CURSOR_MEMORY_CAPACITY: usize = 500;

/// Observable state of one pane.
///
/// An empty `path` means the pane has not completed a load yet. `cursor`
/// is `None` exactly when `entries` is empty; otherwise it indexes into
/// `entries`. `error` and a populated listing are mutually exclusive
/// outcomes of a single load, but a failed load keeps the previous listing
/// on display, so both can be non-empty at once afterwards.
#[derive(Debug, Clone)]
pub struct PaneState {
    path: PathBuf,
    entries: Vec<FileEntry>,
    loading: bool,
    error: Option<String>,
    cursor: Option<usize>,
    history: History,
}

impl PaneState {
    fn new() -> Self {
        Self {
            path: PathBuf::new(),
            entries: Vec::new(),
            loading: true,
            error: None,
            cursor: None,
            history: History::new(),
        }
    }

    /// The directory currently displayed; empty before the first load.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries of the displayed directory, in canonical listing order.
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// `true` while a load is in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Message of the most recent failed load, if it has not been
    /// superseded by a successful one.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Index of the highlighted entry; `None` iff the listing is empty.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The highlighted entry, if any.
    pub fn selected_entry(&self) -> Option<&FileEntry> {
        self.cursor.and_then(|i| self.entries.get(i))
    }

    /// Previously visited paths, most recent last.
    pub fn back_stack(&self) -> &[PathBuf] {
        self.history.back()
    }

    /// Paths reachable by redoing a back navigation, most recent last.
    pub fn forward_stack(&self) -> &[PathBuf] {
        self.history.forward()
    }

    fn has_path(&self) -> bool {
        !self.path.as_os_str().is_empty()
    }
}

struct Inner {
    state: PaneState,
    load_seq: u64,
    cursor_memory: CursorMemory,
}

impl Inner {
    /// Remembers the current cursor for the current path.
    fn save_cursor(&mut self) {
        if !self.state.has_path() {
            return;
        }
        if let Some(cursor) = self.state.cursor {
            self.cursor_memory.save(&self.state.path, cursor);
        }
    }
}

/// Navigation store for one pane.
///
/// Methods take `&self` so callers can hold the store in an `Arc` and let
/// slow loads overlap; the internal lock is only ever taken between await
/// points. Two panes are two separately constructed stores; they share
/// nothing except, optionally, the directory service.
pub struct PaneStore {
    service: Arc<dyn DirectoryService>,
    inner: Mutex<Inner>,
}

impl PaneStore {
    /// Creates a store in the not-yet-loaded state.
    pub fn new(service: Arc<dyn DirectoryService>) -> Self {
        Self {
            service,
            inner: Mutex::new(Inner {
                state: PaneState::new(),
                load_seq: 0,
                cursor_memory: CursorMemory::new(CURSOR_MEMORY_CAPACITY),
            }),
        }
    }

    /// Returns a snapshot of the pane's current state.
    pub fn state(&self) -> PaneState {
        self.lock().state.clone()
    }

    /// Resolves the service's initial directory and loads it.
    ///
    /// No history is recorded (there is no prior path to return to). Any
    /// failure, including resolving the initial directory itself, degrades
    /// to an error message on the pane.
    pub async fn initialize(&self) {
        match self.service.initial_directory().await {
            Ok(dir) => {
                self.load_directory(&dir, false).await;
            }
            Err(err) => {
                tracing::warn!("initial directory unavailable: {err}");
                let mut inner = self.lock();
                inner.state.error = Some(err.to_string());
                inner.state.loading = false;
            }
        }
    }

    /// Navigates to `path`, recording the current path in the back stack
    /// and restoring the cursor the target was last seen with.
    pub async fn navigate_to(&self, path: &Path) {
        {
            let mut inner = self.lock();
            if inner.state.has_path() && inner.state.path.as_path() != path {
                inner.save_cursor();
                let from = inner.state.path.clone();
                inner.state.history.record(from);
            }
        }
        self.load_directory(path, true).await;
    }

    /// Re-reads the current directory. History and cursor memory are left
    /// alone; the cursor returns to the top. Does nothing before the first
    /// successful load.
    pub async fn refresh(&self) {
        let current = {
            let inner = self.lock();
            if !inner.state.has_path() {
                return;
            }
            inner.state.path.clone()
        };
        self.load_directory(&current, false).await;
    }

    /// Moves the cursor, clamping into the listing's bounds.
    ///
    /// Synchronous by contract. No-op while a load is in flight or when
    /// the listing is empty.
    pub fn set_cursor(&self, index: isize) {
        let mut inner = self.lock();
        if inner.state.loading || inner.state.entries.is_empty() {
            return;
        }
        let last = inner.state.entries.len() as isize - 1;
        inner.state.cursor = Some(index.clamp(0, last) as usize);
    }

    /// Returns to the most recent back-stack path, if any.
    pub async fn go_back(&self) {
        let target = {
            let mut inner = self.lock();
            if !inner.state.history.can_go_back() {
                return;
            }
            inner.save_cursor();
            let current = inner.state.path.clone();
            inner.state.history.pop_back(current)
        };
        if let Some(target) = target {
            self.load_directory(&target, true).await;
        }
    }

    /// Redoes the most recently undone navigation, if any.
    pub async fn go_forward(&self) {
        let target = {
            let mut inner = self.lock();
            if !inner.state.history.can_go_forward() {
                return;
            }
            inner.save_cursor();
            let current = inner.state.path.clone();
            inner.state.history.pop_forward(current)
        };
        if let Some(target) = target {
            self.load_directory(&target, true).await;
        }
    }

    /// Sequenced load shared by every navigation entry point.
    ///
    /// Returns `true` when this load's result made it into the state.
    async fn load_directory(&self, path: &Path, restore_cursor: bool) -> bool {
        let token = {
            let mut inner = self.lock();
            inner.load_seq += 1;
            inner.state.loading = true;
            inner.state.error = None;
            inner.load_seq
        };
        tracing::debug!("loading {}", path.display());

        let result = self.service.list_directory(path).await;

        let mut inner = self.lock();
        if token != inner.load_seq {
            // A newer navigation owns the pane now, including its loading
            // flag. Leave everything to it.
            tracing::debug!("discarding stale listing of {}", path.display());
            return false;
        }

        match result {
            Ok(mut entries) => {
                sort_entries(&mut entries);
                let mut cursor = if entries.is_empty() { None } else { Some(0) };
                if restore_cursor && !entries.is_empty() {
                    if let Some(saved) = inner.cursor_memory.get(path) {
                        cursor = Some(saved.min(entries.len() - 1));
                    }
                }
                inner.state.path = path.to_path_buf();
                inner.state.entries = entries;
                inner.state.cursor = cursor;
                inner.state.loading = false;
                true
            }
            Err(err) => {
                // The previous path and entries stay on display; only the
                // very first load has nothing to fall back to.
                inner.state.error = Some(err.to_string());
                inner.state.loading = false;
                false
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
