//! Top-level application state: two pane stores and keyboard focus.

use std::path::PathBuf;
use std::sync::Arc;

use duofm_core::{Command, Config, DirectoryService, FileEntry, PaneStore};

/// Which pane has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneSide {
    Left,
    Right,
}

impl PaneSide {
    fn other(self) -> Self {
        match self {
            PaneSide::Left => PaneSide::Right,
            PaneSide::Right => PaneSide::Left,
        }
    }
}

/// The application shell around two independent [`PaneStore`]s.
///
/// Navigation commands are spawned onto the runtime so a slow directory
/// never blocks the input loop; the stores' last-navigation-wins
/// sequencing sorts out whatever overlaps result. Cursor and focus
/// commands apply synchronously to a state snapshot.
pub struct App {
    left: Arc<PaneStore>,
    right: Arc<PaneStore>,
    service: Arc<dyn DirectoryService>,
    focus: PaneSide,
    page_size: usize,
    status: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(service: Arc<dyn DirectoryService>, config: &Config) -> Self {
        Self {
            left: Arc::new(PaneStore::new(Arc::clone(&service))),
            right: Arc::new(PaneStore::new(Arc::clone(&service))),
            service,
            focus: PaneSide::Left,
            page_size: config.general.page_size,
            status: None,
            should_quit: false,
        }
    }

    /// Kicks off the initial load of both panes.
    pub fn start(&self, config: &Config) {
        spawn_start(&self.left, config.general.left_dir.clone());
        spawn_start(&self.right, config.general.right_dir.clone());
    }

    pub fn left(&self) -> &PaneStore {
        &self.left
    }

    pub fn right(&self) -> &PaneStore {
        &self.right
    }

    pub fn focus(&self) -> PaneSide {
        self.focus
    }

    /// Transient message shown in the status bar (open-file failures).
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one command to the focused pane or the shell itself.
    pub async fn dispatch(&mut self, command: Command) {
        self.status = None;
        match command {
            Command::Quit => self.should_quit = true,
            Command::FocusOther => self.focus = self.focus.other(),
            Command::CursorUp => self.move_cursor(-1),
            Command::CursorDown => self.move_cursor(1),
            Command::PageUp => self.move_cursor(-(self.page_size as isize)),
            Command::PageDown => self.move_cursor(self.page_size as isize),
            Command::CursorFirst => self.focused().set_cursor(0),
            Command::CursorLast => {
                let len = self.focused().state().entries().len();
                self.focused().set_cursor(len as isize - 1);
            }
            Command::Navigate(path) => self.spawn_navigate(path),
            Command::GoParent => {
                let state = self.focused().state();
                if let Some(parent) = state.path().parent() {
                    self.spawn_navigate(parent.to_path_buf());
                }
            }
            Command::GoBack => {
                let store = Arc::clone(self.focused());
                tokio::spawn(async move { store.go_back().await });
            }
            Command::GoForward => {
                let store = Arc::clone(self.focused());
                tokio::spawn(async move { store.go_forward().await });
            }
            Command::Refresh => {
                let store = Arc::clone(self.focused());
                tokio::spawn(async move { store.refresh().await });
            }
            Command::Activate => self.activate().await,
        }
    }

    fn focused(&self) -> &Arc<PaneStore> {
        match self.focus {
            PaneSide::Left => &self.left,
            PaneSide::Right => &self.right,
        }
    }

    fn move_cursor(&self, delta: isize) {
        let store = self.focused();
        if let Some(cursor) = store.state().cursor() {
            store.set_cursor(cursor as isize + delta);
        }
    }

    fn spawn_navigate(&self, path: PathBuf) {
        let store = Arc::clone(self.focused());
        tokio::spawn(async move { store.navigate_to(&path).await });
    }

    /// Enter on a directory navigates into it; on a file or symlink it is
    /// handed to the system opener, with failures surfacing in the status
    /// bar.
    async fn activate(&mut self) {
        let state = self.focused().state();
        let Some(entry) = state.selected_entry() else {
            return;
        };
        if entry.is_dir() {
            self.spawn_navigate(entry.path().to_path_buf());
        } else if matches!(entry, FileEntry::File { .. } | FileEntry::Symlink { .. }) {
            if let Err(err) = self.service.open_file(entry.path()).await {
                tracing::debug!("open failed: {err}");
                self.status = Some(err.to_string());
            }
        }
    }
}

fn spawn_start(store: &Arc<PaneStore>, start_dir: Option<PathBuf>) {
    let store = Arc::clone(store);
    tokio::spawn(async move {
        match start_dir {
            Some(dir) => store.navigate_to(&dir).await,
            None => store.initialize().await,
        }
    });
}
