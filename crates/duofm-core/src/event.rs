//! Command types for UI → core communication.
//!
//! The UI translates user input into [`Command`]s and applies them to a
//! pane store. The core never creates commands itself; any frontend that
//! can produce them can drive the same navigation logic.

use std::path::PathBuf;

/// An action the UI requests a pane (or the app shell) to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Navigate the focused pane to the given directory.
    Navigate(PathBuf),
    /// Navigate the focused pane to its parent directory.
    GoParent,
    /// Navigate backward in the focused pane's history.
    GoBack,
    /// Navigate forward in the focused pane's history.
    GoForward,
    /// Re-read the focused pane's current directory.
    Refresh,
    /// Move the cursor up by one entry.
    CursorUp,
    /// Move the cursor down by one entry.
    CursorDown,
    /// Jump the cursor to the first entry.
    CursorFirst,
    /// Jump the cursor to the last entry.
    CursorLast,
    /// Move the cursor up by one page.
    PageUp,
    /// Move the cursor down by one page.
    PageDown,
    /// Activate the highlighted entry: enter a directory, open a file.
    Activate,
    /// Move focus to the other pane.
    FocusOther,
    /// Quit the application.
    Quit,
}
