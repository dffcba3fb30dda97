//! Frame rendering: two panes side by side plus a one-line status bar.

use duofm_core::{FileEntry, PaneState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::{App, PaneSide};

/// Composes the full UI each frame from pane state snapshots.
pub fn render(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(f.area());
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    let left = app.left().state();
    let right = app.right().state();

    render_pane(f, panes[0], &left, app.focus() == PaneSide::Left);
    render_pane(f, panes[1], &right, app.focus() == PaneSide::Right);
    render_status_bar(f, rows[1], app, &left, &right);
}

/// Renders one pane: its listing, or (mutually exclusive with it) a loading
/// placeholder or the error message of the most recent failed load.
fn render_pane(f: &mut Frame, area: Rect, state: &PaneState, is_active: bool) {
    let title = if state.path().as_os_str().is_empty() {
        "(not loaded)".to_string()
    } else {
        state.path().display().to_string()
    };
    let border_color = if is_active { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));

    if state.loading() {
        let placeholder = Paragraph::new("Loading…")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    if let Some(error) = state.error() {
        let message = Paragraph::new(error.to_string())
            .style(Style::default().fg(Color::Red))
            .block(block);
        f.render_widget(message, area);
        return;
    }

    let items: Vec<ListItem> = state
        .entries()
        .iter()
        .map(|entry| ListItem::new(Line::from(entry_span(entry))))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(state.cursor());
    f.render_stateful_widget(list, area, &mut list_state);
}

fn entry_span(entry: &FileEntry) -> Span<'_> {
    match entry {
        FileEntry::Directory { name, .. } => Span::styled(
            format!("{name}/"),
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        FileEntry::Symlink {
            name,
            target_is_dir,
            ..
        } => {
            let style = if *target_is_dir {
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            Span::styled(format!("{name}@"), style)
        }
        FileEntry::Unreadable { name, .. } => {
            Span::styled(name.clone(), Style::default().fg(Color::DarkGray))
        }
        FileEntry::File { name, .. } => Span::raw(name.clone()),
    }
}

fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    app: &App,
    left: &PaneState,
    right: &PaneState,
) {
    let focused = match app.focus() {
        PaneSide::Left => left,
        PaneSide::Right => right,
    };
    let text = match app.status() {
        Some(message) => message.to_string(),
        None => format!("{} items", focused.entries().len()),
    };
    let bar = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::DarkGray),
    )));
    f.render_widget(bar, area);
}
