//! Layout definitions for the TUI
//!
//! Sidebar, main panel and status bar, plus the per-page splits.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Sidebar area (categories, view switcher)
    pub sidebar: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(30), // Sidebar (fixed width)
                Constraint::Min(40),    // Main content
            ])
            .split(vertical[0]);

        Self {
            sidebar: horizontal[0],
            main: horizontal[1],
            status_bar: vertical[1],
        }
    }
}

/// Layout for the sidebar
pub struct SidebarLayout {
    pub header: Rect,
    pub categories: Rect,
    pub view_switcher: Rect,
}

impl SidebarLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(6),    // Categories
                Constraint::Length(4), // View switcher
            ])
            .split(area);

        Self {
            header: chunks[0],
            categories: chunks[1],
            view_switcher: chunks[2],
        }
    }
}

/// Layout for the services page: tabs over a list/detail split
pub struct ServicesLayout {
    pub tabs: Rect,
    pub list: Rect,
    pub detail: Rect,
}

impl ServicesLayout {
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(3)])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[1]);

        Self {
            tabs: rows[0],
            list: columns[0],
            detail: columns[1],
        }
    }
}

/// Layout for the media page: featured strip, tabs, list
pub struct MediaLayout {
    pub featured: Rect,
    pub tabs: Rect,
    pub list: Rect,
}

impl MediaLayout {
    pub fn new(area: Rect, featured_rows: u16) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(featured_rows + 2), // Featured (+ borders)
                Constraint::Length(3),                 // Tabs
                Constraint::Min(3),                    // List
            ])
            .split(area);

        Self {
            featured: chunks[0],
            tabs: chunks[1],
            list: chunks[2],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Rect anchored to the bottom-right corner, used for toasts
pub fn bottom_right_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect::new(
        r.x + r.width - width,
        r.y + r.height - height,
        width,
        height,
    )
}
