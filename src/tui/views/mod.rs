//! TUI Views module
//!
//! The services and media pages, plus the sidebar and status bar.

pub mod media;
pub mod services;
pub mod sidebar;
pub mod status_bar;

use ratatui::Frame;

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    sidebar::render(frame, app, layout.sidebar);

    match app.active_view {
        ActiveView::Services => services::render(frame, app, layout.main),
        ActiveView::Media => media::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::Preview(_) => dialogs::preview::render(frame, app),
        ActiveDialog::None => {}
    }
}

/// Border color for a panel depending on focus
pub(crate) fn border_color(focused: bool) -> ratatui::style::Color {
    if focused {
        ratatui::style::Color::Cyan
    } else {
        ratatui::style::Color::DarkGray
    }
}
