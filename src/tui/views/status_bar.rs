//! Status bar view
//!
//! Shows the active page, result count, status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::services::tab_label;
use crate::tui::app::{ActiveView, App};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let (page, selection, count) = match app.active_view {
        ActiveView::Services => (
            "Services",
            app.services_page.filter.label().to_string(),
            app.visible_services().len(),
        ),
        ActiveView::Media => (
            "Media",
            tab_label(&app.media_page.active_tab).to_string(),
            app.visible_publications().len(),
        ),
    };

    let mut spans = vec![
        Span::styled(format!(" {} ", page), Style::default().fg(Color::Cyan)),
        Span::raw("│ "),
        Span::styled(selection, Style::default().fg(Color::White)),
        Span::styled(format!(" ({})", count), Style::default().fg(Color::DarkGray)),
    ];

    if let Some(message) = &app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = match app.active_view {
        ActiveView::Services => " [/]:category  Tab:focus  ?:help  q:quit",
        ActiveView::Media => " [/]:tab  d:download  ?:help  q:quit",
    };
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
