//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.active_view))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Help lines for the given page
fn help_lines(view: ActiveView) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Global Keys"),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("Tab", "Switch panel focus"),
        key_line("j/k", "Move selection down/up"),
        key_line("1", "Services page"),
        key_line("2", "Media page"),
        Line::from(""),
    ];

    match view {
        ActiveView::Services => {
            lines.push(section("Services"));
            lines.push(Line::from(""));
            lines.push(key_line("[ / ]", "Previous/next category"));
            lines.push(key_line("Enter", "Expand category (sidebar)"));
        }
        ActiveView::Media => {
            lines.push(section("Media"));
            lines.push(Line::from(""));
            lines.push(key_line("[ / ]", "Previous/next tab"));
            lines.push(key_line("d/Enter", "Preview PDF or download"));
            lines.push(key_line("Esc", "Close preview"));
        }
    }

    lines
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_is_contextual() {
        let media = help_lines(ActiveView::Media);
        let services = help_lines(ActiveView::Services);
        let text = |lines: &[Line]| {
            lines
                .iter()
                .map(|l| l.to_string())
                .collect::<Vec<_>>()
                .join("\n")
        };

        assert!(text(&media).contains("Preview PDF or download"));
        assert!(!text(&services).contains("Preview PDF or download"));
    }
}
