//! Document preview dialog
//!
//! Shown when the user opens a PDF publication. Displays the document
//! metadata and the URL it would load; Esc closes it.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::format::format_with;
use crate::services::publication_category_label;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Render the preview dialog
pub fn render(frame: &mut Frame, app: &App) {
    let Some(publication) = app.preview_publication() else {
        return;
    };

    let area = centered_rect(70, 60, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", publication.title))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let label = Style::default().fg(Color::Yellow);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Date:     ", label),
            Span::raw(format_with(app.settings.date_style, &publication.date)),
        ]),
        Line::from(vec![
            Span::styled("Category: ", label),
            Span::raw(publication_category_label(&publication.category).to_string()),
        ]),
    ];

    if !publication.source.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Source:   ", label),
            Span::raw(publication.source.clone()),
        ]));
    }
    if !publication.file_size.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Size:     ", label),
            Span::raw(publication.file_size.clone()),
        ]));
    }
    if let Some(url) = &publication.download_url {
        lines.push(Line::from(vec![
            Span::styled("File:     ", label),
            Span::styled(url.clone(), Style::default().fg(Color::Blue)),
        ]));
    }

    if !publication.description.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(publication.description.clone()));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Esc to close",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
