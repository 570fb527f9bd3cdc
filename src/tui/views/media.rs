//! Media page
//!
//! Featured strip, category tabs, the filtered publication list and the
//! transient download acknowledgment.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::display::publication::NO_PUBLICATIONS;
use crate::format::{format_with, DownloadAction};
use crate::models::Publication;
use crate::services::{publication_category_label, PublicationCatalog};
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::{bottom_right_rect, MediaLayout};
use crate::tui::widgets::NotificationWidget;

use super::border_color;

/// Render the media page
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let catalog = PublicationCatalog::new(app.storage);
    let featured = catalog.featured(app.settings.featured_count);
    let layout = MediaLayout::new(area, featured.len().max(1) as u16);

    render_featured(frame, app, &featured, layout.featured);
    render_tabs(frame, app, &catalog, layout.tabs);
    render_list(frame, app, &app.visible_publications(), layout.list);

    if let Some(notice) = &app.media_page.download_notice {
        let toast = bottom_right_rect(44, 4, area);
        frame.render_widget(NotificationWidget::new(notice), toast);
    }
}

fn render_featured(frame: &mut Frame, app: &App, featured: &[&Publication], area: Rect) {
    let block = Block::default()
        .title(" Featured ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if featured.is_empty() {
        let text = Paragraph::new("No publications yet.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let lines: Vec<Line> = featured
        .iter()
        .map(|publication| {
            Line::from(vec![
                Span::styled(
                    format!("{:<22}", format_with(app.settings.date_style, &publication.date)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    publication.title.clone(),
                    Style::default().fg(Color::White),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_tabs(frame: &mut Frame, app: &App, catalog: &PublicationCatalog, area: Rect) {
    let tabs = catalog.tabs();
    let selected = tabs
        .iter()
        .position(|t| t.tab == app.media_page.active_tab)
        .unwrap_or(0);

    let titles: Vec<Line> = tabs.iter().map(|t| Line::from(t.label.clone())).collect();

    let widget = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );

    frame.render_widget(widget, area);
}

fn render_list(frame: &mut Frame, app: &App, publications: &[&Publication], area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Main;

    let block = Block::default()
        .title(" Publications ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(is_focused)));

    if publications.is_empty() {
        let text = Paragraph::new(NO_PUBLICATIONS)
            .block(block)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true });
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = publications
        .iter()
        .map(|publication| {
            let action = DownloadAction::for_url(publication.download_url.as_deref());
            let mut meta = vec![
                Span::styled(
                    format!("  {}", format_with(app.settings.date_style, &publication.date)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("  {}", publication_category_label(&publication.category)),
                    Style::default().fg(Color::Magenta),
                ),
            ];
            if !publication.file_size.is_empty() {
                meta.push(Span::styled(
                    format!("  {}", publication.file_size),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            meta.push(Span::styled(
                format!("  [{}]", action.label()),
                Style::default().fg(Color::Yellow),
            ));

            ListItem::new(vec![
                Line::from(Span::styled(
                    publication.title.clone(),
                    Style::default().fg(Color::White),
                )),
                Line::from(meta),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.media_page.selected_index));

    frame.render_stateful_widget(list, area, &mut state);
}
