//! Services page
//!
//! Category tabs, the filtered service list, and a detail pane showing the
//! selected service with its related services.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::display::service::NO_SERVICES;
use crate::models::{CategoryFilter, Service};
use crate::services::ServiceCatalog;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::ServicesLayout;

use super::border_color;

/// Render the services page
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = ServicesLayout::new(area);
    let services = app.visible_services();

    render_tabs(frame, app, layout.tabs);
    render_list(frame, app, &services, layout.list);
    render_detail(frame, app, layout.detail);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let options = CategoryFilter::options();
    let selected = options
        .iter()
        .position(|f| *f == app.services_page.filter)
        .unwrap_or(0);

    let titles: Vec<Line> = options.iter().map(|f| Line::from(f.label())).collect();

    let tabs = Tabs::new(titles)
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

    frame.render_widget(tabs, area);
}

fn render_list(frame: &mut Frame, app: &App, services: &[&Service], area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Main;

    let block = Block::default()
        .title(format!(" {} ", app.services_page.filter.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(is_focused)));

    if services.is_empty() {
        let text = Paragraph::new(NO_SERVICES)
            .block(block)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true });
        frame.render_widget(text, area);
        return;
    }

    let items: Vec<ListItem> = services
        .iter()
        .map(|service| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    service.title.clone(),
                    Style::default().fg(Color::White),
                )),
                Line::from(Span::styled(
                    format!("  {}", service.category.label()),
                    Style::default().fg(Color::DarkGray),
                )),
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
    state.select(Some(app.services_page.selected_index));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_detail(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(service) = app.selected_service() else {
        frame.render_widget(block, area);
        return;
    };

    let related =
        ServiceCatalog::new(app.storage).get_related(service.id.as_str(), app.settings.related_count);

    let heading = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(
            service.title.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            service.category.label(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(service.short_description.clone()),
    ];

    if let Some(description) = &service.description {
        lines.push(Line::from(""));
        lines.push(Line::from(description.clone()));
    }

    if !service.features.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Features", heading)));
        for feature in &service.features {
            lines.push(Line::from(format!("  • {}", feature)));
        }
    }

    if !related.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Related Services", heading)));
        for other in related {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(other.title.clone(), Style::default().fg(Color::White)),
                Span::styled(
                    format!("  {}", other.slug),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
