//! Sidebar view
//!
//! Shows service categories (one expandable at a time) and the view switcher

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::models::ServiceCategory;
use crate::services::ServiceCatalog;
use crate::tui::app::{ActiveView, App, FocusedPanel};
use crate::tui::layout::SidebarLayout;

use super::border_color;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = SidebarLayout::new(area);

    render_header(frame, layout.header);
    render_categories(frame, app, layout.categories);
    render_view_switcher(frame, app, layout.view_switcher);
}

/// Render sidebar header
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Practice Catalog ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let version = Paragraph::new(concat!("v", env!("CARGO_PKG_VERSION")))
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(version, area);
}

/// Render the category menu with the expanded category's services
fn render_categories(frame: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::Sidebar;

    let block = Block::default()
        .title(" Services ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(is_focused)));

    let catalog = ServiceCatalog::new(app.storage);
    let highlighted = app.sidebar_category();
    let mut items: Vec<ListItem> = Vec::new();

    for (category, services) in catalog.grouped() {
        let expanded = app.services_page.expanded == Some(category);
        items.push(category_item(
            category,
            services.len(),
            expanded,
            is_focused && category == highlighted,
        ));

        if expanded {
            for service in services {
                items.push(ListItem::new(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(
                        truncate_string(&service.title, 22),
                        Style::default().fg(Color::White),
                    ),
                ])));
            }
        }
    }

    frame.render_widget(List::new(items).block(block), area);
}

fn category_item(
    category: ServiceCategory,
    count: usize,
    expanded: bool,
    highlighted: bool,
) -> ListItem<'static> {
    let marker = if expanded { "▼" } else { "▶" };
    let mut style = Style::default().fg(Color::White);
    if highlighted {
        style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
    }

    ListItem::new(Line::from(vec![
        Span::styled(format!("{} ", marker), Style::default().fg(Color::Yellow)),
        Span::styled(category.label(), style),
        Span::styled(format!(" ({})", count), Style::default().fg(Color::DarkGray)),
    ]))
}

/// Render view switcher
fn render_view_switcher(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Views ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let views = [
        ("1", "Services", ActiveView::Services),
        ("2", "Media", ActiveView::Media),
    ];

    let items: Vec<ListItem> = views
        .iter()
        .map(|(key, name, view)| {
            let active = app.active_view == *view;
            let style = if active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let indicator = if active { "▶" } else { " " };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", indicator), style),
                Span::styled(format!("[{}] ", key), Style::default().fg(Color::Yellow)),
                Span::styled(*name, style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Truncate a string to a maximum number of characters
pub(crate) fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}
