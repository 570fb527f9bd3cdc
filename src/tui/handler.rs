//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the
//! current application state.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::services::PublicationCatalog;

use super::app::{ActiveDialog, ActiveView, App, FocusedPanel};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
        Event::Key(_) => Ok(()),
        Event::Tick => {
            app.tick(Instant::now());
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    // Global keys (work everywhere)
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }
        KeyCode::Tab => {
            app.toggle_panel_focus();
            return Ok(());
        }
        KeyCode::Char('1') => {
            app.switch_view(ActiveView::Services);
            return Ok(());
        }
        KeyCode::Char('2') => {
            app.switch_view(ActiveView::Media);
            return Ok(());
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down();
            return Ok(());
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
            return Ok(());
        }
        _ => {}
    }

    match (app.focused_panel, app.active_view) {
        (FocusedPanel::Sidebar, _) => handle_sidebar_key(app, key),
        (FocusedPanel::Main, ActiveView::Services) => handle_services_key(app, key),
        (FocusedPanel::Main, ActiveView::Media) => handle_media_key(app, key),
    }

    Ok(())
}

/// Keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match &app.active_dialog {
        ActiveDialog::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                app.close_dialog();
            }
        }
        ActiveDialog::Preview(_) => {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                app.close_dialog();
            }
        }
        ActiveDialog::None => {}
    }
    Ok(())
}

fn handle_sidebar_key(app: &mut App, key: KeyEvent) {
    if let KeyCode::Enter | KeyCode::Char(' ') = key.code {
        let category = app.sidebar_category();
        app.services_page.toggle_expanded(category);
    }
}

fn handle_services_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(']') | KeyCode::Char('l') | KeyCode::Right => {
            app.services_page.cycle_filter(true);
        }
        KeyCode::Char('[') | KeyCode::Char('h') | KeyCode::Left => {
            app.services_page.cycle_filter(false);
        }
        _ => {}
    }
}

fn handle_media_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(']') | KeyCode::Char('l') | KeyCode::Right => {
            let tabs = PublicationCatalog::new(app.storage).tabs();
            app.media_page.cycle_tab(&tabs, true);
        }
        KeyCode::Char('[') | KeyCode::Char('h') | KeyCode::Left => {
            let tabs = PublicationCatalog::new(app.storage).tabs();
            app.media_page.cycle_tab(&tabs, false);
        }
        KeyCode::Char('d') | KeyCode::Enter => {
            app.trigger_download(Instant::now());
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use crate::models::{CategoryFilter, PublicationTab, ServiceCategory};
    use crate::storage::Storage;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    #[test]
    fn test_quit_and_help() {
        let storage = Storage::seeded().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.has_dialog());
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_service_tabs_cycle() {
        let storage = Storage::seeded().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        press(&mut app, KeyCode::Char(']'));
        assert_eq!(
            app.services_page.filter,
            CategoryFilter::Only(ServiceCategory::Audit)
        );
        press(&mut app, KeyCode::Char('['));
        press(&mut app, KeyCode::Char('['));
        assert_eq!(
            app.services_page.filter,
            CategoryFilter::Only(ServiceCategory::Advisory)
        );
    }

    #[test]
    fn test_sidebar_expand() {
        let storage = Storage::seeded().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.services_page.expanded, Some(ServiceCategory::Business));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.services_page.expanded, None);
    }

    #[test]
    fn test_media_tabs_and_preview() {
        let storage = Storage::seeded().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.active_view, ActiveView::Media);

        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.media_page.active_tab, PublicationTab::from_id("interview"));

        press(&mut app, KeyCode::Char('d'));
        assert!(matches!(app.active_dialog, ActiveDialog::Preview(_)));
        press(&mut app, KeyCode::Esc);
        assert!(!app.has_dialog());
    }
}
