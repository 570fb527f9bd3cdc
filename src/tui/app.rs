//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! Each page owns its own selection state; leaving a page discards it.

use std::time::{Duration, Instant};

use crate::config::settings::Settings;
use crate::format::DownloadAction;
use crate::models::{
    CategoryFilter, Publication, PublicationId, PublicationTab, Service, ServiceCategory,
};
use crate::services::{PublicationCatalog, ServiceCatalog, TabEntry};
use crate::storage::Storage;

use super::widgets::Notification;

/// Which page is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Services,
    Media,
}

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    Sidebar,
    #[default]
    Main,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    Preview(PublicationId),
}

/// State of the services page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServicesPage {
    /// Active category tab
    pub filter: CategoryFilter,
    /// Selected row in the filtered list
    pub selected_index: usize,
    /// Sidebar category whose services are expanded
    pub expanded: Option<ServiceCategory>,
    /// Highlighted sidebar category
    pub sidebar_index: usize,
}

impl ServicesPage {
    /// Replace the active filter
    pub fn select_filter(&mut self, filter: CategoryFilter) {
        if self.filter != filter {
            self.filter = filter;
            self.selected_index = 0;
        }
    }

    /// Move the filter tab left or right, wrapping around
    pub fn cycle_filter(&mut self, forward: bool) {
        let options = CategoryFilter::options();
        let current = options.iter().position(|f| *f == self.filter).unwrap_or(0);
        let next = cycle_index(current, options.len(), forward);
        self.select_filter(options[next]);
    }

    /// Expand a sidebar category, or collapse it if it is already expanded
    pub fn toggle_expanded(&mut self, category: ServiceCategory) {
        self.expanded = match self.expanded {
            Some(current) if current == category => None,
            _ => Some(category),
        };
    }
}

/// State of the media page
#[derive(Debug, Clone, Default)]
pub struct MediaPage {
    /// Active publication tab
    pub active_tab: PublicationTab,
    /// Selected row in the filtered list
    pub selected_index: usize,
    /// "Download started" acknowledgment
    pub download_notice: Option<Notification>,
}

impl MediaPage {
    /// Replace the active tab
    pub fn select_tab(&mut self, tab: PublicationTab) {
        if self.active_tab != tab {
            self.active_tab = tab;
            self.selected_index = 0;
        }
    }

    /// Move to the neighbouring tab among `tabs`, wrapping around
    pub fn cycle_tab(&mut self, tabs: &[TabEntry], forward: bool) {
        if tabs.is_empty() {
            return;
        }
        let current = tabs
            .iter()
            .position(|t| t.tab == self.active_tab)
            .unwrap_or(0);
        let next = cycle_index(current, tabs.len(), forward);
        self.select_tab(tabs[next].tab.clone());
    }

    /// Show the acknowledgment, replacing any previous one
    pub fn acknowledge_download(&mut self, title: &str, now: Instant, duration: Duration) {
        self.download_notice = Some(
            Notification::new_at(
                format!("Download started: {}", title),
                super::widgets::NotificationType::Success,
                now,
            )
            .with_duration(duration),
        );
    }

    /// Drop the acknowledgment once it has expired
    pub fn expire_notice(&mut self, now: Instant) {
        if self
            .download_notice
            .as_ref()
            .is_some_and(|n| n.is_expired_at(now))
        {
            self.download_notice = None;
        }
    }

    pub fn is_downloading(&self) -> bool {
        self.download_notice.is_some()
    }
}

fn cycle_index(current: usize, len: usize, forward: bool) -> usize {
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

/// Main application state
pub struct App<'a> {
    pub storage: &'a Storage,
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    pub active_view: ActiveView,
    pub focused_panel: FocusedPanel,
    pub active_dialog: ActiveDialog,

    pub services_page: ServicesPage,
    pub media_page: MediaPage,

    /// Status message to display
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self {
            storage,
            settings,
            should_quit: false,
            active_view: ActiveView::default(),
            focused_panel: FocusedPanel::default(),
            active_dialog: ActiveDialog::default(),
            services_page: ServicesPage::default(),
            media_page: MediaPage::default(),
            status_message: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Switch pages; the page being left loses its state
    pub fn switch_view(&mut self, view: ActiveView) {
        if self.active_view == view {
            return;
        }

        match self.active_view {
            ActiveView::Services => self.services_page = ServicesPage::default(),
            ActiveView::Media => self.media_page = MediaPage::default(),
        }

        self.active_view = view;
        self.clear_status();
    }

    /// Toggle focus between sidebar and main panel
    pub fn toggle_panel_focus(&mut self) {
        self.focused_panel = match self.focused_panel {
            FocusedPanel::Sidebar => FocusedPanel::Main,
            FocusedPanel::Main => FocusedPanel::Sidebar,
        };
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Periodic housekeeping
    pub fn tick(&mut self, now: Instant) {
        self.media_page.expire_notice(now);
    }

    /// Services under the active filter
    pub fn visible_services(&self) -> Vec<&'a Service> {
        ServiceCatalog::new(self.storage).get_by_category(self.services_page.filter)
    }

    pub fn selected_service(&self) -> Option<&'a Service> {
        self.visible_services()
            .get(self.services_page.selected_index)
            .copied()
    }

    /// Publications under the active tab
    pub fn visible_publications(&self) -> Vec<&'a Publication> {
        PublicationCatalog::new(self.storage).filter_by_tab(&self.media_page.active_tab)
    }

    pub fn selected_publication(&self) -> Option<&'a Publication> {
        self.visible_publications()
            .get(self.media_page.selected_index)
            .copied()
    }

    /// Publication shown in the preview dialog
    pub fn preview_publication(&self) -> Option<&'a Publication> {
        match &self.active_dialog {
            ActiveDialog::Preview(id) => {
                PublicationCatalog::new(self.storage).get_by_id(id.as_str())
            }
            _ => None,
        }
    }

    /// Download the selected publication: PDFs open the preview, anything
    /// else shows the transient acknowledgment
    pub fn trigger_download(&mut self, now: Instant) {
        let Some(publication) = self.selected_publication() else {
            return;
        };

        match DownloadAction::for_url(publication.download_url.as_deref()) {
            DownloadAction::Preview => {
                self.open_dialog(ActiveDialog::Preview(publication.id.clone()));
            }
            DownloadAction::Direct => {
                let duration = Duration::from_secs(self.settings.download_ack_secs);
                self.media_page
                    .acknowledge_download(&publication.title, now, duration);
            }
            DownloadAction::Unavailable => {
                self.set_status(format!("No file available for '{}'", publication.title));
            }
        }
    }

    /// Move selection up in the focused list
    pub fn move_up(&mut self) {
        let index = match (self.focused_panel, self.active_view) {
            (FocusedPanel::Sidebar, _) => &mut self.services_page.sidebar_index,
            (FocusedPanel::Main, ActiveView::Services) => &mut self.services_page.selected_index,
            (FocusedPanel::Main, ActiveView::Media) => &mut self.media_page.selected_index,
        };
        *index = index.saturating_sub(1);
    }

    /// Move selection down in the focused list
    pub fn move_down(&mut self) {
        let max = match (self.focused_panel, self.active_view) {
            (FocusedPanel::Sidebar, _) => ServiceCategory::all().len(),
            (FocusedPanel::Main, ActiveView::Services) => self.visible_services().len(),
            (FocusedPanel::Main, ActiveView::Media) => self.visible_publications().len(),
        };
        let index = match (self.focused_panel, self.active_view) {
            (FocusedPanel::Sidebar, _) => &mut self.services_page.sidebar_index,
            (FocusedPanel::Main, ActiveView::Services) => &mut self.services_page.selected_index,
            (FocusedPanel::Main, ActiveView::Media) => &mut self.media_page.selected_index,
        };
        if *index < max.saturating_sub(1) {
            *index += 1;
        }
    }

    /// Category highlighted in the sidebar
    pub fn sidebar_category(&self) -> ServiceCategory {
        let all = ServiceCategory::all();
        all[self.services_page.sidebar_index.min(all.len() - 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_all() {
        let storage = Storage::seeded().unwrap();
        let settings = Settings::default();
        let app = App::new(&storage, &settings);

        assert_eq!(app.services_page.filter, CategoryFilter::All);
        assert_eq!(app.media_page.active_tab, PublicationTab::All);
        assert_eq!(app.visible_services().len(), 8);
        assert_eq!(app.visible_publications().len(), 4);
    }

    #[test]
    fn test_filter_selection_replaces_state() {
        let storage = Storage::seeded().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        app.services_page.selected_index = 3;
        app.services_page
            .select_filter(CategoryFilter::Only(ServiceCategory::Tax));
        assert_eq!(app.services_page.selected_index, 0);
        assert_eq!(app.visible_services().len(), 2);

        app.services_page.cycle_filter(true);
        assert_eq!(
            app.services_page.filter,
            CategoryFilter::Only(ServiceCategory::Advisory)
        );
        app.services_page.cycle_filter(true);
        assert_eq!(app.services_page.filter, CategoryFilter::All);
        app.services_page.cycle_filter(false);
        assert_eq!(
            app.services_page.filter,
            CategoryFilter::Only(ServiceCategory::Advisory)
        );
    }

    #[test]
    fn test_toggle_expanded() {
        let mut page = ServicesPage::default();
        page.toggle_expanded(ServiceCategory::Audit);
        assert_eq!(page.expanded, Some(ServiceCategory::Audit));
        page.toggle_expanded(ServiceCategory::Tax);
        assert_eq!(page.expanded, Some(ServiceCategory::Tax));
        page.toggle_expanded(ServiceCategory::Tax);
        assert_eq!(page.expanded, None);
    }

    #[test]
    fn test_switching_view_discards_page_state() {
        let storage = Storage::seeded().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        app.services_page
            .select_filter(CategoryFilter::Only(ServiceCategory::Audit));
        app.switch_view(ActiveView::Media);
        app.media_page.select_tab(PublicationTab::from_id("news"));
        app.switch_view(ActiveView::Services);

        assert_eq!(app.services_page.filter, CategoryFilter::All);
        assert_eq!(app.media_page.active_tab, PublicationTab::All);
    }

    #[test]
    fn test_pdf_download_opens_preview() {
        let storage = Storage::seeded().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.switch_view(ActiveView::Media);

        // resurgence-article links a PDF
        app.trigger_download(Instant::now());
        assert_eq!(
            app.active_dialog,
            ActiveDialog::Preview(PublicationId::new("resurgence-article"))
        );
        assert_eq!(
            app.preview_publication().unwrap().id.as_str(),
            "resurgence-article"
        );
        assert!(!app.media_page.is_downloading());
    }

    #[test]
    fn test_direct_download_acknowledgment_expires() {
        let storage = Storage::seeded().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.switch_view(ActiveView::Media);
        app.media_page.select_tab(PublicationTab::from_id("news"));

        let start = Instant::now();
        app.trigger_download(start);
        assert!(!app.has_dialog());
        assert!(app.media_page.is_downloading());

        app.tick(start + Duration::from_secs(1));
        assert!(app.media_page.is_downloading());

        app.tick(start + Duration::from_secs(2));
        assert!(!app.media_page.is_downloading());
    }

    #[test]
    fn test_leaving_media_cancels_acknowledgment() {
        let storage = Storage::seeded().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);
        app.switch_view(ActiveView::Media);
        app.media_page.select_tab(PublicationTab::from_id("news"));
        app.trigger_download(Instant::now());
        assert!(app.media_page.is_downloading());

        app.switch_view(ActiveView::Services);
        assert!(app.media_page.download_notice.is_none());
    }

    #[test]
    fn test_move_selection_is_bounded() {
        let storage = Storage::seeded().unwrap();
        let settings = Settings::default();
        let mut app = App::new(&storage, &settings);

        app.move_up();
        assert_eq!(app.services_page.selected_index, 0);
        for _ in 0..20 {
            app.move_down();
        }
        assert_eq!(app.services_page.selected_index, 7);

        app.focused_panel = FocusedPanel::Sidebar;
        for _ in 0..20 {
            app.move_down();
        }
        assert_eq!(app.sidebar_category(), ServiceCategory::Advisory);
    }
}
