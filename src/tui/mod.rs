//! Terminal User Interface module
//!
//! An interactive browser for the catalog built on ratatui: a services page
//! with category tabs and related services, and a media page with featured
//! publications, category tabs and document preview.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
