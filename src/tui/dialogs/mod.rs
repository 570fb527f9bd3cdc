//! Dialog modules for the TUI
//!
//! Modal overlays: keyboard help and the PDF preview.

pub mod help;
pub mod preview;
