//! Reusable TUI widgets

pub mod notification;

pub use notification::{Notification, NotificationType, NotificationWidget};
