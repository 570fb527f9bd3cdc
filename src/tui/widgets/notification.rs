//! Toast notification widget
//!
//! Transient acknowledgments ("Download started") that expire on their own.
//! A notification is plain data with a creation time; whoever owns it checks
//! expiry on each tick, and dropping the owner cancels it.

use std::time::{Duration, Instant};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    Success,
}

impl NotificationType {
    pub fn color(&self) -> Color {
        match self {
            Self::Success => Color::Green,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Success => "Success",
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
    /// When the notification was raised
    pub created_at: Instant,
    /// How long it stays visible
    pub duration: Duration,
}

impl Notification {
    /// Create a notification raised at `created_at`
    pub fn new_at(
        message: impl Into<String>,
        notification_type: NotificationType,
        created_at: Instant,
    ) -> Self {
        Self {
            message: message.into(),
            notification_type,
            created_at,
            duration: Duration::from_secs(2),
        }
    }

    /// Set how long the notification stays visible
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Whether the notification should be gone at `now`
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl<'a> Widget for NotificationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notification.notification_type.color();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} ", self.notification.notification_type.title()))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        Paragraph::new(self.notification.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let start = Instant::now();
        let n = Notification::new_at("Download started", NotificationType::Success, start);
        assert_eq!(n.message, "Download started");
        assert_eq!(n.notification_type, NotificationType::Success);
        assert_eq!(n.created_at, start);
        assert_eq!(n.duration, Duration::from_secs(2));
    }

    #[test]
    fn test_expiry_is_relative_to_creation() {
        let start = Instant::now();
        let n = Notification::new_at("x", NotificationType::Success, start)
            .with_duration(Duration::from_secs(2));

        assert!(!n.is_expired_at(start));
        assert!(!n.is_expired_at(start + Duration::from_millis(1999)));
        assert!(n.is_expired_at(start + Duration::from_secs(2)));
    }

    #[test]
    fn test_notification_style() {
        assert_eq!(NotificationType::Success.color(), Color::Green);
        assert_eq!(NotificationType::Success.title(), "Success");
    }
}
