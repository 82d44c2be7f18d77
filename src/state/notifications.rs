//! Notification list shown behind the status bar bell.
//!
//! The list is fixture data; a live feed would replace the source, not the shape.

use crate::theme::ThemeTokens;
use egui::Color32;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Info,
}

impl Severity {
    /// Icon glyph for this severity.
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Success => "✔",
            Severity::Warning => "⚠",
            Severity::Info => "ℹ",
        }
    }

    /// Colour token for this severity.
    pub fn color(self, tokens: &ThemeTokens) -> Color32 {
        match self {
            Severity::Success => tokens.success,
            Severity::Warning => tokens.warning,
            Severity::Info => tokens.info,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationItem {
    /// Unique within a feed
    pub id: u32,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    /// Human readable age, e.g. "2 minutes ago"
    pub relative_time: String,
}

impl NotificationItem {
    pub fn new(
        id: u32,
        severity: Severity,
        title: &str,
        message: &str,
        relative_time: &str,
    ) -> Self {
        Self {
            id,
            severity,
            title: title.to_string(),
            message: message.to_string(),
            relative_time: relative_time.to_string(),
        }
    }
}

/// Notification list ordered newest first, with unique ids.
///
/// The badge count is always its length.
#[derive(Debug, Clone, Default)]
pub struct NotificationFeed {
    items: Vec<NotificationItem>,
}

impl NotificationFeed {
    /// Builds a feed from items given newest first. Later items reusing an
    /// earlier id are dropped.
    pub fn new(items: Vec<NotificationItem>) -> Self {
        let mut feed = Self::default();
        for item in items {
            if !feed.contains(item.id) {
                feed.items.push(item);
            }
        }
        feed
    }

    /// The three sample notifications shipped with the shell, newest first.
    pub fn fixture() -> Self {
        Self::new(vec![
            NotificationItem::new(
                1,
                Severity::Success,
                "Document Processed",
                "research_paper.pdf has been successfully indexed",
                "2 minutes ago",
            ),
            NotificationItem::new(
                2,
                Severity::Info,
                "System Update",
                "New quantum retrieval algorithms deployed",
                "1 hour ago",
            ),
            NotificationItem::new(
                3,
                Severity::Warning,
                "Storage Warning",
                "Document storage is 85% full",
                "3 hours ago",
            ),
        ])
    }

    pub fn items(&self) -> &[NotificationItem] {
        &self.items
    }

    pub fn badge_count(&self) -> usize {
        self.items.len()
    }

    pub fn contains(&self, id: u32) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Adds the newest item at the front. An item whose id is already in the
    /// feed is rejected and the list is left unchanged.
    pub fn push(&mut self, item: NotificationItem) -> bool {
        if self.contains(item.id) {
            tracing::warn!(id = item.id, "duplicate notification id ignored");
            return false;
        }
        self.items.insert(0, item);
        true
    }
}
