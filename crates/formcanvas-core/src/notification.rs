//! Transient user notifications ("toasts").
//!
//! Bulk selection and clipboard operations report how many elements they
//! touched. The queue only records messages and their lifetime; showing and
//! dismissing them is up to the embedding UI, which calls
//! [`NotificationQueue::prune_expired`] on its own clock.

use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

use crate::constants::NOTIFICATION_DURATION_MS;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Success => write!(f, "SUCCESS"),
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A single auto-dismissing message.
#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>, duration: Duration) -> Self {
        Self {
            level,
            message: message.into(),
            created_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)
    }
}

/// FIFO of pending notifications.
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    duration: Duration,
    enabled: bool,
}

impl NotificationQueue {
    pub fn new(duration: Duration, enabled: bool) -> Self {
        Self {
            items: VecDeque::new(),
            duration,
            enabled,
        }
    }

    pub fn push(&mut self, level: NotificationLevel, message: impl Into<String>) {
        if !self.enabled {
            return;
        }
        let notification = Notification::new(level, message, self.duration);
        tracing::debug!("notification: {}", notification);
        self.items.push_back(notification);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(NotificationLevel::Success, message);
    }

    /// Removes and returns everything queued so far.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.items.drain(..).collect()
    }

    /// Drops notifications whose display time has elapsed.
    pub fn prune_expired(&mut self, now: Instant) {
        self.items.retain(|n| !n.is_expired(now));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(Duration::from_millis(NOTIFICATION_DURATION_MS), true)
    }
}
