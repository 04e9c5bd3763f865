//! Basic counters for a running session.
//!
//! Tracks how many commands were handled, how many were rejected, and how
//! many records were created. A summary is logged when the session ends.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Session metrics collector.
///
/// Cloning is cheap and clones share the same counters.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    /// Total number of non-blank input lines dispatched
    commands_total: Arc<AtomicU64>,

    /// Lines that did not match any command
    invalid_commands_total: Arc<AtomicU64>,

    /// Commands that matched but failed validation or lookup
    failed_commands_total: Arc<AtomicU64>,

    /// Contacts created (overwrites are not counted)
    contacts_added_total: Arc<AtomicU64>,

    /// Birthdays registered (replacements are not counted)
    birthdays_added_total: Arc<AtomicU64>,
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a dispatched command.
    pub fn record_command(&self) {
        self.commands_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an unrecognised command.
    pub fn record_invalid_command(&self) {
        self.invalid_commands_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a command that returned an error.
    pub fn record_failed_command(&self) {
        self.failed_commands_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a newly created contact.
    pub fn record_contact_added(&self) {
        self.contacts_added_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a newly registered birthday.
    pub fn record_birthday_added(&self) {
        self.birthdays_added_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn commands_total(&self) -> u64 {
        self.commands_total.load(Ordering::Relaxed)
    }

    pub fn invalid_commands_total(&self) -> u64 {
        self.invalid_commands_total.load(Ordering::Relaxed)
    }

    pub fn failed_commands_total(&self) -> u64 {
        self.failed_commands_total.load(Ordering::Relaxed)
    }

    pub fn contacts_added_total(&self) -> u64 {
        self.contacts_added_total.load(Ordering::Relaxed)
    }

    pub fn birthdays_added_total(&self) -> u64 {
        self.birthdays_added_total.load(Ordering::Relaxed)
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            commands_total: self.commands_total(),
            invalid_commands_total: self.invalid_commands_total(),
            failed_commands_total: self.failed_commands_total(),
            contacts_added_total: self.contacts_added_total(),
            birthdays_added_total: self.birthdays_added_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricsSummary {
    pub commands_total: u64,
    pub invalid_commands_total: u64,
    pub failed_commands_total: u64,
    pub contacts_added_total: u64,
    pub birthdays_added_total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new();
        assert_eq!(metrics.commands_total(), 0);
        assert_eq!(metrics.failed_commands_total(), 0);
    }

    #[test]
    fn test_clones_share_counters() {
        let metrics = Metrics::new();
        let handle = metrics.clone();
        handle.record_command();
        handle.record_contact_added();

        assert_eq!(metrics.commands_total(), 1);
        assert_eq!(metrics.contacts_added_total(), 1);
    }

    #[test]
    fn test_summary_serializes() {
        let metrics = Metrics::new();
        metrics.record_command();
        metrics.record_command();
        metrics.record_failed_command();

        let json = serde_json::to_value(metrics.summary()).unwrap();
        assert_eq!(json["commands_total"], 2);
        assert_eq!(json["failed_commands_total"], 1);
        assert_eq!(json["birthdays_added_total"], 0);
    }
}
