//! Derived notification types.
//!
//! Everything here is produced transiently during one evaluation pass and
//! never persisted; the caller renders or discards it.

use serde::{Deserialize, Serialize};

use super::Stage;
use crate::dday::ScheduleStatus;

/// A date-bearing field that crossed a notification threshold.
///
/// Lifetime is one computation pass; the dedup key within a pass is
/// `(project_id, field, calendar day)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEvent {
    /// Owning project.
    pub project_id: String,
    /// Owning project's display name.
    pub project_name: String,
    /// Stage the field belongs to.
    pub stage: Stage,
    /// Field name as stored in the stage record (e.g. `launchDate`).
    pub field: String,
    /// Display label for the field (e.g. "Launch").
    pub label: String,
    /// Raw target-date text from the record.
    pub target_date: String,
    /// Whether the paired executed flag was set (always false for
    /// emitted events; executed fields are skipped).
    pub executed: bool,
    /// Signed calendar days from today to the target.
    pub day_offset: i64,
    /// Badge status class for the target date.
    pub status: ScheduleStatus,
    /// Which threshold admitted this event.
    pub kind: NotificationKind,
    /// Coarse display bucket; primary sort key.
    pub urgency: Urgency,
    /// Fine-grained score; secondary sort key (lower = more urgent).
    pub priority_score: f64,
}

/// Which notification threshold an event matched.
///
/// Checked in declaration order: an overdue event never classifies as
/// urgent, and urgent wins over reminder when both bands contain the offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Overdue,
    Today,
    Urgent,
    Reminder,
}

/// Coarse urgency bucket for schedule notifications.
///
/// Declaration order is sort order: `High < Medium < Low`, so an ascending
/// sort puts the most urgent bucket first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

/// Ephemeral ranking unit used during notification selection.
///
/// Generic over the payload so schedule and feedback pipelines share it.
/// The caller may persist a dismissed-set of `source_id`s across sessions;
/// the engine only ever treats that set as an exclusion filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationCandidate<T> {
    /// Identity of the underlying record (dismissed-set key).
    pub source_id: String,
    /// Ranking score; higher = shown earlier for feedback candidates.
    pub score: f64,
    /// Coarse display bucket.
    pub urgency: Urgency,
    /// The underlying record.
    pub payload: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_sort_order() {
        assert!(Urgency::High < Urgency::Medium);
        assert!(Urgency::Medium < Urgency::Low);

        let mut buckets = vec![Urgency::Low, Urgency::High, Urgency::Medium];
        buckets.sort();
        assert_eq!(buckets, vec![Urgency::High, Urgency::Medium, Urgency::Low]);
    }
}
