//! Schedule notification selection.
//!
//! Scans every project's tracked date fields, keeps the ones that crossed a
//! notification threshold, deduplicates, and ranks them. The tracked fields
//! are a static table: notification labeling needs a fixed, labeled
//! enumeration, unlike scoring, which classifies whatever fields a record
//! happens to carry.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::dday::{parse_target_date, score_for_offset, status_for_offset, ScheduleStatus};
use crate::models::{NotificationKind, Project, ScheduleEvent, Stage, Urgency};

use super::ranking::rank_by_key;

/// A labeled date-bearing field the selector watches.
///
/// The executed sibling name is precomputed so the scan loop does not
/// allocate per field per project per pass.
#[derive(Debug, Clone, Copy)]
pub struct TrackedDateField {
    /// Stage the field lives in.
    pub stage: Stage,
    /// Field name in the stage record.
    pub field: &'static str,
    /// Executed-flag sibling name.
    pub executed_field: &'static str,
    /// Display label.
    pub label: &'static str,
}

const fn tracked(
    stage: Stage,
    field: &'static str,
    executed_field: &'static str,
    label: &'static str,
) -> TrackedDateField {
    TrackedDateField {
        stage,
        field,
        executed_field,
        label,
    }
}

/// The fixed enumeration of notification-worthy date fields, in the order
/// events are emitted per project (stage order, then form order).
pub const TRACKED_DATE_FIELDS: &[TrackedDateField] = &[
    tracked(Stage::Stage1, "kickoffDate", "kickoffDateExecuted", "Kickoff"),
    tracked(
        Stage::Stage1,
        "designReviewDate",
        "designReviewDateExecuted",
        "Design Review",
    ),
    tracked(
        Stage::Stage1,
        "sampleOrderDate",
        "sampleOrderDateExecuted",
        "Sample Order",
    ),
    tracked(Stage::Stage2, "toolingDate", "toolingDateExecuted", "Tooling"),
    tracked(Stage::Stage2, "pilotRunDate", "pilotRunDateExecuted", "Pilot Run"),
    tracked(
        Stage::Stage2,
        "qualityTestDate",
        "qualityTestDateExecuted",
        "Quality Test",
    ),
    tracked(Stage::Stage3, "trainingDate", "trainingDateExecuted", "Training"),
    tracked(Stage::Stage3, "launchDate", "launchDateExecuted", "Launch"),
    tracked(
        Stage::Stage3,
        "massProductionDate",
        "massProductionDateExecuted",
        "Mass Production",
    ),
];

/// Threshold configuration for the selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleThresholds {
    /// Upper bound (days inclusive) of the urgent band.
    pub urgent_days: i64,
    /// Upper bound (days inclusive) of the reminder band. Checked after
    /// the urgent band, so reminders only materialize when this exceeds
    /// `urgent_days`.
    pub reminder_days: i64,
    /// Whether same-day targets are included.
    pub include_today: bool,
    /// Whether past-due targets are included.
    pub include_overdue: bool,
}

impl Default for ScheduleThresholds {
    fn default() -> Self {
        Self {
            urgent_days: 7,
            reminder_days: 3,
            include_today: true,
            include_overdue: true,
        }
    }
}

impl ScheduleThresholds {
    /// Sets the urgent band (days inclusive).
    pub fn with_urgent_days(mut self, days: i64) -> Self {
        self.urgent_days = days;
        self
    }

    /// Sets the reminder band (days inclusive).
    pub fn with_reminder_days(mut self, days: i64) -> Self {
        self.reminder_days = days;
        self
    }

    /// Sets whether same-day targets are included.
    pub fn with_include_today(mut self, include: bool) -> Self {
        self.include_today = include;
        self
    }

    /// Sets whether past-due targets are included.
    pub fn with_include_overdue(mut self, include: bool) -> Self {
        self.include_overdue = include;
        self
    }
}

/// Scans all projects and returns the threshold-crossing schedule events,
/// deduplicated and ranked.
///
/// Ordering: urgency bucket first (high, medium, low), then priority score
/// ascending; the sort is stable, so equal-key events keep project
/// iteration order and per-project field order across re-renders. The
/// output is not capped; display capping is the caller's concern.
pub fn select_schedule_events(
    projects: &[Project],
    thresholds: &ScheduleThresholds,
    clock: &dyn Clock,
) -> Vec<ScheduleEvent> {
    let mut events = Vec::new();
    // Same physical event reported once per pass: (project, field, day).
    let mut seen: HashSet<(String, &'static str, NaiveDate)> = HashSet::new();
    // One "today" for the whole pass, even across a midnight boundary.
    let today = clock.today();

    for project in projects {
        for tracked in TRACKED_DATE_FIELDS {
            let Some(record) = project.stage(tracked.stage) else {
                continue;
            };
            let Some(target) = record.get(tracked.field).and_then(|v| v.as_text()) else {
                continue;
            };
            if record
                .get(tracked.executed_field)
                .is_some_and(|v| v.is_true())
            {
                continue;
            }

            // Parse once; offset, status, and score all derive from it.
            let Some(calendar_day) = parse_target_date(target) else {
                continue;
            };
            let offset = (calendar_day - today).num_days();
            let status = status_for_offset(Some(offset), false);

            let kind = if status == ScheduleStatus::Overdue {
                if !thresholds.include_overdue {
                    continue;
                }
                NotificationKind::Overdue
            } else if status == ScheduleStatus::Today {
                if !thresholds.include_today {
                    continue;
                }
                NotificationKind::Today
            } else if offset > 0 && offset <= thresholds.urgent_days {
                NotificationKind::Urgent
            } else if offset > 0 && offset <= thresholds.reminder_days {
                NotificationKind::Reminder
            } else {
                continue;
            };

            if !seen.insert((project.id.clone(), tracked.field, calendar_day)) {
                continue;
            }

            let urgency = match kind {
                NotificationKind::Overdue | NotificationKind::Today => Urgency::High,
                NotificationKind::Urgent => Urgency::Medium,
                NotificationKind::Reminder => Urgency::Low,
            };

            events.push(ScheduleEvent {
                project_id: project.id.clone(),
                project_name: project.name.clone(),
                stage: tracked.stage,
                field: tracked.field.to_string(),
                label: tracked.label.to_string(),
                target_date: target.to_string(),
                executed: false,
                day_offset: offset,
                status,
                kind,
                urgency,
                priority_score: score_for_offset(Some(offset), false),
            });
        }
    }

    rank_by_key(events, |ev| (ev.urgency, ev.priority_score), None)
}
