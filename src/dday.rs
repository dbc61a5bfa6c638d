//! Day-offset ("D-Day") calculations.
//!
//! Converts free-text target dates into signed day counts, status classes,
//! priority scores, and badge labels. Exposed independently of the
//! notification selector because status badges use these directly.
//!
//! # Score Convention
//! [`priority_score`] returns lower values for more urgent items, with two
//! sentinels: `1000.0` for executed items (sorts last) and `999.0` for
//! items with no usable date. Overdue items score `|offset|`, so the longer
//! an item has been neglected the earlier it surfaces. Deliberate, so that
//! very-overdue items compete with near-term ones.

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::clock::Clock;

/// Upper bound of the `Urgent` band (days inclusive).
pub const URGENT_WINDOW_DAYS: i64 = 7;
/// Upper bound of the `Upcoming` band (days inclusive).
pub const UPCOMING_WINDOW_DAYS: i64 = 30;

/// Sentinel score for executed items.
pub const EXECUTED_SCORE: f64 = 1000.0;
/// Sentinel score for items without a usable date.
pub const NO_DATE_SCORE: f64 = 999.0;

/// Status class of a target date relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    /// Executed, regardless of date.
    Completed,
    /// Target date has passed.
    Overdue,
    /// Target date is today.
    Today,
    /// Within the next 7 days.
    Urgent,
    /// Within the next 30 days.
    Upcoming,
    /// More than 30 days out.
    Future,
    /// No date, or an unparseable one.
    Unknown,
}

/// Parses a free-text target date.
///
/// Records store dates as free text, frequently empty or placeholder, so
/// parsing is permissive about separators but anything unrecognized is
/// simply "no date", never an error.
pub fn parse_target_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in ["%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    // Full timestamps (e.g. RFC 3339) carry the date in the first 10 bytes.
    if trimmed.len() > 10 && trimmed.is_char_boundary(10) {
        if let Ok(date) = NaiveDate::parse_from_str(&trimmed[..10], "%Y-%m-%d") {
            return Some(date);
        }
    }

    debug!("unparseable target date treated as no date: {trimmed:?}");
    None
}

/// Signed calendar days from today to the target date.
///
/// Both dates are truncated to midnight before subtracting, so a same-day
/// target yields exactly 0 regardless of time-of-day at evaluation.
/// `None` when no usable date is given.
pub fn day_offset(target: &str, clock: &dyn Clock) -> Option<i64> {
    let date = parse_target_date(target)?;
    Some((date - clock.today()).num_days())
}

/// Status class for a target date.
///
/// `executed` short-circuits to [`ScheduleStatus::Completed`] no matter how
/// far in the past or future the date is.
pub fn schedule_status(target: &str, executed: bool, clock: &dyn Clock) -> ScheduleStatus {
    status_for_offset(day_offset(target, clock), executed)
}

/// Status class for an already-computed day offset.
///
/// The selector parses each date once and classifies from the offset; the
/// string-based [`schedule_status`] delegates here.
pub fn status_for_offset(offset: Option<i64>, executed: bool) -> ScheduleStatus {
    if executed {
        return ScheduleStatus::Completed;
    }
    match offset {
        None => ScheduleStatus::Unknown,
        Some(offset) if offset < 0 => ScheduleStatus::Overdue,
        Some(0) => ScheduleStatus::Today,
        Some(offset) if offset <= URGENT_WINDOW_DAYS => ScheduleStatus::Urgent,
        Some(offset) if offset <= UPCOMING_WINDOW_DAYS => ScheduleStatus::Upcoming,
        Some(_) => ScheduleStatus::Future,
    }
}

/// Fine-grained urgency score for a target date (lower = more urgent).
pub fn priority_score(target: &str, executed: bool, clock: &dyn Clock) -> f64 {
    score_for_offset(day_offset(target, clock), executed)
}

/// Score for an already-computed day offset (lower = more urgent).
pub fn score_for_offset(offset: Option<i64>, executed: bool) -> f64 {
    if executed {
        return EXECUTED_SCORE;
    }
    match offset {
        None => NO_DATE_SCORE,
        Some(offset) if offset < 0 => offset.unsigned_abs() as f64,
        Some(offset) => offset as f64,
    }
}

/// Badge text for a day offset: `D-5`, `D-Day`, `D+3`.
pub fn dday_text(offset: i64) -> String {
    match offset {
        0 => "D-Day".to_string(),
        n if n > 0 => format!("D-{n}"),
        n => format!("D+{}", -n),
    }
}

/// A D-Day badge: offset, status class, and display text in one shot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DdayBadge {
    /// Signed day count, `None` when no usable date.
    pub day_offset: Option<i64>,
    /// Status class.
    pub status: ScheduleStatus,
    /// Display text (`D-5`, `D-Day`, `D+3`; empty when no date).
    pub text: String,
}

/// Computes the full badge for a target date.
pub fn calculate_dday(target: &str, executed: bool, clock: &dyn Clock) -> DdayBadge {
    let offset = day_offset(target, clock);
    DdayBadge {
        day_offset: offset,
        status: status_for_offset(offset, executed),
        text: offset.map(dday_text).unwrap_or_default(),
    }
}
