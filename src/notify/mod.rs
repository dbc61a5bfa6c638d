//! Notification selection and ranking.
//!
//! Two pipelines share one stable-sort/cap primitive:
//!
//! - **schedule**: scans projects' tracked date fields against thresholds,
//!   deduplicates, and orders by urgency bucket then priority score
//! - **feedback**: scores open feedback by explicit priority plus capped
//!   age, caps the list, and bands it by priority for display
//!
//! Both run on every upstream change; both are pure functions of their
//! inputs and an injected clock.

mod dismissed;
mod feedback;
mod ranking;
mod schedule;

pub use dismissed::{DismissedStore, MemoryDismissedStore};
pub use feedback::{
    age_score, bucket_by_priority, feedback_score, priority_weight, rank_feedback,
    FeedbackBuckets, AGE_SCORE_PER_DAY, MAX_AGE_SCORE,
};
pub use ranking::rank_by_key;
pub use schedule::{
    select_schedule_events, ScheduleThresholds, TrackedDateField, TRACKED_DATE_FIELDS,
};
