//! Domain models.
//!
//! Input records ([`Project`], [`StageRecord`], [`FeedbackItem`]) are owned
//! by an external store and only read here; derived types ([`ScheduleEvent`],
//! [`NotificationCandidate`]) live for one evaluation pass.

mod event;
mod feedback;
mod project;

pub use event::{NotificationCandidate, NotificationKind, ScheduleEvent, Urgency};
pub use feedback::{FeedbackItem, FeedbackPriority, FeedbackStatus};
pub use project::{FieldValue, Project, Stage, StageRecord};
