//! Feedback ("opinion") record model.
//!
//! Feedback items arrive from an external store the engine does not own.
//! Priority and status are open sets there; unrecognized values must
//! degrade to a neutral default rather than fail deserialization, so both
//! enums carry a catch-all variant.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A feedback item attached to a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackItem {
    /// Unique feedback identifier.
    pub id: String,
    /// The project this feedback refers to.
    pub project_id: String,
    /// Free-text message.
    pub message: String,
    /// Explicit priority assigned by the author.
    pub priority: FeedbackPriority,
    /// Lifecycle status; only `Open` items are ranked.
    pub status: FeedbackStatus,
    /// Creation time (drives the age component of the ranking score).
    pub created_at: Option<NaiveDateTime>,
    /// Author display name.
    pub author: String,
}

impl Default for FeedbackItem {
    fn default() -> Self {
        Self {
            id: String::new(),
            project_id: String::new(),
            message: String::new(),
            priority: FeedbackPriority::Normal,
            status: FeedbackStatus::Open,
            created_at: None,
            author: String::new(),
        }
    }
}

impl FeedbackItem {
    /// Creates an open, normal-priority item.
    pub fn new(id: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            project_id: project_id.into(),
            ..Default::default()
        }
    }

    /// Sets the message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: FeedbackPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the status.
    pub fn with_status(mut self, status: FeedbackStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the creation time.
    pub fn with_created_at(mut self, created_at: NaiveDateTime) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Sets the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }
}

/// Author-assigned feedback priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackPriority {
    Critical,
    High,
    Normal,
    Low,
    /// Any value the store carries that this engine doesn't recognize.
    /// Weighted and banded as `Normal`.
    #[serde(other)]
    Other,
}

/// Feedback lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackStatus {
    Open,
    Resolved,
    Deleted,
    /// Unrecognized status; treated as not-open.
    #[serde(other)]
    Other,
}
