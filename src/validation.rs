//! Input integrity checks.
//!
//! The scoring and notification paths absorb per-record anomalies into
//! neutral defaults so a bad record can never halt a batch pass. This
//! module is the complementary surface: an explicit report of everything
//! that was (or would be) absorbed, for the calling layer to log or show.
//! Detects:
//! - Duplicate project / feedback IDs
//! - Projects with no identity or no stage records
//! - Tracked date fields whose text does not parse as a date
//! - Feedback items carrying an unrecognized priority
//!
//! Never consulted by the scoring paths themselves.

use std::collections::HashSet;

use crate::dday::parse_target_date;
use crate::models::{FeedbackItem, FeedbackPriority, Project};
use crate::notify::TRACKED_DATE_FIELDS;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation finding.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Finding category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two records share the same ID.
    DuplicateId,
    /// A project has an empty ID (scores all-zero).
    MissingIdentity,
    /// A project carries no stage records at all (scores all-zero).
    MissingStages,
    /// A tracked date field holds text that does not parse as a date
    /// (treated as "no date" by the engine).
    UnparseableDate,
    /// A feedback item's priority fell back to the normal weight.
    UnknownPriority,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a batch of engine inputs.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_inputs(projects: &[Project], feedback: &[FeedbackItem]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut project_ids = HashSet::new();
    for project in projects {
        if project.id.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingIdentity,
                format!("Project '{}' has no ID", project.name),
            ));
        } else if !project_ids.insert(project.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate project ID: {}", project.id),
            ));
        }

        if project.has_no_stages() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingStages,
                format!("Project '{}' has no stage records", project.id),
            ));
        }

        for tracked in TRACKED_DATE_FIELDS {
            let Some(record) = project.stage(tracked.stage) else {
                continue;
            };
            let Some(text) = record.get(tracked.field).and_then(|v| v.as_text()) else {
                continue;
            };
            if !text.trim().is_empty() && parse_target_date(text).is_none() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnparseableDate,
                    format!(
                        "Project '{}' field '{}' has unparseable date {:?}",
                        project.id, tracked.field, text
                    ),
                ));
            }
        }
    }

    let mut feedback_ids = HashSet::new();
    for item in feedback {
        if !item.id.is_empty() && !feedback_ids.insert(item.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate feedback ID: {}", item.id),
            ));
        }
        if item.priority == FeedbackPriority::Other {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownPriority,
                format!("Feedback '{}' has unrecognized priority", item.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Stage, StageRecord};

    fn valid_project(id: &str) -> Project {
        Project::new(id).with_stage(
            Stage::Stage3,
            StageRecord::new().with_text("launchDate", "2024-06-01"),
        )
    }

    #[test]
    fn test_valid_input() {
        let projects = vec![valid_project("P1"), valid_project("P2")];
        let feedback = vec![FeedbackItem::new("F1", "P1")];
        assert!(validate_inputs(&projects, &feedback).is_ok());
    }

    #[test]
    fn test_duplicate_project_id() {
        let projects = vec![valid_project("P1"), valid_project("P1")];
        let errors = validate_inputs(&projects, &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("project")));
    }

    #[test]
    fn test_missing_identity_and_stages() {
        let projects = vec![Project::new("").with_name("ghost")];
        let errors = validate_inputs(&projects, &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingIdentity));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingStages));
    }

    #[test]
    fn test_unparseable_tracked_date() {
        let projects = vec![Project::new("P1").with_stage(
            Stage::Stage3,
            StageRecord::new().with_text("launchDate", "sometime soon"),
        )];
        let errors = validate_inputs(&projects, &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnparseableDate));
    }

    #[test]
    fn test_empty_date_is_not_flagged() {
        let projects = vec![Project::new("P1").with_stage(
            Stage::Stage3,
            StageRecord::new().with_text("launchDate", ""),
        )];
        assert!(validate_inputs(&projects, &[]).is_ok());
    }

    #[test]
    fn test_unknown_priority_flagged() {
        let feedback = vec![FeedbackItem::new("F1", "P1").with_priority(FeedbackPriority::Other)];
        let errors = validate_inputs(&[], &feedback).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownPriority));
    }

    #[test]
    fn test_multiple_errors_reported_together() {
        let projects = vec![
            Project::new(""),
            Project::new("P1").with_stage(
                Stage::Stage1,
                StageRecord::new().with_text("kickoffDate", "TBD"),
            ),
        ];
        let errors = validate_inputs(&projects, &[]).unwrap_err();
        assert!(errors.len() >= 3); // missing id + missing stages + bad date
    }
}
