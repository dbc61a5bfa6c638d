//! Portfolio-level metrics.
//!
//! Dashboard aggregates computed from one evaluation pass over the whole
//! project set. Like everything else here, a pure function of the inputs
//! and the injected clock, recomputed per render and never cached.

use std::collections::HashMap;

use crate::clock::Clock;
use crate::dday::ScheduleStatus;
use crate::models::{FeedbackItem, FeedbackStatus, Project};
use crate::notify::{select_schedule_events, ScheduleThresholds};
use crate::progress::{score_project, ProjectProgress};

/// Portfolio performance indicators.
#[derive(Debug, Clone)]
pub struct PortfolioKpi {
    /// Number of projects in the batch.
    pub project_count: usize,
    /// Mean overall progress across all projects (0.0..100.0).
    pub avg_overall: f64,
    /// Projects whose overall progress is 100.
    pub completed_projects: usize,
    /// Tracked date fields currently overdue (not executed).
    pub overdue_events: usize,
    /// Tracked date fields due today or within the next 7 days.
    pub due_this_week: usize,
    /// Open feedback items.
    pub open_feedback: usize,
    /// Per-project progress, keyed by project ID.
    pub progress_by_project: HashMap<String, ProjectProgress>,
}

impl PortfolioKpi {
    /// Computes KPIs over a batch of projects and feedback items.
    pub fn calculate(projects: &[Project], feedback: &[FeedbackItem], clock: &dyn Clock) -> Self {
        let mut progress_by_project = HashMap::with_capacity(projects.len());
        let mut overall_sum: f64 = 0.0;
        let mut completed_projects = 0;

        for project in projects {
            let progress = score_project(project);
            overall_sum += progress.overall as f64;
            if progress.overall == 100 {
                completed_projects += 1;
            }
            progress_by_project.insert(project.id.clone(), progress);
        }

        let events =
            select_schedule_events(projects, &ScheduleThresholds::default(), clock);
        let overdue_events = events
            .iter()
            .filter(|e| e.status == ScheduleStatus::Overdue)
            .count();
        let due_this_week = events
            .iter()
            .filter(|e| matches!(e.status, ScheduleStatus::Today | ScheduleStatus::Urgent))
            .count();

        let open_feedback = feedback
            .iter()
            .filter(|item| item.status == FeedbackStatus::Open)
            .count();

        let avg_overall = if projects.is_empty() {
            0.0
        } else {
            overall_sum / projects.len() as f64
        };

        Self {
            project_count: projects.len(),
            avg_overall,
            completed_projects,
            overdue_events,
            due_this_week,
            open_feedback,
            progress_by_project,
        }
    }
}
