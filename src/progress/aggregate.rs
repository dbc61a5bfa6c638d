//! Project-level progress aggregation.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::models::{Project, Stage};

use super::stage::score_stage;

/// Per-stage and overall completion percentages for one project.
///
/// `overall` is the unweighted mean of the three stage scores: stages
/// contribute equally regardless of how many fields each carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectProgress {
    /// Rounded mean of the three stage scores.
    pub overall: u8,
    /// Stage 1 score.
    pub stage1: u8,
    /// Stage 2 score.
    pub stage2: u8,
    /// Stage 3 score.
    pub stage3: u8,
}

impl ProjectProgress {
    /// The all-zero result returned for malformed projects.
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Scores a project's three stages and their mean.
///
/// A structurally incomplete record (no identity, or no stage records at
/// all) yields [`ProjectProgress::zero`] rather than an error, so one bad
/// record cannot halt a batch pass. A missing individual stage scores 0.
pub fn score_project(project: &Project) -> ProjectProgress {
    if project.id.is_empty() || project.has_no_stages() {
        warn!(
            "malformed project record (id={:?}, has_stages={}): scoring as zero",
            project.id,
            !project.has_no_stages()
        );
        return ProjectProgress::zero();
    }

    let stage1 = project.stage(Stage::Stage1).map(score_stage).unwrap_or(0);
    let stage2 = project.stage(Stage::Stage2).map(score_stage).unwrap_or(0);
    let stage3 = project.stage(Stage::Stage3).map(score_stage).unwrap_or(0);

    let mean = (stage1 as f64 + stage2 as f64 + stage3 as f64) / 3.0;
    ProjectProgress {
        overall: mean.clamp(0.0, 100.0).round() as u8,
        stage1,
        stage2,
        stage3,
    }
}
