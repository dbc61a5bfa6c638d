//! Progress scoring.
//!
//! Converts a stage's dynamically-shaped field set into a completion
//! percentage, then averages the three stages into a project score.
//! Everything here is a pure function of the records passed in,
//! recomputed on every evaluation with no state between calls.
//!
//! # Pipeline
//!
//! 1. [`classify_fields`] buckets a stage's fields by naming convention
//! 2. [`score_stage`] weighs the buckets into a `[0, 100]` percentage
//! 3. [`score_project`] averages the three stage scores equally

mod aggregate;
mod classifier;
mod stage;

pub use aggregate::{score_project, ProjectProgress};
pub use classifier::{classify_fields, FieldClassification, STANDALONE_CHECKBOX_FIELDS};
pub use stage::score_stage;
