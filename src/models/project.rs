//! Project and stage-record models.
//!
//! A project moves through three sequential stages, each holding an
//! open-ended set of named fields. No field schema is enforced here:
//! stages gain and lose fields across versions without a migration step,
//! and all classification happens by name pattern at evaluation time
//! (see `progress::classifier`).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A tracked project.
///
/// Owned by the external store; the engine only reads it. Stages are
/// optional so structurally incomplete records can be represented;
/// scoring absorbs them instead of failing (a missing stage scores 0,
/// a record with no stages at all scores all-zero).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Unique project identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Model / product-line label.
    pub model: String,
    /// First-stage field set.
    pub stage1: Option<StageRecord>,
    /// Second-stage field set.
    pub stage2: Option<StageRecord>,
    /// Third-stage field set.
    pub stage3: Option<StageRecord>,
    /// Record creation time.
    pub created_at: Option<NaiveDateTime>,
    /// Last modification time (callers key render-boundary memoization on this).
    pub updated_at: Option<NaiveDateTime>,
}

impl Project {
    /// Creates an empty project with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Sets the project name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the model label.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets one stage's field set.
    pub fn with_stage(mut self, stage: Stage, record: StageRecord) -> Self {
        match stage {
            Stage::Stage1 => self.stage1 = Some(record),
            Stage::Stage2 => self.stage2 = Some(record),
            Stage::Stage3 => self.stage3 = Some(record),
        }
        self
    }

    /// Returns one stage's field set, if present.
    pub fn stage(&self, stage: Stage) -> Option<&StageRecord> {
        match stage {
            Stage::Stage1 => self.stage1.as_ref(),
            Stage::Stage2 => self.stage2.as_ref(),
            Stage::Stage3 => self.stage3.as_ref(),
        }
    }

    /// Whether the record carries no stage data at all.
    pub fn has_no_stages(&self) -> bool {
        Stage::ALL.iter().all(|stage| self.stage(*stage).is_none())
    }
}

/// One of the three sequential stages of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Stage1,
    Stage2,
    Stage3,
}

impl Stage {
    /// All stages in order.
    pub const ALL: [Stage; 3] = [Stage::Stage1, Stage::Stage2, Stage::Stage3];
}

/// An open-ended mapping from field name to value.
///
/// The engine derives pairing, scoring weight, and exclusion from the
/// names themselves, so new fields participate in scoring the
/// moment they appear in a record. Keys iterate in lexicographic order,
/// which keeps classification output deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StageRecord {
    fields: BTreeMap<String, FieldValue>,
}

impl StageRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a text field.
    pub fn with_text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), FieldValue::Text(value.into()));
        self
    }

    /// Sets a boolean field.
    pub fn with_flag(mut self, name: impl Into<String>, value: bool) -> Self {
        self.fields.insert(name.into(), FieldValue::Flag(value));
        self
    }

    /// Sets a field with no value (present but empty).
    pub fn with_empty(mut self, name: impl Into<String>) -> Self {
        self.fields.insert(name.into(), FieldValue::Empty);
        self
    }

    /// Looks up a field by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Whether a field with this name exists (any value, including empty).
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Field names in lexicographic order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A stage field's value: text, a boolean flag, or explicitly empty.
///
/// Serialized untagged so records deserialize straight from their
/// store shape (`"2024-01-01"`, `true`, `null`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Boolean flag (checkbox or executed marker).
    Flag(bool),
    /// Free-text value (dates included; dates are stored as text).
    Text(String),
    /// Present but valueless.
    Empty,
}

impl FieldValue {
    /// Whether this is a non-empty, non-whitespace text value.
    ///
    /// Date validity is deliberately not checked here: any filled text
    /// counts toward completion, matching the records' free-text nature.
    pub fn is_filled_text(&self) -> bool {
        match self {
            FieldValue::Text(s) => !s.trim().is_empty(),
            _ => false,
        }
    }

    /// Whether this is strictly the boolean `true`.
    pub fn is_true(&self) -> bool {
        matches!(self, FieldValue::Flag(true))
    }

    /// The text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}
