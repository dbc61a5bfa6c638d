//! Name-pattern field classification.
//!
//! Stage records have no fixed schema; scoring weight is derived from the
//! field names alone, recomputed from the record's own keys on every call.
//! New fields participate in scoring the moment a record carries them.
//!
//! # Rules
//! - `*Date` with a `*DateExecuted` sibling → paired (split 0.5/0.5 weight)
//! - `*Date` without the sibling → plain (full weight on value presence)
//! - known standalone boolean flags → checkbox (full weight on `true`)
//! - `*Executed` and `notes` → excluded from scoring

use crate::models::StageRecord;

/// Suffix marking a date field.
const DATE_SUFFIX: &str = "Date";
/// Suffix marking an executed flag (scored through its date pair only).
const EXECUTED_SUFFIX: &str = "Executed";
/// Field excluded from scoring entirely.
const NOTES_FIELD: &str = "notes";

/// Standalone boolean fields scored as checkboxes rather than text.
///
/// These are completion flags with no date counterpart. Extend this list
/// when a new flag family is introduced in the stage forms.
pub const STANDALONE_CHECKBOX_FIELDS: &[&str] = &["trainingCompleted", "manualUploaded"];

/// Disjoint name buckets produced by [`classify_fields`].
///
/// Names within each bucket appear in the record's key order
/// (lexicographic), so output is deterministic for a given record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldClassification {
    /// `*Date` names whose `<name>Executed` sibling exists in the record.
    pub paired_date_fields: Vec<String>,
    /// Plain text fields, including unpaired `*Date` fields.
    pub plain_fields: Vec<String>,
    /// Standalone boolean completion flags present in the record.
    pub standalone_checkbox_fields: Vec<String>,
}

impl FieldClassification {
    /// Total number of scorable contributions (each bucket entry weighs 1.0).
    pub fn scorable_count(&self) -> usize {
        self.paired_date_fields.len()
            + self.plain_fields.len()
            + self.standalone_checkbox_fields.len()
    }
}

/// Buckets a record's fields by naming convention.
///
/// Pure function of the record's current keys; no schema, no caching, no
/// state carried between calls or across records.
pub fn classify_fields(record: &StageRecord) -> FieldClassification {
    let mut classification = FieldClassification::default();

    for name in record.field_names() {
        if name == NOTES_FIELD {
            continue;
        }
        if STANDALONE_CHECKBOX_FIELDS.contains(&name) {
            classification.standalone_checkbox_fields.push(name.to_string());
            continue;
        }
        if name.ends_with(EXECUTED_SUFFIX) {
            // Scored through its date pair; unpaired executed flags are
            // excluded outright.
            continue;
        }
        if name.ends_with(DATE_SUFFIX) {
            let mut executed_name = String::with_capacity(name.len() + EXECUTED_SUFFIX.len());
            executed_name.push_str(name);
            executed_name.push_str(EXECUTED_SUFFIX);
            if record.contains(&executed_name) {
                classification.paired_date_fields.push(name.to_string());
            } else {
                // Date with no executed sibling: full weight on presence.
                classification.plain_fields.push(name.to_string());
            }
            continue;
        }
        classification.plain_fields.push(name.to_string());
    }

    classification
}

/// The executed-flag sibling name for a date field.
pub(crate) fn executed_sibling(date_field: &str) -> String {
    format!("{date_field}{EXECUTED_SUFFIX}")
}
