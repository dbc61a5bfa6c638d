//! Single-stage completion scoring.

use crate::models::StageRecord;

use super::classifier::{classify_fields, executed_sibling};

/// Scores one stage as an integer percentage in `[0, 100]`.
///
/// Weighting per classified field:
/// - paired date field: 0.5 for a filled date value, 0.5 for a strictly
///   `true` executed flag (date validity is not checked; any filled text
///   counts, matching the records' free-text dates)
/// - plain field: 1.0 for a filled text value
/// - standalone checkbox: 1.0 for strictly `true`
///
/// Returns 0 when the record has no scorable fields. Pure function of the
/// record's current values; safe to call on every evaluation cycle.
pub fn score_stage(record: &StageRecord) -> u8 {
    let classification = classify_fields(record);

    let mut total_score: f64 = 0.0;
    let mut achieved_score: f64 = 0.0;

    for name in &classification.paired_date_fields {
        total_score += 1.0;
        if record.get(name).is_some_and(|v| v.is_filled_text()) {
            achieved_score += 0.5;
        }
        if record
            .get(&executed_sibling(name))
            .is_some_and(|v| v.is_true())
        {
            achieved_score += 0.5;
        }
    }

    for name in &classification.plain_fields {
        total_score += 1.0;
        if record.get(name).is_some_and(|v| v.is_filled_text()) {
            achieved_score += 1.0;
        }
    }

    for name in &classification.standalone_checkbox_fields {
        total_score += 1.0;
        if record.get(name).is_some_and(|v| v.is_true()) {
            achieved_score += 1.0;
        }
    }

    if total_score > 0.0 {
        (achieved_score / total_score * 100.0).clamp(0.0, 100.0).round() as u8
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_scores_zero() {
        assert_eq!(score_stage(&StageRecord::new()), 0);
    }

    #[test]
    fn test_unscorable_record_scores_zero() {
        // Only excluded fields: no division by zero.
        let record = StageRecord::new()
            .with_text("notes", "pending")
            .with_flag("strayExecuted", true);
        assert_eq!(score_stage(&record), 0);
    }

    #[test]
    fn test_paired_field_half_weights() {
        // Date filled, executed true → 1.0 / 1.0
        let full = StageRecord::new()
            .with_text("launchDate", "2024-01-01")
            .with_flag("launchDateExecuted", true);
        assert_eq!(score_stage(&full), 100);

        // Date filled, not executed → 0.5 / 1.0
        let half = StageRecord::new()
            .with_text("launchDate", "2024-01-01")
            .with_flag("launchDateExecuted", false);
        assert_eq!(score_stage(&half), 50);

        // Date empty, executed true → still 0.5 / 1.0 (independent halves)
        let executed_only = StageRecord::new()
            .with_text("launchDate", "")
            .with_flag("launchDateExecuted", true);
        assert_eq!(score_stage(&executed_only), 50);
    }

    #[test]
    fn test_invalid_date_text_still_counts() {
        // Permissive by design: presence, not validity.
        let record = StageRecord::new()
            .with_text("launchDate", "sometime in Q3")
            .with_flag("launchDateExecuted", false);
        assert_eq!(score_stage(&record), 50);
    }

    #[test]
    fn test_plain_field_presence() {
        let record = StageRecord::new()
            .with_text("vendor", "ACME")
            .with_text("owner", "")
            .with_text("line", "   ");
        // 1.0 of 3.0 → 33.33 → 33
        assert_eq!(score_stage(&record), 33);
    }

    #[test]
    fn test_checkbox_strict_true() {
        let record = StageRecord::new()
            .with_flag("trainingCompleted", true)
            .with_flag("manualUploaded", false);
        assert_eq!(score_stage(&record), 50);
    }

    #[test]
    fn test_paired_full_with_empty_plain_scores_fifty() {
        // launchDate filled + executed (1.0) and an empty plain field (0.0)
        // over a total of 2.0 → 50.
        let record = StageRecord::new()
            .with_text("launchDate", "2024-01-01")
            .with_flag("launchDateExecuted", true)
            .with_text("vendor", "");
        assert_eq!(score_stage(&record), 50);
    }

    #[test]
    fn test_no_cross_field_coupling() {
        // The paired field contributes the same 0.5 whether its neighbors
        // are filled or not.
        let base = StageRecord::new()
            .with_text("launchDate", "2024-01-01")
            .with_flag("launchDateExecuted", false);
        let with_neighbor = base.clone().with_text("vendor", "ACME");

        assert_eq!(score_stage(&base), 50); // 0.5 / 1.0
        assert_eq!(score_stage(&with_neighbor), 75); // 1.5 / 2.0
    }

    #[test]
    fn test_rounding() {
        // 2 of 3 plain fields filled → 66.67 → 67
        let record = StageRecord::new()
            .with_text("a", "x")
            .with_text("b", "y")
            .with_text("c", "");
        assert_eq!(score_stage(&record), 67);
    }
}
