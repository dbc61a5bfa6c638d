//! Feedback notification ranking.
//!
//! Open feedback items are scored by explicit priority plus a capped age
//! bonus, ranked descending, capped, and banded into priority buckets for
//! display. Age can at most lift a `low` item to just under `normal`
//! weight; it never outweighs an explicit priority step to `critical`.

use std::collections::HashSet;

use crate::clock::Clock;
use crate::models::{FeedbackItem, FeedbackPriority, FeedbackStatus, NotificationCandidate, Urgency};

use super::ranking::rank_by_key;

/// Age contribution per day since creation.
pub const AGE_SCORE_PER_DAY: f64 = 0.1;
/// Cap on the total age contribution.
pub const MAX_AGE_SCORE: f64 = 2.0;

/// Explicit priority weight. Unrecognized priorities weigh as normal.
pub fn priority_weight(priority: FeedbackPriority) -> f64 {
    match priority {
        FeedbackPriority::Critical => 4.0,
        FeedbackPriority::High => 3.0,
        FeedbackPriority::Normal => 2.0,
        FeedbackPriority::Low => 1.0,
        FeedbackPriority::Other => 2.0,
    }
}

/// Capped age contribution: `min(days_since_created * 0.1, 2.0)`.
///
/// Days are counted between midnight-truncated dates, the same way
/// day offsets are. Items without a creation time age as zero.
pub fn age_score(item: &FeedbackItem, clock: &dyn Clock) -> f64 {
    let Some(created_at) = item.created_at else {
        return 0.0;
    };
    let days = (clock.today() - created_at.date()).num_days();
    (days as f64 * AGE_SCORE_PER_DAY).min(MAX_AGE_SCORE)
}

/// Combined ranking score for one item.
pub fn feedback_score(item: &FeedbackItem, clock: &dyn Clock) -> f64 {
    priority_weight(item.priority) + age_score(item, clock)
}

fn display_urgency(priority: FeedbackPriority) -> Urgency {
    match priority {
        FeedbackPriority::Critical | FeedbackPriority::High => Urgency::High,
        FeedbackPriority::Normal | FeedbackPriority::Other => Urgency::Medium,
        FeedbackPriority::Low => Urgency::Low,
    }
}

/// Ranks open, non-dismissed feedback into a capped candidate list.
///
/// Sorted descending by score with ties keeping input order; no secondary
/// key, so equal-score items never reshuffle between passes. Truncation to
/// `max_items` keeps the ranked prefix; overflow items are silently dropped.
pub fn rank_feedback(
    items: &[FeedbackItem],
    dismissed: &HashSet<String>,
    max_items: usize,
    clock: &dyn Clock,
) -> Vec<NotificationCandidate<FeedbackItem>> {
    let candidates: Vec<NotificationCandidate<FeedbackItem>> = items
        .iter()
        .filter(|item| item.status == FeedbackStatus::Open && !dismissed.contains(&item.id))
        .map(|item| NotificationCandidate {
            source_id: item.id.clone(),
            score: feedback_score(item, clock),
            urgency: display_urgency(item.priority),
            payload: item.clone(),
        })
        .collect();

    // Negated key: the shared primitive sorts ascending.
    rank_by_key(candidates, |c| -c.score, Some(max_items))
}

/// Ranked candidates banded by explicit priority for display.
///
/// Within each bucket the order is the order the items held in the overall
/// ranked list, banding never re-sorts. Unrecognized priorities band as
/// normal, mirroring their weight.
#[derive(Debug, Clone, Default)]
pub struct FeedbackBuckets {
    pub critical: Vec<NotificationCandidate<FeedbackItem>>,
    pub high: Vec<NotificationCandidate<FeedbackItem>>,
    pub normal: Vec<NotificationCandidate<FeedbackItem>>,
    pub low: Vec<NotificationCandidate<FeedbackItem>>,
}

impl FeedbackBuckets {
    /// Total candidates across all buckets.
    pub fn len(&self) -> usize {
        self.critical.len() + self.high.len() + self.normal.len() + self.low.len()
    }

    /// Whether every bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Groups a ranked candidate list into priority buckets.
pub fn bucket_by_priority(ranked: &[NotificationCandidate<FeedbackItem>]) -> FeedbackBuckets {
    let mut buckets = FeedbackBuckets::default();
    for candidate in ranked {
        match candidate.payload.priority {
            FeedbackPriority::Critical => buckets.critical.push(candidate.clone()),
            FeedbackPriority::High => buckets.high.push(candidate.clone()),
            FeedbackPriority::Normal | FeedbackPriority::Other => {
                buckets.normal.push(candidate.clone())
            }
            FeedbackPriority::Low => buckets.low.push(candidate.clone()),
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{Days, NaiveDate};

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
    }

    fn item(id: &str, priority: FeedbackPriority, days_old: u64, clock: &FixedClock) -> FeedbackItem {
        let created = clock
            .0
            .checked_sub_days(Days::new(days_old))
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        FeedbackItem::new(id, "P1")
            .with_priority(priority)
            .with_created_at(created)
    }

    #[test]
    fn test_priority_weights() {
        assert_eq!(priority_weight(FeedbackPriority::Critical), 4.0);
        assert_eq!(priority_weight(FeedbackPriority::High), 3.0);
        assert_eq!(priority_weight(FeedbackPriority::Normal), 2.0);
        assert_eq!(priority_weight(FeedbackPriority::Low), 1.0);
        assert_eq!(priority_weight(FeedbackPriority::Other), 2.0);
    }

    #[test]
    fn test_age_score_caps_at_two() {
        let clock = clock();
        assert_eq!(age_score(&item("f", FeedbackPriority::Normal, 0, &clock), &clock), 0.0);
        assert_eq!(age_score(&item("f", FeedbackPriority::Normal, 5, &clock), &clock), 0.5);
        assert_eq!(age_score(&item("f", FeedbackPriority::Normal, 20, &clock), &clock), 2.0);
        assert_eq!(age_score(&item("f", FeedbackPriority::Normal, 90, &clock), &clock), 2.0);
    }

    #[test]
    fn test_fresh_critical_outranks_old_low() {
        // critical today: 4 + 0 = 4; low 30 days old: 1 + 2 = 3.
        let clock = clock();
        let items = vec![
            item("old-low", FeedbackPriority::Low, 30, &clock),
            item("new-critical", FeedbackPriority::Critical, 0, &clock),
        ];
        let ranked = rank_feedback(&items, &HashSet::new(), 10, &clock);
        assert_eq!(ranked[0].source_id, "new-critical");
        assert_eq!(ranked[0].score, 4.0);
        assert_eq!(ranked[1].source_id, "old-low");
        assert_eq!(ranked[1].score, 3.0);
    }

    #[test]
    fn test_only_open_items_rank() {
        let clock = clock();
        let items = vec![
            item("open", FeedbackPriority::Normal, 0, &clock),
            item("resolved", FeedbackPriority::Critical, 0, &clock)
                .with_status(FeedbackStatus::Resolved),
            item("deleted", FeedbackPriority::Critical, 0, &clock)
                .with_status(FeedbackStatus::Deleted),
            item("odd", FeedbackPriority::Critical, 0, &clock).with_status(FeedbackStatus::Other),
        ];
        let ranked = rank_feedback(&items, &HashSet::new(), 10, &clock);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].source_id, "open");
    }

    #[test]
    fn test_dismissed_ids_are_excluded() {
        let clock = clock();
        let items = vec![
            item("keep", FeedbackPriority::Normal, 0, &clock),
            item("dismissed", FeedbackPriority::Critical, 0, &clock),
        ];
        let dismissed: HashSet<String> = ["dismissed".to_string()].into();
        let ranked = rank_feedback(&items, &dismissed, 10, &clock);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].source_id, "keep");
    }

    #[test]
    fn test_ties_keep_input_order() {
        let clock = clock();
        let items = vec![
            item("a", FeedbackPriority::Normal, 3, &clock),
            item("b", FeedbackPriority::Normal, 3, &clock),
            item("c", FeedbackPriority::Normal, 3, &clock),
        ];
        let ranked = rank_feedback(&items, &HashSet::new(), 10, &clock);
        let ids: Vec<&str> = ranked.iter().map(|c| c.source_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_truncation_keeps_ranked_prefix() {
        let clock = clock();
        let items: Vec<FeedbackItem> = (0..12)
            .map(|i| item(&format!("f{i}"), FeedbackPriority::Normal, i, &clock))
            .collect();

        let full = rank_feedback(&items, &HashSet::new(), usize::MAX, &clock);
        let capped = rank_feedback(&items, &HashSet::new(), 10, &clock);

        assert_eq!(full.len(), 12);
        assert_eq!(capped.len(), 10);
        for (a, b) in capped.iter().zip(&full) {
            assert_eq!(a.source_id, b.source_id);
        }
        // Highest score first (oldest normal item, age capped at 11 * 0.1).
        assert_eq!(capped[0].source_id, "f11");
    }

    #[test]
    fn test_buckets_preserve_ranked_order() {
        let clock = clock();
        let items = vec![
            item("n-old", FeedbackPriority::Normal, 15, &clock), // 3.5
            item("h-new", FeedbackPriority::High, 0, &clock),    // 3.0
            item("n-new", FeedbackPriority::Normal, 0, &clock),  // 2.0
            item("c-new", FeedbackPriority::Critical, 0, &clock), // 4.0
        ];
        let ranked = rank_feedback(&items, &HashSet::new(), 10, &clock);
        let ids: Vec<&str> = ranked.iter().map(|c| c.source_id.as_str()).collect();
        assert_eq!(ids, vec!["c-new", "n-old", "h-new", "n-new"]);

        let buckets = bucket_by_priority(&ranked);
        assert_eq!(buckets.critical.len(), 1);
        assert_eq!(buckets.high.len(), 1);
        // Within the normal bucket, overall ranked order holds: n-old first.
        let normal_ids: Vec<&str> = buckets.normal.iter().map(|c| c.source_id.as_str()).collect();
        assert_eq!(normal_ids, vec!["n-old", "n-new"]);
        assert_eq!(buckets.len(), 4);
    }

    #[test]
    fn test_unrecognized_priority_bands_as_normal() {
        let clock = clock();
        let items = vec![item("odd", FeedbackPriority::Other, 0, &clock)];
        let ranked = rank_feedback(&items, &HashSet::new(), 10, &clock);
        assert_eq!(ranked[0].score, 2.0);
        let buckets = bucket_by_priority(&ranked);
        assert_eq!(buckets.normal.len(), 1);
    }

    #[test]
    fn test_missing_created_at_ages_as_zero() {
        let clock = clock();
        let no_date = FeedbackItem::new("f", "P1").with_priority(FeedbackPriority::High);
        assert_eq!(feedback_score(&no_date, &clock), 3.0);
    }
}
