//! Progress scoring and schedule-notification engine.
//!
//! Deterministic computation over project-tracker records: converts
//! dynamically-shaped per-stage field sets into completion percentages,
//! computes day-offset ("D-Day") schedule status from target dates, and
//! ranks schedule and feedback notification candidates into bounded,
//! stably-ordered lists.
//!
//! # Modules
//!
//! - **`models`**: Input and derived types — `Project`, `StageRecord`,
//!   `FeedbackItem`, `ScheduleEvent`, `NotificationCandidate`
//! - **`progress`**: Field classification and stage/project scoring
//! - **`dday`**: Day offsets, status classes, priority scores, badge text
//! - **`notify`**: Schedule and feedback notification selection
//! - **`clock`**: Injectable "today" source (the only non-determinism)
//! - **`validation`**: Input integrity checks (duplicate IDs, bad dates)
//! - **`summary`**: Portfolio KPIs over one evaluation pass
//!
//! # Architecture
//!
//! A computation library, not a service: no I/O, no persistence, no
//! interior state. Every function is pure over its inputs plus an injected
//! [`clock::Clock`], so it is safe to recompute on every render/update and
//! to call from independent threads without coordination. Per-record
//! anomalies are absorbed into neutral defaults (all-zero progress,
//! "no date" status, normal priority weight) rather than raised; the
//! calling layer owns reporting, fed by `log` records and by
//! [`validation::validate_inputs`].

pub mod clock;
pub mod dday;
pub mod models;
pub mod notify;
pub mod progress;
pub mod summary;
pub mod validation;
