//! Clock abstraction for "today".
//!
//! Every calculation in this crate is a pure function of its inputs plus
//! the current calendar date. The date is injected through [`Clock`] so
//! batch runs and tests are reproducible; nothing in the engine reads the
//! system clock implicitly.

use chrono::{Local, NaiveDate};

/// Source of the current calendar date.
///
/// The only non-determinism in the engine. Implementations must be cheap:
/// `today` is called once per date-bearing field per evaluation pass.
pub trait Clock {
    /// The current date, truncated to local midnight.
    fn today(&self) -> NaiveDate;
}

/// Reads the host's local date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to a fixed date.
///
/// Used by tests and by callers that need a whole evaluation pass to agree
/// on a single "today" (e.g. a report generated just before midnight).
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
