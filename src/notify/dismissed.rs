//! Dismissed-notification persistence seam.
//!
//! The caller owns which notifications the user has dismissed and where
//! that set lives (browser local storage, a settings file, a database
//! row). The engine only ever consumes the set as an exclusion filter, so
//! the seam is a minimal get/set interface.

use std::cell::RefCell;
use std::collections::HashSet;

/// Storage for the set of dismissed notification source ids.
pub trait DismissedStore {
    /// Loads the current dismissed set.
    fn load(&self) -> HashSet<String>;

    /// Replaces the stored set.
    fn save(&self, ids: &HashSet<String>);
}

/// In-memory store, for tests and callers without persistence.
#[derive(Debug, Default)]
pub struct MemoryDismissedStore {
    ids: RefCell<HashSet<String>>,
}

impl MemoryDismissedStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one id to the stored set.
    pub fn dismiss(&self, id: impl Into<String>) {
        self.ids.borrow_mut().insert(id.into());
    }
}

impl DismissedStore for MemoryDismissedStore {
    fn load(&self) -> HashSet<String> {
        self.ids.borrow().clone()
    }

    fn save(&self, ids: &HashSet<String>) {
        *self.ids.borrow_mut() = ids.clone();
    }
}
