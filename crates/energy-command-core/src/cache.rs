//! Month snapshot cache.
//!
//! The cache is an ordinary value owned by the composition root. Insertion
//! needs `&mut self`, so check-and-insert cannot interleave.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::energy::{synthesize_month, MonthEnergySnapshot, MonthKey};

/// Memoizes generated months by key. Entries are never evicted.
#[derive(Debug, Default)]
pub struct MonthCache {
    entries: HashMap<MonthKey, Arc<MonthEnergySnapshot>>,
}

impl MonthCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot for `key`, generating and storing it on first request.
    ///
    /// Repeated calls return the same `Arc`.
    pub fn get_or_generate(&mut self, key: MonthKey) -> Arc<MonthEnergySnapshot> {
        if let Some(existing) = self.entries.get(&key) {
            trace!(month = %key, "month cache hit");
            return Arc::clone(existing);
        }

        debug!(month = %key, cached = self.entries.len(), "month cache miss");
        let snapshot = Arc::new(synthesize_month(key));
        self.entries.insert(key, Arc::clone(&snapshot));
        snapshot
    }

    /// Snapshot for the month enclosing `date`.
    pub fn snapshot_for(&mut self, date: NaiveDate) -> Arc<MonthEnergySnapshot> {
        self.get_or_generate(MonthKey::from_date(date))
    }

    /// Cached snapshot without generating.
    pub fn get(&self, key: MonthKey) -> Option<Arc<MonthEnergySnapshot>> {
        self.entries.get(&key).cloned()
    }

    pub fn contains(&self, key: MonthKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached month.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
