//! In-process store. Volatile; meant for local runs and tests.

use async_trait::async_trait;
use dashmap::DashMap;
use visitcount_core::count::StoreNumber;

use super::{StoreError, VisitStore};

pub struct MemoryStore {
    table: String,
    counts: DashMap<String, u64>,
}

impl MemoryStore {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            counts: DashMap::new(),
        }
    }

    /// Seed a counter, e.g. to resume from a known value.
    pub fn insert(&self, path: impl Into<String>, visit_count: u64) {
        self.counts.insert(path.into(), visit_count);
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[async_trait]
impl VisitStore for MemoryStore {
    fn table(&self) -> &str {
        &self.table
    }

    async fn increment(&self, path: &str) -> Result<StoreNumber, StoreError> {
        // the entry guard holds the shard lock across read and write
        let mut entry = self.counts.entry(path.to_string()).or_insert(0);
        let next = entry
            .checked_add(1)
            .ok_or_else(|| StoreError::Backend(format!("visit_count overflow for {path}")))?;
        *entry = next;
        Ok(StoreNumber::from(next))
    }
}
