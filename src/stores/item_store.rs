use tokio::sync::RwLock;

use crate::types::internal::ItemRecord;

/// Ordered, append-only, in-process item collection
///
/// Nothing is persisted; contents live as long as the store. The store does
/// not validate or deduplicate; callers decide what gets appended.
#[derive(Debug, Default)]
pub struct ItemStore {
    records: RwLock<Vec<ItemRecord>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with records, in the given order
    pub fn with_records(records: Vec<ItemRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Append a record to the end of the store
    ///
    /// # Returns
    /// The store length after the append
    pub async fn append(&self, record: ItemRecord) -> usize {
        let mut records = self.records.write().await;
        records.push(record);
        records.len()
    }

    /// Copy of every record, in insertion order
    pub async fn snapshot(&self) -> Vec<ItemRecord> {
        self.records.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}
