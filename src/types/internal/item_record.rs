use crate::types::dto::Item;

/// Item as held by the item store
///
/// Fields stay as raw strings so the list path can re-check every record
/// against the read schema, including records that entered the store without
/// passing through the create workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord {
    pub uuid: String,
    pub message: String,
}

impl ItemRecord {
    pub fn new(uuid: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            message: message.into(),
        }
    }
}

impl From<&Item> for ItemRecord {
    fn from(item: &Item) -> Self {
        Self {
            uuid: item.uuid.hyphenated().to_string(),
            message: item.message.clone(),
        }
    }
}
