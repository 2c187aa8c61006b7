pub mod item_record;
pub mod validation_policy;

pub use item_record::ItemRecord;
pub use validation_policy::ValidationFailurePolicy;
