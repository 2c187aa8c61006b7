// Providers layer - Work performers and business logic
//
// Providers contain the rules coordinators orchestrate. They perform actual
// work like validation and hold no request state.

pub mod item_schema_provider;

pub use item_schema_provider::ItemSchemaProvider;
