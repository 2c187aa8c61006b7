// Data transfer objects exposed through the OpenAPI surface
pub mod common;
pub mod items;

pub use common::Envelope;
pub use items::{CreateItemApiResponse, Item, ListItemsApiResponse};
