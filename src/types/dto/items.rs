use poem_openapi::payload::Json;
use poem_openapi::{ApiResponse, Object};
use uuid::Uuid;

use crate::types::dto::common::Envelope;

/// Validated item returned to clients
#[derive(Object, Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Item identifier
    pub uuid: Uuid,

    /// Item message (10-255 characters)
    pub message: String,
}

#[derive(ApiResponse, Debug)]
pub enum CreateItemApiResponse {
    /// Item created, or rejected under the legacy validation policy
    #[oai(status = 200)]
    Ok(Json<Envelope<Item>>),

    /// Payload failed validation (strict validation policy)
    #[oai(status = 422)]
    UnprocessableEntity(Json<Envelope<Item>>),
}

impl CreateItemApiResponse {
    pub fn envelope(&self) -> &Envelope<Item> {
        match self {
            Self::Ok(json) | Self::UnprocessableEntity(json) => &json.0,
        }
    }
}

#[derive(ApiResponse, Debug)]
pub enum ListItemsApiResponse {
    /// Every stored item that passes the read schema, in insertion order
    #[oai(status = 200)]
    Ok(Json<Envelope<Vec<Item>>>),
}

impl ListItemsApiResponse {
    pub fn envelope(&self) -> &Envelope<Vec<Item>> {
        match self {
            Self::Ok(json) => &json.0,
        }
    }
}
