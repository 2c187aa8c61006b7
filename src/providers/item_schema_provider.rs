use serde_json::{Map, Value};
use uuid::Uuid;

use crate::errors::ItemValidationError;
use crate::types::dto::Item;
use crate::types::internal::ItemRecord;

pub const MESSAGE_MIN_LENGTH: usize = 10;
pub const MESSAGE_MAX_LENGTH: usize = 255;

/// Item schema shared by the create (write) and list (read) paths
///
/// Fields are checked in declaration order, `uuid` before `message`, and the
/// first failure is returned. Message length counts characters, not bytes.
#[derive(Debug, Clone)]
pub struct ItemSchemaProvider {
    min_length: usize,
    max_length: usize,
}

impl Default for ItemSchemaProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemSchemaProvider {
    /// Create a schema with the 10-255 character message bounds
    pub fn new() -> Self {
        Self {
            min_length: MESSAGE_MIN_LENGTH,
            max_length: MESSAGE_MAX_LENGTH,
        }
    }

    /// Validate an untyped create payload against the write schema
    ///
    /// Unknown fields are ignored.
    ///
    /// # Returns
    /// * `Ok(Item)` - Payload is a valid item
    /// * `Err(ItemValidationError)` - First schema violation found
    pub fn validate_payload(&self, payload: &Value) -> Result<Item, ItemValidationError> {
        let object = payload.as_object().ok_or(ItemValidationError::NotAnObject)?;

        let uuid = match Self::field(object, "uuid")? {
            Value::String(raw) => Self::parse_uuid(raw)?,
            _ => return Err(ItemValidationError::UuidNotString),
        };

        let message = match Self::field(object, "message")? {
            Value::String(raw) => self.check_message(raw)?,
            _ => return Err(ItemValidationError::NotString { field: "message" }),
        };

        Ok(Item { uuid, message })
    }

    /// Re-validate a stored record against the read schema
    pub fn validate_record(&self, record: &ItemRecord) -> Result<Item, ItemValidationError> {
        let uuid = Self::parse_uuid(&record.uuid)?;
        let message = self.check_message(&record.message)?;

        Ok(Item { uuid, message })
    }

    fn field<'a>(object: &'a Map<String, Value>, name: &'static str) -> Result<&'a Value, ItemValidationError> {
        object
            .get(name)
            .ok_or(ItemValidationError::MissingField { field: name })
    }

    fn parse_uuid(raw: &str) -> Result<Uuid, ItemValidationError> {
        Uuid::parse_str(raw).map_err(|e| ItemValidationError::InvalidUuid {
            reason: e.to_string(),
        })
    }

    fn check_message(&self, raw: &str) -> Result<String, ItemValidationError> {
        let length = raw.chars().count();
        if length < self.min_length {
            return Err(ItemValidationError::TooShort {
                field: "message",
                min: self.min_length,
            });
        }
        if length > self.max_length {
            return Err(ItemValidationError::TooLong {
                field: "message",
                max: self.max_length,
            });
        }
        Ok(raw.to_string())
    }
}
