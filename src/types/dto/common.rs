use poem_openapi::types::{ParseFromJSON, ToJSON};
use poem_openapi::Object;

pub const DEFAULT_SUCCESS_MESSAGE: &str = "Success";
pub const DEFAULT_ERROR_MESSAGE: &str = "Error";

/// Uniform response wrapper returned by every item endpoint
///
/// `data` is serialized as `null` when absent.
#[derive(Object, Debug, Clone, PartialEq)]
pub struct Envelope<T: ParseFromJSON + ToJSON> {
    /// Human-readable outcome message
    pub message: String,

    /// Whether the operation succeeded
    pub is_success: bool,

    /// Operation result, if any
    pub data: Option<T>,
}

impl<T: ParseFromJSON + ToJSON> Envelope<T> {
    /// Build an envelope with `is_success = true`
    pub fn success(message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            message: message.into(),
            is_success: true,
            data,
        }
    }

    /// Build an envelope with `is_success = false` and no data
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_success: false,
            data: None,
        }
    }

    pub fn success_default() -> Self {
        Self::success(DEFAULT_SUCCESS_MESSAGE, None)
    }

    pub fn error_default() -> Self {
        Self::error(DEFAULT_ERROR_MESSAGE)
    }
}
