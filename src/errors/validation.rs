use thiserror::Error;

/// Reasons an item payload or stored record fails the item schema
///
/// The `Display` strings are the client-facing messages carried by the
/// response envelope, so they must stay stable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    /// Payload is not a JSON object
    #[error("Input should be a valid dictionary")]
    NotAnObject,

    /// A required field is absent
    #[error("Field required")]
    MissingField { field: &'static str },

    /// `uuid` is present but not a string
    #[error("UUID input should be a string, bytes or UUID object")]
    UuidNotString,

    /// `uuid` is a string that does not parse as a UUID
    #[error("Input should be a valid UUID, {reason}")]
    InvalidUuid { reason: String },

    /// A string field holds a non-string value
    #[error("Input should be a valid string")]
    NotString { field: &'static str },

    /// `message` is below the minimum length
    #[error("String should have at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    /// `message` is above the maximum length
    #[error("String should have at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

impl ItemValidationError {
    /// Name of the field the error refers to, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::NotAnObject => None,
            Self::UuidNotString | Self::InvalidUuid { .. } => Some("uuid"),
            Self::MissingField { field }
            | Self::NotString { field }
            | Self::TooShort { field, .. }
            | Self::TooLong { field, .. } => Some(*field),
        }
    }

    /// Error text up to (not including) the first comma
    ///
    /// This is the text surfaced to clients when a create request is rejected.
    pub fn summary(&self) -> String {
        let full = self.to_string();
        match full.split_once(',') {
            Some((head, _)) => head.to_string(),
            None => full,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_truncates_at_first_comma() {
        let error = ItemValidationError::InvalidUuid {
            reason: "invalid character, found `n` at 1".to_string(),
        };

        assert_eq!(error.summary(), "Input should be a valid UUID");
    }

    #[test]
    fn test_summary_keeps_text_without_comma() {
        let error = ItemValidationError::TooShort { field: "message", min: 10 };

        assert_eq!(error.summary(), "String should have at least 10 characters");
    }

    #[test]
    fn test_uuid_not_string_summary() {
        assert_eq!(
            ItemValidationError::UuidNotString.summary(),
            "UUID input should be a string"
        );
    }

    #[test]
    fn test_field_names() {
        assert_eq!(ItemValidationError::NotAnObject.field(), None);
        assert_eq!(ItemValidationError::UuidNotString.field(), Some("uuid"));
        assert_eq!(
            ItemValidationError::MissingField { field: "message" }.field(),
            Some("message")
        );
        assert_eq!(
            ItemValidationError::TooLong { field: "message", max: 255 }.field(),
            Some("message")
        );
    }
}
