use std::fmt;
use std::str::FromStr;

/// How a rejected create request is reported to the client
///
/// `Legacy` keeps the historical client contract: status 200 and an envelope
/// built by the success constructor, so `is_success` is `true` even though the
/// message describes a validation failure. `Strict` answers 422 with an error
/// envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationFailurePolicy {
    #[default]
    Legacy,
    Strict,
}

impl ValidationFailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for ValidationFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "strict" => Ok(Self::Strict),
            other => Err(other.to_string()),
        }
    }
}
