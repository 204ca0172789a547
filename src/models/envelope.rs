//! JSON envelope written back to the host on stdout.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Hook output: a single optional `message` field.
///
/// "Nothing to say" serializes as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookResponse {
    /// Message to surface, omitted when there is nothing to say.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HookResponse {
    /// An envelope with nothing to say.
    #[must_use]
    pub const fn empty() -> Self {
        Self { message: None }
    }

    /// An envelope carrying a message.
    #[must_use]
    pub fn message(text: impl Into<String>) -> Self {
        Self {
            message: Some(text.into()),
        }
    }

    /// Serializes the envelope to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::operation("serialize_response", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_envelope_is_empty_object() {
        assert_eq!(HookResponse::empty().to_json().unwrap(), "{}");
    }

    #[test]
    fn test_message_envelope() {
        let json = HookResponse::message("hello").to_json().unwrap();
        assert_eq!(json, r#"{"message":"hello"}"#);
    }
}
