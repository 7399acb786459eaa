use serde::{Deserialize, Serialize};

/// Wrapper every backend response is delivered in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub payload: T,
}

/// Error bodies only carry the message, the payload may be missing entirely.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Returns the backend message as sent, ignoring blank ones.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_without_message() {
        let r: ApiResponse<serde_json::Value> =
            serde_json::from_value(json!({"statusCode": 200, "payload": {"a": 1}})).unwrap();
        assert_eq!(r.status_code, 200);
        assert_eq!(r.message, None);
        assert_eq!(r.payload["a"], 1);
    }

    #[test]
    fn error_body_ignores_blank_message() {
        let b: ErrorBody = serde_json::from_str(r#"{"message": "  "}"#).unwrap();
        assert_eq!(b.message(), None);
        let b: ErrorBody = serde_json::from_str(r#"{"message": "disk full"}"#).unwrap();
        assert_eq!(b.message(), Some("disk full"));
        let b: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(b.message(), None);
    }

    #[test]
    fn error_body_message_is_verbatim() {
        let b: ErrorBody = serde_json::from_str(r#"{"message": "  disk full \n"}"#).unwrap();
        assert_eq!(b.message(), Some("  disk full \n"));
    }
}
