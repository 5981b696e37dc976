//! Uniform response envelope

use serde::{Deserialize, Serialize};

/// Outcome marker for the response envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Response envelope wrapping every API body
///
/// `data` carries the payload on success; `error` carries the detail on
/// failure. Whichever side is absent is omitted from the JSON entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Success envelope with a payload
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data: Some(data),
            error: None,
        }
    }

    /// Success envelope without a payload
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.into(),
            data: None,
            error: None,
        }
    }

    /// Failure envelope with an error detail
    pub fn failure(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
            data: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_success_envelope_omits_error() {
        let envelope = ApiResponse::success("User retrieved successfully", json!({"id": 1}));
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["status"], "success");
        assert_eq!(value["message"], "User retrieved successfully");
        assert_eq!(value["data"]["id"], 1);
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_failure_envelope_omits_data() {
        let envelope: ApiResponse<Value> =
            ApiResponse::failure("Resource not found", "User not found");
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["status"], "error");
        assert_eq!(value["error"], "User not found");
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_message_only_envelope() {
        let envelope: ApiResponse<Value> = ApiResponse::message_only("User deleted successfully");
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["status"], "success");
        assert!(value.get("data").is_none());
        assert!(value.get("error").is_none());
    }
}
