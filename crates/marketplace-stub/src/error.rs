//! Error bodies returned by the stub marketplace

use axum::{http::StatusCode, response::Json};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

pub type Rejection = (StatusCode, Json<ErrorResponse>);

pub fn error_to_status_code(error_code: &str) -> StatusCode {
    match error_code {
        "invalid_parameter" | "validation_error" | "malformed_body" => StatusCode::BAD_REQUEST,
        "item_not_found" => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ErrorResponse {
    pub fn new(error: &str, message: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            details: None,
        }
    }

    pub fn with_details(error: &str, message: &str, details: serde_json::Value) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            details: Some(details),
        }
    }

    pub fn malformed_body(reason: &str) -> Self {
        Self::with_details(
            "malformed_body",
            "Request body is not valid JSON",
            serde_json::json!({ "reason": reason }),
        )
    }

    pub fn validation_error(field: &str, message: &str) -> Self {
        Self::with_details(
            "validation_error",
            message,
            serde_json::json!({ "field": field }),
        )
    }

    pub fn invalid_parameter(param_name: &str, value: &str, message: &str) -> Self {
        Self::with_details(
            "invalid_parameter",
            message,
            serde_json::json!({ "parameter": param_name, "value": value }),
        )
    }

    pub fn item_not_found(id: &str) -> Self {
        Self::with_details(
            "item_not_found",
            &format!("Item '{id}' not found"),
            serde_json::json!({ "id": id }),
        )
    }

    /// Status code and JSON body pair for handler error returns.
    pub fn into_rejection(self) -> Rejection {
        (error_to_status_code(&self.error), Json(self))
    }
}
