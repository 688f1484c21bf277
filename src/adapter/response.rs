use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const PROCESSING_FAILED: &str = "Failed to process request";

/// Proxy-integration result: a status code plus a JSON-encoded body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResult {
    pub status_code: u16,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessBody {
    pub query: String,
    pub generated_response: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl HttpResult {
    pub fn json<T: Serialize>(status: StatusCode, payload: &T) -> Self {
        let body = serde_json::to_string(payload)
            .unwrap_or_else(|_| format!(r#"{{"error":"{PROCESSING_FAILED}"}}"#));
        Self {
            status_code: status.as_u16(),
            body,
        }
    }

    pub fn ok(payload: &SuccessBody) -> Self {
        Self::json(StatusCode::OK, payload)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::json(
            StatusCode::BAD_REQUEST,
            &ErrorBody {
                error: message.into(),
                details: None,
            },
        )
    }

    pub fn internal_error(details: impl Into<String>) -> Self {
        Self::json(
            StatusCode::INTERNAL_SERVER_ERROR,
            &ErrorBody {
                error: PROCESSING_FAILED.to_string(),
                details: Some(details.into()),
            },
        )
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Parses the JSON body back into a value.
    pub fn body_json(&self) -> crate::Result<Value> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

impl IntoResponse for HttpResult {
    fn into_response(self) -> Response {
        (
            self.status(),
            [(header::CONTENT_TYPE, "application/json")],
            self.body,
        )
            .into_response()
    }
}
