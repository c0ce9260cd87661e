//! Response envelopes.
//!
//! Every API answer has one of two shapes:
//! ```text
//! {"success": true,  "message": "...", "data": <any>}
//! {"success": false, "error":   "...", "data": null}
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Successful envelope body.
#[derive(Debug, Serialize)]
pub struct SuccessBody<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

/// Failed envelope body. `data` is always `null`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
    pub data: Option<()>,
}

/// A `200 OK` success envelope.
#[derive(Debug)]
pub struct ApiResponse<T>(pub SuccessBody<T>);

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self(SuccessBody {
            success: true,
            message: message.into(),
            data,
        })
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self.0)).into_response()
    }
}

/// Build an error envelope with the given status.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ErrorBody {
        success: false,
        error: message.into(),
        data: None,
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelopes_serialize_to_contract() {
        let ok = ApiResponse::new(json!({"data": []}), "No universities found matching 'x'");
        assert_eq!(
            serde_json::to_value(&ok.0).unwrap(),
            json!({"success": true, "message": "No universities found matching 'x'", "data": {"data": []}})
        );

        let err = ErrorBody {
            success: false,
            error: "University not found".into(),
            data: None,
        };
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({"success": false, "error": "University not found", "data": null})
        );
    }

    #[test]
    fn error_response_carries_status() {
        let response = error_response(StatusCode::NOT_FOUND, "Endpoint not found");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
