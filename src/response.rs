//! Pretty-printed JSON responses and the small bodies shared by handlers.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON response rendered with indentation and a trailing newline.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec_pretty(&self.0) {
            Ok(mut body) => {
                body.push(b'\n');
                (
                    [(
                        header::CONTENT_TYPE,
                        HeaderValue::from_static("application/json"),
                    )],
                    body,
                )
                    .into_response()
            }
            Err(err) => {
                tracing::error!(error = %err, "response serialization failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(
                        header::CONTENT_TYPE,
                        HeaderValue::from_static("text/plain; charset=utf-8"),
                    )],
                    err.to_string(),
                )
                    .into_response()
            }
        }
    }
}

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Serialize, Debug)]
pub struct MessageBody {
    pub message: String,
}

pub fn success_ok<T: Serialize>(data: T) -> (StatusCode, PrettyJson<T>) {
    (StatusCode::OK, PrettyJson(data))
}

pub fn success_created<T: Serialize>(data: T) -> (StatusCode, PrettyJson<T>) {
    (StatusCode::CREATED, PrettyJson(data))
}

pub fn success_message(message: &str) -> (StatusCode, PrettyJson<MessageBody>) {
    (
        StatusCode::OK,
        PrettyJson(MessageBody {
            message: message.to_string(),
        }),
    )
}
