//! Uniform response wrapper shared by every endpoint.
//!
//! Every business outcome is rendered as
//! `{"status": {"code", "description"}, "respObj", "error"}`. Success fills
//! `respObj` and leaves `error` null; failures do the opposite.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;

pub const CREATED: &str = "Created successfully";
pub const QUERIED: &str = "Query completed";
pub const PATCHED: &str = "Element patched successfully";
pub const REMOVED: &str = "Element removed";
pub const FAIL: &str = "Failed validation";
pub const TECHNICAL: &str = "Technical error";
pub const FATAL: &str = "Fatal error";

/// Sent when even the fatal envelope cannot be encoded.
const FATAL_BODY: &str =
    r#"{"status":{"code":409,"description":"Fatal error"},"respObj":null,"error":null}"#;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Caused by the caller's input.
    Functional,
    /// Caused by server-side processing.
    Technical,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorDetail {
    pub fn functional(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Functional,
            message: message.into(),
        }
    }

    pub fn technical(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Technical,
            message: message.into(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub code: u16,
    pub description: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub status: Status,
    pub resp_obj: Option<T>,
    pub error: Option<ErrorDetail>,
}

impl<T> Envelope<T> {
    pub fn success(code: StatusCode, description: impl Into<String>, resp_obj: Option<T>) -> Self {
        Self {
            status: Status {
                code: code.as_u16(),
                description: description.into(),
            },
            resp_obj,
            error: None,
        }
    }

    pub fn failure(code: StatusCode, description: impl Into<String>, error: ErrorDetail) -> Self {
        Self {
            status: Status {
                code: code.as_u16(),
                description: description.into(),
            },
            resp_obj: None,
            error: Some(error),
        }
    }

    /// Envelope for a request body that could not be decoded.
    pub fn decode_error(reason: impl Into<String>) -> Self {
        Self::failure(StatusCode::CONFLICT, FAIL, ErrorDetail::functional(reason))
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status.code).unwrap_or(StatusCode::CONFLICT)
    }
}

impl Envelope<()> {
    pub fn fatal(err: impl fmt::Display) -> Self {
        Self::failure(
            StatusCode::CONFLICT,
            FATAL,
            ErrorDetail::technical(err.to_string()),
        )
    }
}

/// Serializes an envelope, degrading to the fatal shape on failure.
pub fn encode<T: Serialize>(envelope: &Envelope<T>) -> (StatusCode, Vec<u8>) {
    match serde_json::to_vec(envelope) {
        Ok(body) => (envelope.status_code(), body),
        Err(err) => {
            tracing::error!("Json marshaling error - error: {}", err);
            let body = serde_json::to_vec(&Envelope::fatal(err))
                .unwrap_or_else(|_| FATAL_BODY.as_bytes().to_vec());
            (StatusCode::CONFLICT, body)
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let (status, body) = encode(&self);

        if status == StatusCode::NO_CONTENT {
            return status.into_response();
        }

        (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
    }
}
