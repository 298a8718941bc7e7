use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("automation service not started")]
    ServiceNotStarted,

    /// Required query parameters absent or not integers. Lists every
    /// parameter the endpoint requires, not just the offending one.
    #[error("missing parameters: {0}")]
    MissingParameters(&'static str),

    #[error("no active window")]
    NoActiveWindow,

    #[error("unknown endpoint")]
    UnknownEndpoint,

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

impl BridgeError {
    pub fn status(&self) -> StatusCode {
        match self {
            BridgeError::ServiceNotStarted => StatusCode::SERVICE_UNAVAILABLE,
            BridgeError::MissingParameters(_) => StatusCode::BAD_REQUEST,
            BridgeError::UnknownEndpoint => StatusCode::NOT_FOUND,
            BridgeError::NoActiveWindow => StatusCode::INTERNAL_SERVER_ERROR,
            BridgeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for BridgeError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (self.status(), body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
