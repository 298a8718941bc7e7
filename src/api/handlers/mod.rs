pub mod gestures;
pub mod health;
pub mod input;
pub mod navigation;
pub mod screen;

use anyhow::anyhow;
use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use std::any::Any;

use crate::error::BridgeError;

/// Fallback for every path outside the route table
pub async fn unknown_endpoint(uri: Uri) -> BridgeError {
    tracing::debug!("Unknown endpoint: {}", uri.path());
    BridgeError::UnknownEndpoint
}

/// Turn a panic that escaped a handler into a 500 error envelope
pub fn handler_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!("Handler panicked: {}", message);
    BridgeError::Internal(anyhow!("Handler panicked: {}", message)).into_response()
}
