use axum::{routing::any, Router};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{
    gestures, handler_panic, health, input, navigation, screen, unknown_endpoint,
};
use super::state::AppState;

/// Build the command router.
///
/// Paths match exactly: `/tap/` is not `/tap` and lands in the fallback.
/// Every method is accepted; parameters come from the query string only.
/// A panicking handler still answers with a 500 error envelope.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ping", any(health::ping))
        .route("/dump", any(screen::dump))
        .route("/tap", any(gestures::tap))
        .route("/swipe", any(gestures::swipe))
        .route("/input", any(input::input_text))
        .route("/back", any(navigation::back))
        .route("/home", any(navigation::home))
        .route("/wake", any(navigation::wake))
        .fallback(unknown_endpoint)
        .layer(CatchPanicLayer::custom(handler_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
