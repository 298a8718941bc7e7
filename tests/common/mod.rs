#![allow(dead_code)]

use std::sync::Arc;

use accessibility_bridge::accessibility::{AutomationService, FixtureService};
use accessibility_bridge::api::{create_router, AppState};

pub const SETTINGS_SCREEN: &str = include_str!("../fixtures/settings_screen.json");

/// Serve the router on an ephemeral loopback port and return its base URL
pub async fn spawn_bridge(state: Arc<AppState>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_router(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Bridge backed by the settings fixture. Keep the returned service alive
/// for as long as the bridge should see it attached.
pub async fn spawn_with_fixture() -> (String, Arc<FixtureService>) {
    let fixture = Arc::new(FixtureService::from_json(SETTINGS_SCREEN).unwrap());
    let service: Arc<dyn AutomationService> = fixture.clone();
    let base = spawn_bridge(Arc::new(AppState::with_service(&service))).await;
    (base, fixture)
}

/// GET `path` and return the status code and JSON body
pub async fn get_json(base: &str, path: &str) -> (u16, serde_json::Value) {
    let response = reqwest::get(format!("{}{}", base, path)).await.unwrap();
    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "{} answered with content type {:?}",
        path,
        content_type
    );
    (status, response.json().await.unwrap())
}
