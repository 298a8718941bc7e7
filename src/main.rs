use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use accessibility_bridge::accessibility::{AutomationService, FixtureService};
use accessibility_bridge::api::{create_router, AppState};
use accessibility_bridge::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load environment
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    let state = Arc::new(AppState::new());

    // The handle only holds a weak reference; keep the fixture alive here
    let _fixture: Option<Arc<dyn AutomationService>> = match &config.fixture_path {
        Some(path) => {
            let service: Arc<dyn AutomationService> = Arc::new(FixtureService::from_file(path)?);
            state.service.attach(&service).await;
            Some(service)
        }
        None => {
            tracing::warn!("No automation service attached; device commands will fail");
            None
        }
    };

    let app = create_router(state);

    let addr = config.socket_addr()?;
    tracing::info!("Accessibility bridge starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
