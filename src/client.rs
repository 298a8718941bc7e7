//! HTTP client for a running bridge

use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::time::Duration;

use crate::accessibility::serializer;
use crate::accessibility::{ElementRecord, Point, SceneSnapshot};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Pause between repeated swipes so the screen can settle
const SWIPE_PAUSE: Duration = Duration::from_millis(300);

/// Screen size in pixels, used to place scroll swipes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: i32,
    pub height: i32,
}

impl ScreenSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Vertical swipe track: 60% across, between 35% and 65% of the height
    fn scroll_track(&self) -> (Point, Point) {
        let x = self.width * 3 / 5;
        (
            Point::new(x, self.height * 7 / 20),
            Point::new(x, self.height * 13 / 20),
        )
    }
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self::new(1080, 2340)
    }
}

pub struct BridgeClient {
    base_url: String,
    http: reqwest::Client,
}

impl BridgeClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Client for a bridge on this machine's default port
    pub fn local() -> Result<Self> {
        Self::new(DEFAULT_BASE_URL)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and return the JSON body. An `error` envelope becomes `Err`.
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        let status = response.status();
        let body: Value = response
            .json()
            .await
            .with_context(|| format!("Invalid JSON from {} ({})", url, status))?;

        if let Some(message) = body.get("error").and_then(Value::as_str) {
            return Err(anyhow!("{} failed ({}): {}", path, status, message));
        }

        Ok(body)
    }

    async fn command(&self, path: &str, query: &[(&str, String)]) -> Result<bool> {
        let body = self.get(path, query).await?;
        Ok(body.get("success").and_then(Value::as_bool).unwrap_or(false))
    }

    /// True if the bridge answers with `status: ok`
    pub async fn ping(&self) -> bool {
        match self.get("/ping", &[]).await {
            Ok(body) => body.get("status").and_then(Value::as_str) == Some("ok"),
            Err(e) => {
                tracing::debug!("Ping failed: {}", e);
                false
            }
        }
    }

    pub async fn dump(&self) -> Result<SceneSnapshot> {
        let body = self.get("/dump", &[]).await?;
        serde_json::from_value(body).context("Malformed scene snapshot")
    }

    pub async fn tap(&self, x: i32, y: i32) -> Result<bool> {
        self.command("/tap", &[("x", x.to_string()), ("y", y.to_string())])
            .await
    }

    pub async fn swipe(&self, from: Point, to: Point, duration: Duration) -> Result<bool> {
        self.command(
            "/swipe",
            &[
                ("x1", from.x.to_string()),
                ("y1", from.y.to_string()),
                ("x2", to.x.to_string()),
                ("y2", to.y.to_string()),
                ("duration", duration.as_millis().to_string()),
            ],
        )
        .await
    }

    /// Type into the focused input field. `Ok(false)` if nothing is focused.
    pub async fn input_text(&self, text: &str) -> Result<bool> {
        self.command("/input", &[("text", text.to_string())]).await
    }

    pub async fn back(&self) -> Result<bool> {
        self.command("/back", &[]).await
    }

    pub async fn home(&self) -> Result<bool> {
        self.command("/home", &[]).await
    }

    pub async fn wake(&self) -> Result<bool> {
        self.command("/wake", &[]).await
    }

    /// First element whose text or description contains `needle`
    pub async fn find_by_text(&self, needle: &str) -> Result<Option<ElementRecord>> {
        Ok(self.dump().await?.find_by_text(needle).cloned())
    }

    /// Tap the center of the first element matching `needle`.
    /// `Ok(false)` if no element matches.
    pub async fn tap_text(&self, needle: &str) -> Result<bool> {
        match self.find_by_text(needle).await? {
            Some(element) => {
                tracing::debug!("Tapping '{}' at ({}, {})", needle, element.cx, element.cy);
                self.tap(element.cx, element.cy).await
            }
            None => {
                tracing::debug!("No element matching '{}'", needle);
                Ok(false)
            }
        }
    }

    /// Scroll content up (finger moves bottom to top) `times` times
    pub async fn swipe_up(
        &self,
        screen: ScreenSize,
        times: u32,
        duration: Duration,
    ) -> Result<bool> {
        let (upper, lower) = screen.scroll_track();
        self.repeat_swipe(lower, upper, times, duration).await
    }

    /// Scroll content down (finger moves top to bottom) `times` times
    pub async fn swipe_down(
        &self,
        screen: ScreenSize,
        times: u32,
        duration: Duration,
    ) -> Result<bool> {
        let (upper, lower) = screen.scroll_track();
        self.repeat_swipe(upper, lower, times, duration).await
    }

    async fn repeat_swipe(
        &self,
        from: Point,
        to: Point,
        times: u32,
        duration: Duration,
    ) -> Result<bool> {
        for i in 0..times {
            if i > 0 {
                tokio::time::sleep(SWIPE_PAUSE).await;
            }
            if !self.swipe(from, to, duration).await? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Clickable elements as numbered `label @ (cx, cy)` lines
    pub async fn clickable_summary(&self, limit: usize) -> Result<String> {
        let snapshot = self.dump().await?;
        Ok(serializer::format_clickable(&snapshot, limit))
    }
}
