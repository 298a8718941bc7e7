//! Synthetic screen backed by a JSON description
//!
//! Stands in for the platform service in tests and when the bridge runs
//! without a device. Every command is recorded so callers can assert on what
//! reached the "device".

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use tokio::sync::Mutex;

use super::gesture::Gesture;
use super::provider::{AccessibilityNode, AutomationService, NodeRef};
use super::types::{Bounds, GlobalAction, NodeAttributes};

/// JSON description of one node.
///
/// ```json
/// { "class": "android.widget.EditText", "bounds": [0, 100, 1080, 200],
///   "editable": true, "focused": true, "children": [] }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureNode {
    pub text: Option<String>,
    pub desc: Option<String>,
    pub id: Option<String>,
    pub class: Option<String>,
    pub package: Option<String>,
    pub clickable: bool,
    pub scrollable: bool,
    pub editable: bool,
    pub focused: bool,
    /// `[left, top, right, bottom]`
    pub bounds: Option<[i32; 4]>,
    pub children: Vec<FixtureNode>,
}

impl FixtureNode {
    fn into_element(self) -> Arc<FixtureElement> {
        let attributes = NodeAttributes {
            text: self.text,
            description: self.desc,
            view_id: self.id,
            class_name: self.class,
            package_name: self.package,
            clickable: self.clickable,
            scrollable: self.scrollable,
            bounds: self.bounds.map(|[l, t, r, b]| Bounds::new(l, t, r, b)),
        };

        Arc::new(FixtureElement {
            attributes: RwLock::new(attributes),
            accepts_input: self.editable && self.focused,
            children: self.children.into_iter().map(Self::into_element).collect(),
        })
    }
}

/// Live node of a loaded fixture tree
#[derive(Debug)]
pub struct FixtureElement {
    attributes: RwLock<NodeAttributes>,
    accepts_input: bool,
    children: Vec<Arc<FixtureElement>>,
}

impl FixtureElement {
    /// First focused, editable node in pre-order
    fn find_input_focus(self: &Arc<Self>) -> Option<Arc<Self>> {
        if self.accepts_input {
            return Some(Arc::clone(self));
        }
        self.children.iter().find_map(|c| c.find_input_focus())
    }

    fn set_text(&self, text: &str) {
        let mut attributes = self
            .attributes
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        attributes.text = Some(text.to_string());
    }
}

impl AccessibilityNode for FixtureElement {
    fn attributes(&self) -> NodeAttributes {
        self.attributes
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn children(&self) -> Vec<NodeRef> {
        self.children
            .iter()
            .map(|c| Arc::clone(c) as NodeRef)
            .collect()
    }
}

/// A command that reached the fixture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedAction {
    Gesture(Gesture),
    SetText(String),
    GlobalAction(GlobalAction),
}

#[derive(Debug)]
pub struct FixtureService {
    root: Option<Arc<FixtureElement>>,
    /// Outcome reported for gestures and global actions
    accept: AtomicBool,
    actions: Mutex<Vec<RecordedAction>>,
}

impl FixtureService {
    pub fn new(root: Option<FixtureNode>) -> Self {
        Self {
            root: root.map(FixtureNode::into_element),
            accept: AtomicBool::new(true),
            actions: Mutex::new(Vec::new()),
        }
    }

    /// Service with no active window
    pub fn without_window() -> Self {
        Self::new(None)
    }

    /// Parse a fixture. `null` describes a device with no active window.
    pub fn from_json(json: &str) -> Result<Self> {
        let root: Option<FixtureNode> =
            serde_json::from_str(json).context("Invalid fixture JSON")?;
        Ok(Self::new(root))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture {}", path.display()))?;
        let service = Self::from_json(&json)?;
        tracing::info!("Loaded screen fixture from {}", path.display());
        Ok(service)
    }

    /// Make gestures and global actions report `accepted`
    pub fn set_accept(&self, accepted: bool) {
        self.accept.store(accepted, Ordering::Relaxed);
    }

    pub async fn actions(&self) -> Vec<RecordedAction> {
        self.actions.lock().await.clone()
    }

    async fn record(&self, action: RecordedAction) {
        tracing::debug!("Fixture received {:?}", action);
        self.actions.lock().await.push(action);
    }
}

#[async_trait]
impl AutomationService for FixtureService {
    async fn root_in_active_window(&self) -> Result<Option<NodeRef>> {
        Ok(self.root.as_ref().map(|r| Arc::clone(r) as NodeRef))
    }

    async fn dispatch_gesture(&self, gesture: &Gesture) -> Result<bool> {
        self.record(RecordedAction::Gesture(gesture.clone())).await;
        Ok(self.accept.load(Ordering::Relaxed))
    }

    async fn set_focused_text(&self, text: &str) -> Result<bool> {
        let Some(focus) = self.root.as_ref().and_then(|r| r.find_input_focus()) else {
            return Ok(false);
        };

        focus.set_text(text);
        self.record(RecordedAction::SetText(text.to_string())).await;
        Ok(true)
    }

    async fn perform_global_action(&self, action: GlobalAction) -> Result<bool> {
        self.record(RecordedAction::GlobalAction(action)).await;
        Ok(self.accept.load(Ordering::Relaxed))
    }
}
