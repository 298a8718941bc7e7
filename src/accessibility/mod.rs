//! Accessibility automation layer
//!
//! Everything the bridge knows about the device goes through the
//! `AutomationService` trait: reading the active window's hierarchy,
//! dispatching gestures, typing into the focused field and triggering
//! global navigation actions.
//!
//! ## Architecture
//!
//! - `AutomationService` / `AccessibilityNode` - Platform abstraction
//! - `ServiceHandle` - Weak registration slot for the running service
//! - `flattener` - Pre-order flattening of the hierarchy into `ElementRecord`s
//! - `FixtureService` - JSON-described synthetic screen
//!
//! ## Example
//!
//! ```rust,ignore
//! use accessibility_bridge::accessibility::{capture_snapshot, AutomationService};
//!
//! if let Some(root) = service.root_in_active_window().await? {
//!     let snapshot = capture_snapshot(&root);
//!     println!("{} elements", snapshot.elements.len());
//! }
//! ```

pub mod fixture;
pub mod flattener;
pub mod gesture;
pub mod provider;
pub mod serializer;
pub mod types;

// Re-export main types
pub use fixture::{FixtureNode, FixtureService, RecordedAction};
pub use flattener::{capture_snapshot, flatten};
pub use gesture::{Gesture, Point, Stroke, DEFAULT_SWIPE_DURATION, TAP_DURATION};
pub use provider::{AccessibilityNode, AutomationService, NodeRef, ServiceHandle};
pub use types::{Bounds, ElementRecord, GlobalAction, NodeAttributes, SceneSnapshot};
