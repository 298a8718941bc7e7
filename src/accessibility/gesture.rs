//! Timed touch strokes handed to the automation service

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Press-and-release time for a single tap
pub const TAP_DURATION: Duration = Duration::from_millis(100);

/// Swipe duration used when the caller does not supply one
pub const DEFAULT_SWIPE_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One finger's path. The path is traversed linearly over `duration`,
/// starting `start_time` after the gesture begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stroke {
    pub path: Vec<Point>,
    pub start_time: Duration,
    pub duration: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gesture {
    pub strokes: Vec<Stroke>,
}

impl Gesture {
    pub fn tap(at: Point) -> Self {
        Self {
            strokes: vec![Stroke {
                path: vec![at],
                start_time: Duration::ZERO,
                duration: TAP_DURATION,
            }],
        }
    }

    pub fn swipe(from: Point, to: Point, duration: Duration) -> Self {
        Self {
            strokes: vec![Stroke {
                path: vec![from, to],
                start_time: Duration::ZERO,
                duration,
            }],
        }
    }
}
