use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// On-screen bounding rectangle in device pixels
///
/// Serialized on the wire as `"[left,top][right,bottom]"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Bounds {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Integer midpoint of the rectangle (truncating division)
    pub fn center(&self) -> (i32, i32) {
        (midpoint(self.left, self.right), midpoint(self.top, self.bottom))
    }
}

/// Summed in `i64`. The result lies between `a` and `b`, so the cast back is lossless.
fn midpoint(a: i32, b: i32) -> i32 {
    ((a as i64 + b as i64) / 2) as i32
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{}][{},{}]",
            self.left, self.top, self.right, self.bottom
        )
    }
}

impl FromStr for Bounds {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("invalid bounds: {}", s);

        let inner = s
            .trim()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(invalid)?;
        let (first, second) = inner.split_once("][").ok_or_else(invalid)?;

        let pair = |part: &str| -> Result<(i32, i32), String> {
            let (a, b) = part.split_once(',').ok_or_else(invalid)?;
            let a = a.trim().parse().map_err(|_| invalid())?;
            let b = b.trim().parse().map_err(|_| invalid())?;
            Ok((a, b))
        };

        let (left, top) = pair(first)?;
        let (right, bottom) = pair(second)?;
        Ok(Self::new(left, top, right, bottom))
    }
}

impl Serialize for Bounds {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Bounds {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Raw attributes reported by a live hierarchy node.
///
/// Every field is optional on the platform side; `ElementRecord::from_attributes`
/// fills the gaps with empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeAttributes {
    pub text: Option<String>,
    pub description: Option<String>,
    pub view_id: Option<String>,
    pub class_name: Option<String>,
    pub package_name: Option<String>,
    pub clickable: bool,
    pub scrollable: bool,
    pub bounds: Option<Bounds>,
}

/// One flattened element of the on-screen hierarchy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementRecord {
    /// Displayed text
    pub text: String,
    /// Accessibility content description
    #[serde(rename = "desc")]
    pub description: String,
    /// View resource identifier
    #[serde(rename = "id")]
    pub view_id: String,
    #[serde(rename = "class")]
    pub class_name: String,
    #[serde(rename = "package")]
    pub package_name: String,
    pub clickable: bool,
    pub scrollable: bool,
    pub bounds: Bounds,
    pub cx: i32,
    pub cy: i32,
}

impl ElementRecord {
    pub fn from_attributes(attributes: NodeAttributes) -> Self {
        let bounds = attributes.bounds.unwrap_or_default();
        let (cx, cy) = bounds.center();

        Self {
            text: attributes.text.unwrap_or_default(),
            description: attributes.description.unwrap_or_default(),
            view_id: attributes.view_id.unwrap_or_default(),
            class_name: attributes.class_name.unwrap_or_default(),
            package_name: attributes.package_name.unwrap_or_default(),
            clickable: attributes.clickable,
            scrollable: attributes.scrollable,
            bounds,
            cx,
            cy,
        }
    }

    /// Text if present, otherwise the content description
    pub fn label(&self) -> Option<&str> {
        [self.text.as_str(), self.description.as_str()]
            .into_iter()
            .find(|s| !s.is_empty())
    }

    pub fn matches_text(&self, needle: &str) -> bool {
        self.text.contains(needle) || self.description.contains(needle)
    }
}

/// Flattened capture of the active window
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    /// Package owning the root node
    #[serde(rename = "package", default)]
    pub package_name: String,
    /// Class of the root node
    #[serde(rename = "class", default)]
    pub class_name: String,
    #[serde(default)]
    pub elements: Vec<ElementRecord>,
}

impl SceneSnapshot {
    pub fn clickable(&self) -> impl Iterator<Item = &ElementRecord> {
        self.elements.iter().filter(|e| e.clickable)
    }

    pub fn find_by_text(&self, needle: &str) -> Option<&ElementRecord> {
        self.elements.iter().find(|e| e.matches_text(needle))
    }
}

/// System-level navigation commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlobalAction {
    Back,
    Home,
    /// Power key: wakes the screen or opens the power dialog
    Power,
}

impl GlobalAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Back => "back",
            Self::Home => "home",
            Self::Power => "power",
        }
    }
}
