use super::types::{ElementRecord, SceneSnapshot};

const LABEL_MAX_CHARS: usize = 20;

/// Human-readable list of the clickable elements on screen
///
/// Example output:
/// ```text
/// Current screen: com.example (android.widget.FrameLayout)
/// 1. Sign in @ (540, 700)
/// 2. Forgot password @ (540, 820)
/// ... and 3 more
/// ```
pub fn format_clickable(snapshot: &SceneSnapshot, limit: usize) -> String {
    let mut lines = vec![format!(
        "Current screen: {} ({})",
        snapshot.package_name, snapshot.class_name
    )];

    let clickable: Vec<&ElementRecord> = snapshot.clickable().collect();

    for (i, element) in clickable.iter().take(limit).enumerate() {
        lines.push(format!("{}. {}", i + 1, format_element(element)));
    }

    if clickable.is_empty() {
        lines.push("  (no clickable elements found)".to_string());
    } else if clickable.len() > limit {
        lines.push(format!("... and {} more", clickable.len() - limit));
    }

    lines.join("\n")
}

/// Format a single element as `label @ (cx, cy)`
pub fn format_element(element: &ElementRecord) -> String {
    let label = element.label().unwrap_or("[no text]");
    format!(
        "{} @ ({}, {})",
        truncate_str(label, LABEL_MAX_CHARS),
        element.cx,
        element.cy
    )
}

/// Truncate to at most `max_chars` characters, adding "..." if truncated
fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessibility::types::Bounds;

    fn clickable(text: &str, desc: &str, bounds: Bounds) -> ElementRecord {
        let (cx, cy) = bounds.center();
        ElementRecord {
            text: text.to_string(),
            description: desc.to_string(),
            clickable: true,
            bounds,
            cx,
            cy,
            ..Default::default()
        }
    }

    #[test]
    fn test_format_element() {
        let element = clickable("Sign in", "", Bounds::new(40, 640, 1040, 760));
        assert_eq!(format_element(&element), "Sign in @ (540, 700)");

        let icon = clickable("", "Search", Bounds::new(0, 0, 10, 10));
        assert_eq!(format_element(&icon), "Search @ (5, 5)");

        let blank = clickable("", "", Bounds::new(0, 0, 10, 10));
        assert_eq!(format_element(&blank), "[no text] @ (5, 5)");
    }

    #[test]
    fn test_format_clickable_limit() {
        let snapshot = SceneSnapshot {
            package_name: "com.example".to_string(),
            class_name: "android.widget.FrameLayout".to_string(),
            elements: vec![
                ElementRecord::default(),
                clickable("One", "", Bounds::new(0, 0, 2, 2)),
                clickable("Two", "", Bounds::new(0, 0, 4, 4)),
                clickable("Three", "", Bounds::new(0, 0, 6, 6)),
            ],
        };

        let text = format_clickable(&snapshot, 2);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Current screen: com.example (android.widget.FrameLayout)",
                "1. One @ (1, 1)",
                "2. Two @ (2, 2)",
                "... and 1 more",
            ]
        );
    }

    #[test]
    fn test_format_clickable_empty() {
        let text = format_clickable(&SceneSnapshot::default(), 15);
        assert!(text.contains("no clickable elements"));
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("设置网络和互联网连接", 6), "设置网...");
    }
}
