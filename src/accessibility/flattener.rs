use std::sync::Arc;

use super::provider::NodeRef;
use super::types::{ElementRecord, SceneSnapshot};

/// Flatten a hierarchy into pre-order element records.
///
/// A node is emitted before its children and children keep their index
/// order. Uses an explicit stack so deep trees cannot exhaust the thread
/// stack.
pub fn flatten(root: &NodeRef) -> Vec<ElementRecord> {
    let mut records = Vec::new();
    let mut pending: Vec<NodeRef> = vec![Arc::clone(root)];

    while let Some(node) = pending.pop() {
        records.push(ElementRecord::from_attributes(node.attributes()));

        // Reversed so the first child is popped next
        pending.extend(node.children().into_iter().rev());
    }

    records
}

/// Capture the hierarchy under `root` as a snapshot
pub fn capture_snapshot(root: &NodeRef) -> SceneSnapshot {
    let elements = flatten(root);
    let (package_name, class_name) = elements
        .first()
        .map(|e| (e.package_name.clone(), e.class_name.clone()))
        .unwrap_or_default();

    tracing::debug!(
        "Captured {} elements from {} ({})",
        elements.len(),
        package_name,
        class_name
    );

    SceneSnapshot {
        package_name,
        class_name,
        elements,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessibility::provider::AccessibilityNode;
    use crate::accessibility::types::{Bounds, NodeAttributes};

    struct TestNode {
        name: String,
        bounds: Bounds,
        children: Vec<NodeRef>,
    }

    impl AccessibilityNode for TestNode {
        fn attributes(&self) -> NodeAttributes {
            NodeAttributes {
                text: Some(self.name.clone()),
                package_name: Some("com.example".to_string()),
                class_name: Some("android.widget.FrameLayout".to_string()),
                bounds: Some(self.bounds),
                ..Default::default()
            }
        }

        fn children(&self) -> Vec<NodeRef> {
            self.children.clone()
        }
    }

    fn node(name: &str, children: Vec<NodeRef>) -> NodeRef {
        Arc::new(TestNode {
            name: name.to_string(),
            bounds: Bounds::new(0, 0, 3, 7),
            children,
        })
    }

    /// Deterministic tree where node `n` at depth `d` has `(n + d) % 4` children
    fn generated(depth: usize, seed: usize) -> NodeRef {
        let fanout = if depth == 0 { 0 } else { (seed + depth) % 4 };
        let children = (0..fanout)
            .map(|i| generated(depth - 1, seed * 3 + i))
            .collect();
        node(&format!("n{}", seed), children)
    }

    #[test]
    fn test_preorder() {
        let root = node(
            "root",
            vec![
                node("a", vec![node("a1", vec![]), node("a2", vec![])]),
                node("b", vec![]),
                node("c", vec![node("c1", vec![])]),
            ],
        );

        let names: Vec<String> = flatten(&root).into_iter().map(|r| r.text).collect();
        assert_eq!(names, vec!["root", "a", "a1", "a2", "b", "c", "c1"]);
    }

    #[test]
    fn test_single_node() {
        let root = node("only", vec![]);
        let records = flatten(&root);
        assert_eq!(records.len(), 1);
        assert_eq!((records[0].cx, records[0].cy), (1, 3));
    }

    #[test]
    fn test_length_is_one_plus_children() {
        fn check(n: &NodeRef) {
            let expected: usize = 1 + n.children().iter().map(|c| flatten(c).len()).sum::<usize>();
            assert_eq!(flatten(n).len(), expected);
            for child in n.children() {
                check(&child);
            }
        }

        for seed in 0..6 {
            check(&generated(5, seed));
        }
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let mut current = node("leaf", vec![]);
        for i in 0..50_000 {
            current = node(&format!("level{}", i), vec![current]);
        }
        assert_eq!(flatten(&current).len(), 50_001);

        // Unwind iteratively; dropping a deep Arc chain recursively would overflow
        let mut next = Some(current);
        while let Some(n) = next.take() {
            next = n.children().into_iter().next();
        }
    }

    #[test]
    fn test_snapshot_header_from_root() {
        let snapshot = capture_snapshot(&node("root", vec![node("child", vec![])]));
        assert_eq!(snapshot.package_name, "com.example");
        assert_eq!(snapshot.class_name, "android.widget.FrameLayout");
        assert_eq!(snapshot.elements.len(), 2);
    }
}
