//! Topic tree assembly
//!
//!     Three steps, in order: pick the root, group everything else under it by
//!     handle prefix, then rewrite handles to parent-relative segments.
//!
//!     Root selection is deterministic with an intentional asymmetry between
//!     its two branches: a reserved sentinel handle (`_`, `root`, `index`)
//!     always wins and the *last* sentinel in input order takes precedence,
//!     while the fallback picks the shortest handle with the *first*
//!     occurrence winning ties. Grouping and stripping both work on the raw
//!     handles; no handle is rewritten until the whole tree is placed.

use crate::almanac::ast::{Item, TopicNode};

/// Handles that force root selection regardless of length.
const ROOT_SENTINELS: [&str; 3] = ["_", "root", "index"];

/// Assemble topic records into a single-rooted tree.
///
/// Empty input yields an empty root node, not an error. The chosen root's
/// handle is cleared: the root has no addressable path segment.
pub fn build_topic_tree(mut items: Vec<Item>) -> TopicNode {
    if items.is_empty() {
        return TopicNode::default();
    }

    let mut root = TopicNode::new(items.remove(select_root(&items)));

    // Grouping must see the cleared handle so the empty prefix matches every
    // remaining record, but stripping rewrites level-one children against the
    // handle the root was selected under.
    let root_handle = std::mem::take(&mut root.item.handle);

    tree_sort(&mut root, &mut items);

    for child in &mut root.children {
        strip_node(&root_handle, child);
    }

    root
}

/// Index of the record that becomes the root.
fn select_root(items: &[Item]) -> usize {
    let mut shortest = 0;
    let mut sentinel = None;

    for (index, item) in items.iter().enumerate() {
        if item.handle.len() < items[shortest].handle.len() {
            shortest = index;
        }

        if ROOT_SENTINELS.contains(&item.handle.as_str()) {
            sentinel = Some(index);
        }
    }

    sentinel.unwrap_or(shortest)
}

/// Group the remaining pool under `node` by handle prefix.
///
/// The pool is partitioned against the node's handle: matching records are
/// sorted and become the node's subtree, the rest are handed back through the
/// pool for the caller's next sibling. The root's cleared handle prefixes
/// everything, so at the top level the whole pool groups.
fn tree_sort(node: &mut TopicNode, pool: &mut Vec<Item>) {
    let mut group = Vec::new();
    let mut nongroup = Vec::new();

    for item in pool.drain(..) {
        if item.handle.starts_with(node.handle()) {
            group.push(item);
        } else {
            nongroup.push(item);
        }
    }

    group.sort_by(|a, b| a.handle.cmp(&b.handle));

    while !group.is_empty() {
        let mut child = TopicNode::new(group.remove(0));
        tree_sort(&mut child, &mut group);
        node.children.push(child);
    }

    *pool = nongroup;
}

/// Rewrite a node's handle to its parent-relative segment.
///
/// Children are stripped before their parent so that every prefix test sees
/// the raw, pre-strip handles.
fn strip_node(parent_handle: &str, child: &mut TopicNode) {
    let own_handle = child.item.handle.clone();

    for grandchild in &mut child.children {
        strip_node(&own_handle, grandchild);
    }

    let stripped = child
        .item
        .handle
        .strip_prefix(parent_handle)
        .unwrap_or(&child.item.handle)
        .trim_matches('_')
        .to_string();

    child.item.handle = stripped;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handles(items: &[&str]) -> Vec<Item> {
        items
            .iter()
            .map(|handle| Item::topic(*handle).with_handle(*handle))
            .collect()
    }

    #[test]
    fn test_empty_input_yields_empty_root() {
        let root = build_topic_tree(Vec::new());
        assert!(root.title().is_empty());
        assert!(root.children.is_empty());
    }

    #[test]
    fn test_single_item_becomes_root_with_cleared_handle() {
        let root = build_topic_tree(handles(&["anything"]));
        assert_eq!(root.title(), "anything");
        assert_eq!(root.handle(), "");
        assert!(root.children.is_empty());
    }

    #[test]
    fn test_shortest_handle_becomes_root() {
        let root = build_topic_tree(handles(&["should_not_be_root", "b"]));
        assert_eq!(root.title(), "b");
    }

    #[test]
    fn test_first_shortest_wins_length_ties() {
        let root = build_topic_tree(handles(&["aa", "x", "y", "z"]));
        assert_eq!(root.title(), "x");
    }

    #[test]
    fn test_sentinel_beats_shorter_handles() {
        let root = build_topic_tree(handles(&["a", "b", "root"]));
        assert_eq!(root.title(), "root");
    }

    #[test]
    fn test_last_sentinel_wins() {
        let root = build_topic_tree(handles(&["index", "a", "root"]));
        assert_eq!(root.title(), "root");
    }

    #[test]
    fn test_prefix_grouping_and_stripping() {
        let root = build_topic_tree(handles(&[
            "a", "a_b_c", "a_b", "a_b_c_d", "a_c", "a_c_b",
        ]));

        assert_eq!(root.title(), "a");
        assert_eq!(root.children.len(), 2);

        let b = &root.children[0];
        assert_eq!(b.handle(), "b");
        assert_eq!(b.children.len(), 1);
        assert_eq!(b.children[0].handle(), "c");
        assert_eq!(b.children[0].children.len(), 1);
        assert_eq!(b.children[0].children[0].handle(), "d");

        let c = &root.children[1];
        assert_eq!(c.handle(), "c");
        assert_eq!(c.children.len(), 1);
        assert_eq!(c.children[0].handle(), "b");
    }

    #[test]
    fn test_sentinel_root_adopts_unrelated_handles() {
        let root = build_topic_tree(handles(&[
            "a", "a_b_c", "_", "a_b_c_d", "a_c", "a_c_b",
        ]));

        // The cleared sentinel handle prefixes everything, so the whole pool
        // groups under it, starting with "a".
        assert_eq!(root.title(), "_");
        assert_eq!(root.handle(), "");
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].handle(), "a");
    }

    #[test]
    fn test_duplicate_handles_nest_under_first() {
        let root = build_topic_tree(handles(&["a", "a_b", "a_b"]));
        assert_eq!(root.children.len(), 1);
        // Identical handles prefix-match, so the second "a_b" groups under the
        // first and strips down to nothing. Accepted, not rejected.
        assert_eq!(root.children[0].handle(), "b");
        assert_eq!(root.children[0].children.len(), 1);
        assert_eq!(root.children[0].children[0].handle(), "");
    }
}
