//! Topic tree nodes
//!
//!     A topic node is an item plus its ordered children. The tree has exactly
//!     one root; the root's handle is cleared during assembly (the root has no
//!     addressable path segment), and every other node's handle is rewritten to
//!     the segment relative to its parent once placement is final.

use super::item::Item;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A node in the assembled topic hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TopicNode {
    pub item: Item,
    pub children: Vec<TopicNode>,
}

impl TopicNode {
    pub fn new(item: Item) -> Self {
        Self {
            item,
            children: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.item.title
    }

    pub fn handle(&self) -> &str {
        &self.item.handle
    }

    /// Iterate over immediate children in placement order.
    pub fn iter_children(&self) -> std::slice::Iter<'_, TopicNode> {
        self.children.iter()
    }

    /// Iterate all nodes in the tree, this node included (depth-first pre-order).
    pub fn iter_topics_recursive(&self) -> Box<dyn Iterator<Item = &TopicNode> + '_> {
        Box::new(
            std::iter::once(self).chain(
                self.children
                    .iter()
                    .flat_map(|child| child.iter_topics_recursive()),
            ),
        )
    }

    /// Find an immediate child by its (parent-relative) handle.
    ///
    /// Sibling handles may collide; the first placed child wins.
    pub fn find_child(&self, handle: &str) -> Option<&TopicNode> {
        self.children.iter().find(|child| child.handle() == handle)
    }

    /// Count all nodes in the tree, this node included.
    pub fn count_topics(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(TopicNode::count_topics)
            .sum::<usize>()
    }
}

impl From<Item> for TopicNode {
    fn from(item: Item) -> Self {
        Self::new(item)
    }
}

impl fmt::Display for TopicNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Topic('{}', {} children)",
            self.item.title,
            self.children.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> TopicNode {
        let mut root = TopicNode::new(Item::topic("Root"));
        let mut guide = TopicNode::new(Item::topic("Guide"));
        guide.children.push(TopicNode::new(Item::topic("Setup")));
        root.children.push(guide);
        root.children.push(TopicNode::new(Item::topic("Reference")));
        root
    }

    #[test]
    fn test_recursive_iteration_is_preorder() {
        let root = sample_tree();
        let titles: Vec<_> = root
            .iter_topics_recursive()
            .map(|node| node.title())
            .collect();
        assert_eq!(titles, vec!["Root", "Guide", "Setup", "Reference"]);
    }

    #[test]
    fn test_find_child_by_handle() {
        let root = sample_tree();
        assert_eq!(root.find_child("guide").unwrap().title(), "Guide");
        assert!(root.find_child("missing").is_none());
    }

    #[test]
    fn test_count_topics() {
        assert_eq!(sample_tree().count_topics(), 4);
    }
}
