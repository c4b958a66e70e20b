//! Assembled documentation
//!
//!     The output of one documenting pass: a single-rooted topic tree and the
//!     glossary, an alphabetical flat list of term items. This is the value
//!     handed to a rendering sink.

use super::item::Item;
use super::topic::TopicNode;
use serde::{Deserialize, Serialize};

/// One assembled documentation set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Documentation {
    pub root_topic: TopicNode,
    /// Term items sorted ascending by title. Ties keep input order.
    pub glossary: Vec<Item>,
}

impl Documentation {
    pub fn new(root_topic: TopicNode, glossary: Vec<Item>) -> Self {
        Self {
            root_topic,
            glossary,
        }
    }

    /// True when nothing was extracted at all.
    pub fn is_empty(&self) -> bool {
        self.root_topic.item.title.is_empty()
            && self.root_topic.children.is_empty()
            && self.glossary.is_empty()
    }
}
