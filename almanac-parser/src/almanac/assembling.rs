//! Assembling module
//!
//!     Assembling consumes the full flat record collection merged from every
//!     source and produces the two output shapes: a single-rooted topic tree
//!     and the glossary. The hierarchy is not stored anywhere in the input —
//!     it is reconstructed from the records' prefix-encoded handles.
//!
//!     Both entry points are total. Empty input, empty handles, duplicate
//!     handles: all of it assembles into something structurally valid. Content
//!     correctness belongs to the author of the source text, not to this code.

pub mod glossary;
pub mod topic_tree;

pub use glossary::build_glossary;
pub use topic_tree::build_topic_tree;

use crate::almanac::ast::{Documentation, Item, ItemKind};

/// Split records by kind and assemble both output shapes.
pub fn sort(items: Vec<Item>) -> Documentation {
    let (topics, terms): (Vec<Item>, Vec<Item>) = items
        .into_iter()
        .partition(|item| item.kind == ItemKind::Topic);

    Documentation::new(build_topic_tree(topics), build_glossary(terms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_splits_by_kind() {
        let doc = sort(vec![
            Item::topic("guide"),
            Item::term("cache"),
            Item::topic("guide intro"),
        ]);

        assert_eq!(doc.root_topic.title(), "guide");
        assert_eq!(doc.root_topic.children.len(), 1);
        assert_eq!(doc.glossary.len(), 1);
        assert_eq!(doc.glossary[0].title, "cache");
    }

    #[test]
    fn test_sort_of_nothing_is_empty() {
        let doc = sort(Vec::new());
        assert!(doc.is_empty());
    }
}
