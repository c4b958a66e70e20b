//! Integration tests for tree assembly
//!
//! Covers root selection (sentinels vs shortest handle), prefix grouping,
//! handle stripping, and glossary ordering over realistic record sets.

use almanac_parser::almanac::assembling::{build_glossary, build_topic_tree, sort};
use almanac_parser::almanac::ast::{Item, TopicNode};
use almanac_parser::almanac::itemizing::itemize;

fn topic_with_handle(handle: &str) -> Item {
    Item::topic(handle).with_handle(handle)
}

/// Collect (depth, handle) pairs in pre-order for terse tree shape checks.
fn shape(node: &TopicNode) -> Vec<(usize, String)> {
    fn walk(node: &TopicNode, depth: usize, out: &mut Vec<(usize, String)>) {
        out.push((depth, node.handle().to_string()));
        for child in node.iter_children() {
            walk(child, depth + 1, out);
        }
    }

    let mut out = Vec::new();
    walk(node, 0, &mut out);
    out
}

#[test]
fn test_underscore_separated_handles_build_expected_tree() {
    let root = build_topic_tree(
        ["a", "a_b_c", "a_b", "a_b_c_d", "a_c", "a_c_b"]
            .into_iter()
            .map(topic_with_handle)
            .collect(),
    );

    assert_eq!(root.title(), "a");
    assert_eq!(
        shape(&root),
        vec![
            (0, "".to_string()),
            (1, "b".to_string()),
            (2, "c".to_string()),
            (3, "d".to_string()),
            (1, "c".to_string()),
            (2, "b".to_string()),
        ]
    );
}

#[test]
fn test_unseparated_handles_build_the_same_shape() {
    let root = build_topic_tree(
        ["a", "abc", "ab", "abcd", "ac", "acb"]
            .into_iter()
            .map(topic_with_handle)
            .collect(),
    );

    assert_eq!(
        shape(&root),
        vec![
            (0, "".to_string()),
            (1, "b".to_string()),
            (2, "c".to_string()),
            (3, "d".to_string()),
            (1, "c".to_string()),
            (2, "b".to_string()),
        ]
    );
}

#[test]
fn test_sentinel_forces_root_over_shorter_handles() {
    let root = build_topic_tree(
        ["a", "a_b_c", "_", "a_b_c_d", "a_c", "a_c_b"]
            .into_iter()
            .map(topic_with_handle)
            .collect(),
    );

    assert_eq!(root.title(), "_");
    assert_eq!(root.handle(), "");

    // Everything else regroups under the sentinel, "a" first.
    assert_eq!(root.children.len(), 1);
    let a = &root.children[0];
    assert_eq!(a.handle(), "a");
    assert_eq!(a.children.len(), 2);
}

#[test]
fn test_assembly_from_itemized_text_end_to_end() {
    let text = "\
Topic: Almanac
Welcome.

Topic: Almanac Usage
How to run it.

Topic: Almanac Usage Flags
Every flag.

Term: Handle
A normalized identifier.

Term: Glossary
This list.
";

    let doc = sort(itemize("guide.md", text));

    assert_eq!(doc.root_topic.title(), "Almanac");
    assert_eq!(doc.root_topic.handle(), "");
    assert_eq!(doc.root_topic.children.len(), 1);

    let usage = &doc.root_topic.children[0];
    assert_eq!(usage.title(), "Almanac Usage");
    assert_eq!(usage.handle(), "usage");
    assert_eq!(usage.children.len(), 1);
    assert_eq!(usage.children[0].handle(), "flags");

    let titles: Vec<_> = doc.glossary.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Glossary", "Handle"]);
}

#[test]
fn test_glossary_ignores_handles_and_input_order() {
    let glossary = build_glossary(vec![
        Item::term("c").with_handle("1"),
        Item::term("a").with_handle("9"),
        Item::term("b").with_handle("5"),
    ]);

    let titles: Vec<_> = glossary.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "b", "c"]);
}

#[test]
fn test_empty_collection_assembles_to_empty_documentation() {
    let doc = sort(Vec::new());
    assert!(doc.root_topic.title().is_empty());
    assert!(doc.root_topic.children.is_empty());
    assert!(doc.glossary.is_empty());
}
