//! Example usage of the almanac core
//!
//! This demonstrates itemizing marker-tagged text, declaring entries with
//! marks, and running a documenting pass over an in-memory source.

use almanac_parser::almanac::ast::Item;
use almanac_parser::almanac::documenting::{Documenter, Source, SourceError};
use almanac_parser::almanac::itemizing::itemize;
use almanac_parser::almanac::mark::{self, TopicMark};

/// Connection pooling keeps a warm set of upstream sockets.
static POOLING: TopicMark = mark::topic("Connection Pooling");

struct TextSource(&'static str);

impl Source for TextSource {
    fn produce(&self) -> Result<Vec<Item>, SourceError> {
        Ok(itemize("demo-text", self.0))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Itemizing ===");
    let items = itemize(
        "inline",
        "Topic: Demo\nThe root topic.\n\nTopic: Demo Details\nA nested topic.\n",
    );
    for item in &items {
        println!("  - {}", item);
    }
    println!();

    println!("=== Declaration marks ===");
    println!("  static POOLING declares topic '{}'", POOLING.title());
    println!();

    println!("=== Documenting ===");
    let documentation = Documenter::new()
        .with_source(TextSource(
            "Topic: Demo\nWelcome.\n\nTerm: Handle\nA normalized identifier.\n",
        ))
        .with_source(TextSource("Topic: Demo Usage\nHow to run.\n"))
        .document()?;

    println!("  root: {}", documentation.root_topic);
    for child in documentation.root_topic.iter_children() {
        println!("    child: {}", child);
    }
    for term in &documentation.glossary {
        println!("  glossary: {}", term);
    }

    Ok(())
}
