//! Documenting module
//!
//!     The documenter is the orchestration seam: it owns an ordered list of
//!     record sources, drains them strictly sequentially, and hands the merged
//!     record collection to assembly. The first source failure aborts the pass
//!     and propagates unchanged; there is no partial document and no retry.
//!
//!     Sources and sinks are single-method capability traits so new kinds can
//!     be added without touching this crate. The concrete filesystem sources
//!     and the HTML sink live in `almanac-publish`.

use crate::almanac::assembling;
use crate::almanac::ast::{Documentation, Item};

/// Errors crossing the source/sink boundary.
///
/// Collaborators own their error types; this crate only moves them through,
/// verbatim.
pub type SourceError = Box<dyn std::error::Error + Send + Sync>;

/// A producer of flat records.
pub trait Source {
    /// Produce this source's records, in emission order.
    fn produce(&self) -> Result<Vec<Item>, SourceError>;
}

/// A consumer of assembled documentation.
pub trait Sink {
    /// Render the documentation into whatever artifact this sink produces.
    fn render(&self, documentation: &Documentation) -> Result<(), SourceError>;
}

/// Drives sources in order and assembles their merged output.
pub struct Documenter {
    sources: Vec<Box<dyn Source>>,
}

impl Documenter {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
        }
    }

    /// Append a source. Sources run in the order they were added.
    pub fn with_source(mut self, source: impl Source + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Append an already boxed source.
    pub fn with_boxed_source(mut self, source: Box<dyn Source>) -> Self {
        self.sources.push(source);
        self
    }

    /// Run every source and assemble the merged records.
    ///
    /// Record order is source order, then per-source emission order. The
    /// assembler never sees any records when a source fails.
    pub fn document(&self) -> Result<Documentation, SourceError> {
        let mut items = Vec::new();

        for source in &self.sources {
            items.extend(source.produce()?);
        }

        Ok(assembling::sort(items))
    }
}

impl Default for Documenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::almanac::ast::ItemKind;

    struct StaticSource(Vec<Item>);

    impl Source for StaticSource {
        fn produce(&self) -> Result<Vec<Item>, SourceError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource(&'static str);

    impl Source for FailingSource {
        fn produce(&self) -> Result<Vec<Item>, SourceError> {
            Err(self.0.into())
        }
    }

    #[test]
    fn test_documents_merged_sources_in_order() {
        let documenter = Documenter::new()
            .with_source(StaticSource(vec![Item::topic("guide")]))
            .with_source(StaticSource(vec![
                Item::topic("guide setup"),
                Item::term("cache"),
            ]));

        let doc = documenter.document().unwrap();
        assert_eq!(doc.root_topic.title(), "guide");
        assert_eq!(doc.root_topic.children.len(), 1);
        assert_eq!(doc.glossary.len(), 1);
        assert_eq!(doc.glossary[0].kind, ItemKind::Term);
    }

    #[test]
    fn test_first_source_error_aborts() {
        let documenter = Documenter::new()
            .with_source(FailingSource("disk on fire"))
            .with_source(StaticSource(vec![Item::topic("never produced")]));

        let err = documenter.document().unwrap_err();
        assert_eq!(err.to_string(), "disk on fire");
    }

    #[test]
    fn test_empty_documenter_documents_nothing() {
        let doc = Documenter::new().document().unwrap();
        assert!(doc.is_empty());
    }
}
