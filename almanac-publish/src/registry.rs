//! Source registry for discovery and by-name construction
//!
//!     Shells select sources by name ("markdown", "rust"); the registry maps
//!     those names to factories that build a source rooted at a directory.

use crate::error::PublishError;
use crate::sources::markdown::MarkdownSource;
use crate::sources::rust::RustSource;
use almanac_parser::almanac::documenting::Source;
use std::collections::BTreeMap;
use std::path::Path;

type SourceFactory = Box<dyn Fn(&Path) -> Box<dyn Source> + Send + Sync>;

/// A registered source's listing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInfo {
    pub name: String,
    pub description: String,
}

/// Registry of record sources.
pub struct SourceRegistry {
    factories: BTreeMap<String, (String, SourceFactory)>,
}

impl SourceRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        SourceRegistry {
            factories: BTreeMap::new(),
        }
    }

    /// Create a registry with the built-in sources.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register("markdown", "Markdown files (.md, .markdown)", |root| {
            Box::new(MarkdownSource::new(root))
        });
        registry.register("rust", "Rust source comments and declaration marks", |root| {
            Box::new(RustSource::new(root))
        });

        registry
    }

    /// Register a source factory.
    ///
    /// If a source with the same name already exists, it will be replaced.
    pub fn register<F>(&mut self, name: &str, description: &str, factory: F)
    where
        F: Fn(&Path) -> Box<dyn Source> + Send + Sync + 'static,
    {
        self.factories.insert(
            name.to_string(),
            (description.to_string(), Box::new(factory)),
        );
    }

    /// Check if a source exists.
    pub fn has(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Build the named source rooted at `root`.
    pub fn create(&self, name: &str, root: &Path) -> Result<Box<dyn Source>, PublishError> {
        self.factories
            .get(name)
            .map(|(_, factory)| factory(root))
            .ok_or_else(|| PublishError::UnknownSource(name.to_string()))
    }

    /// List all registered sources, sorted by name.
    pub fn list_sources(&self) -> Vec<SourceInfo> {
        self.factories
            .iter()
            .map(|(name, (description, _))| SourceInfo {
                name: name.clone(),
                description: description.clone(),
            })
            .collect()
    }
}

impl Default for SourceRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
