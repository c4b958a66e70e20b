//! Item records
//!
//!     An item is one extracted Topic or Term entry: a display title, a
//!     normalized handle used for tree grouping and addressing, an opaque
//!     markdown body, and the label of the text block it came from. The source
//!     label is diagnostic only and never participates in ordering.

use crate::almanac::itemizing::handles::encode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two record kinds. Topics form the hierarchy, terms form the glossary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    #[default]
    Topic,
    Term,
}

/// A structured Topic or Term entry extracted from raw text.
///
/// Handles are unique by convention only. Collisions are resolved by assembly
/// policy, never rejected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Item {
    pub kind: ItemKind,
    /// Label of the originating text block, usually a file path.
    pub source: String,
    pub title: String,
    pub handle: String,
    pub body: String,
}

impl Item {
    /// Create a topic item with the handle derived from the title.
    pub fn topic(title: impl Into<String>) -> Self {
        Self::with_kind(ItemKind::Topic, title)
    }

    /// Create a term item with the handle derived from the title.
    pub fn term(title: impl Into<String>) -> Self {
        Self::with_kind(ItemKind::Term, title)
    }

    fn with_kind(kind: ItemKind, title: impl Into<String>) -> Self {
        let title = title.into();
        let handle = encode(&title);
        Self {
            kind,
            source: String::new(),
            title,
            handle,
            body: String::new(),
        }
    }

    /// Override the derived handle.
    pub fn with_handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = handle.into();
        self
    }

    /// Attach the originating source label.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Attach the body text.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}('{}', handle '{}')",
            self.kind, self.title, self.handle
        )
    }
}
