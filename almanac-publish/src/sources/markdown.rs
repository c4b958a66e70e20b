//! Markdown filesystem source
//!
//!     Walks a directory tree for `.md` / `.markdown` files and feeds each
//!     whole file body to the itemizer, labeled with the file's path. Markdown
//!     is opaque here: the markers are plain lines inside it, and whatever
//!     surrounds them rides along as record bodies.

use crate::error::PublishError;
use crate::sources::walk::collect_files;
use almanac_parser::almanac::ast::Item;
use almanac_parser::almanac::documenting::{Source, SourceError};
use almanac_parser::almanac::itemizing::itemize;
use std::fs;
use std::path::{Path, PathBuf};

const EXTENSIONS: [&str; 2] = ["md", "markdown"];

/// Extracts records from markdown files under a root directory.
pub struct MarkdownSource {
    root: PathBuf,
}

impl MarkdownSource {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl Source for MarkdownSource {
    fn produce(&self) -> Result<Vec<Item>, SourceError> {
        let mut items = Vec::new();

        for file in collect_files(&self.root, &EXTENSIONS)? {
            let content =
                fs::read_to_string(&file).map_err(|err| PublishError::io(&file, err))?;
            items.extend(itemize(&file.display().to_string(), &content));
        }

        Ok(items)
    }
}
