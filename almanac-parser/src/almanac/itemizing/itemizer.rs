//! Record extraction state machine
//!
//!     The itemizer is a stateful line processor: feed it lines, collect the
//!     finished records at the end. At most one record is open at a time; a new
//!     marker finalizes the open record before starting the next. A record is
//!     only ever appended with a non-empty title, so a bare `Topic:` line opens
//!     nothing and the lines after it are discarded.

use super::handles::encode;
use crate::almanac::ast::{Item, ItemKind};

const TOPIC_TOKEN: &str = "topic:";
const TERM_TOKEN: &str = "term:";
const HANDLE_TOKEN: &str = "handle:";

/// Itemize a raw text block labeled with `source`.
///
/// Convenience wrapper over [`Itemizer`] for whole-block input.
pub fn itemize(source: &str, input: &str) -> Vec<Item> {
    let mut itemizer = Itemizer::new(source);
    for line in input.split('\n') {
        itemizer.process_line(line);
    }
    itemizer.finish()
}

/// The record currently being accumulated.
struct OpenItem {
    kind: ItemKind,
    title: String,
    handle: String,
    body: Vec<String>,
}

impl OpenItem {
    fn finalize(self, source: &str) -> Item {
        // Interior blank lines are body content; only the outer blank run goes.
        let body = self.body.join("\n");
        let body = body.trim_matches('\n');

        Item {
            kind: self.kind,
            source: source.to_string(),
            title: self.title,
            handle: self.handle,
            body: body.to_string(),
        }
    }
}

/// A stateful extractor that splits marker-tagged text into records.
pub struct Itemizer {
    source: String,
    open: Option<OpenItem>,
    items: Vec<Item>,
}

impl Itemizer {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            open: None,
            items: Vec::new(),
        }
    }

    /// Process one line of input.
    ///
    /// Markers are matched case-insensitively on the trimmed line. Body lines
    /// keep their leading indentation and lose only trailing whitespace.
    pub fn process_line(&mut self, line: &str) {
        let trimmed = line.trim();
        let lower = trimmed.to_ascii_lowercase();

        if lower.starts_with(TOPIC_TOKEN) {
            self.start_item(ItemKind::Topic, trimmed[TOPIC_TOKEN.len()..].trim());
        } else if lower.starts_with(TERM_TOKEN) {
            self.start_item(ItemKind::Term, trimmed[TERM_TOKEN.len()..].trim());
        } else if lower.starts_with(HANDLE_TOKEN) {
            if let Some(open) = self.open.as_mut() {
                open.handle = trimmed[HANDLE_TOKEN.len()..].trim().to_string();
            }
        } else if let Some(open) = self.open.as_mut() {
            open.body.push(line.trim_end().to_string());
        }
    }

    /// Finalize any open record and return everything extracted.
    pub fn finish(mut self) -> Vec<Item> {
        self.finalize_open();
        self.items
    }

    fn start_item(&mut self, kind: ItemKind, title: &str) {
        self.finalize_open();

        // An empty title opens nothing; lines up to the next marker are dropped.
        if title.is_empty() {
            return;
        }

        self.open = Some(OpenItem {
            kind,
            title: title.to_string(),
            handle: encode(title),
            body: Vec::new(),
        });
    }

    fn finalize_open(&mut self) {
        if let Some(open) = self.open.take() {
            if !open.title.is_empty() {
                self.items.push(open.finalize(&self.source));
            }
        }
    }
}
