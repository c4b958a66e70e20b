//! Rust filesystem source
//!
//!     Walks a directory tree for `.rs` files and extracts records two ways:
//!
//!     - comment blocks: every run of consecutive `//`-family line comments
//!       and every `/* ... */` block comment is stripped of its comment
//!       punctuation and fed to the itemizer, so marker-tagged documentation
//!       can live next to the code it describes;
//!     - declaration marks: a `static`/`const` item initialized with
//!       `mark::topic("…")` or `mark::term("…")` becomes a record whose title
//!       is the mark's argument, whose handle is the declaration's identifier,
//!       and whose body is the doc comment directly above it. The record is
//!       only emitted when all three are present.
//!
//!     The scanner is textual, not a Rust parser. Unrecognized text produces
//!     nothing; only filesystem failures are errors.

use crate::error::PublishError;
use crate::sources::walk::collect_files;
use almanac_parser::almanac::ast::{Item, ItemKind};
use almanac_parser::almanac::documenting::{Source, SourceError};
use almanac_parser::almanac::itemizing::itemize;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Matches `static NAME: … = mark::topic("Title")` declarations, capturing the
/// identifier, the mark kind, and the title.
static MARK_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^\s*(?:pub(?:\([^)]*\))?\s+)?(?:static|const)\s+([A-Za-z_][A-Za-z0-9_]*)\s*:[^=]*=\s*(?:[A-Za-z_][A-Za-z0-9_]*::)*mark::(topic|term)\(\s*"([^"]*)"\s*\)"#,
    )
    .expect("mark declaration pattern is valid")
});

/// Extracts records from Rust source files under a root directory.
pub struct RustSource {
    root: PathBuf,
}

impl RustSource {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl Source for RustSource {
    fn produce(&self) -> Result<Vec<Item>, SourceError> {
        let mut items = Vec::new();

        for file in collect_files(&self.root, &["rs"])? {
            let content =
                fs::read_to_string(&file).map_err(|err| PublishError::io(&file, err))?;
            scan_file(&file.display().to_string(), &content, &mut items);
        }

        Ok(items)
    }
}

/// One file's worth of extraction.
fn scan_file(label: &str, content: &str, items: &mut Vec<Item>) {
    let mut scanner = FileScanner::new(label);

    for line in content.lines() {
        scanner.process_line(line, items);
    }

    scanner.flush(items);
}

/// Line scanner tracking comment runs, block comments, and the most recent
/// comment block for declaration-mark attachment.
struct FileScanner<'a> {
    label: &'a str,
    comment_run: Vec<String>,
    block_lines: Vec<String>,
    in_block: bool,
    /// Comment block that ended on the previous line, if any. Cleared by
    /// blank lines and by any other intervening code.
    last_comment: Option<String>,
}

impl<'a> FileScanner<'a> {
    fn new(label: &'a str) -> Self {
        Self {
            label,
            comment_run: Vec::new(),
            block_lines: Vec::new(),
            in_block: false,
            last_comment: None,
        }
    }

    fn process_line(&mut self, line: &str, items: &mut Vec<Item>) {
        if self.in_block {
            if let Some(end) = line.find("*/") {
                self.push_block_line(&line[..end]);
                self.in_block = false;
                self.finish_block(items);
            } else {
                self.push_block_line(line);
            }
            return;
        }

        let trimmed = line.trim_start();

        if let Some(rest) = strip_line_comment(trimmed) {
            self.comment_run.push(rest.to_string());
            return;
        }

        // A non-comment line ends any line-comment run.
        if !self.comment_run.is_empty() {
            let run = std::mem::take(&mut self.comment_run);
            self.emit_comment(run.join("\n"), items);
        }

        if trimmed.is_empty() {
            self.last_comment = None;
            return;
        }

        if let Some(rest) = trimmed.strip_prefix("/*") {
            // Doc blocks open with /** — fold the extra star away.
            let rest = rest.strip_prefix('*').unwrap_or(rest);

            if let Some(end) = rest.find("*/") {
                self.emit_comment(rest[..end].trim().to_string(), items);
            } else {
                self.in_block = true;
                if !rest.trim().is_empty() {
                    self.block_lines.push(rest.trim_end().to_string());
                }
            }
            return;
        }

        if let Some(captures) = MARK_DECLARATION.captures(line) {
            let handle = &captures[1];
            let kind = match &captures[2] {
                "term" => ItemKind::Term,
                _ => ItemKind::Topic,
            };
            let title = &captures[3];
            let body = self.last_comment.take().unwrap_or_default();

            if !title.is_empty() && !body.is_empty() {
                items.push(match kind {
                    ItemKind::Topic => Item::topic(title),
                    ItemKind::Term => Item::term(title),
                }
                .with_handle(handle)
                .with_source(self.label)
                .with_body(body));
            }
        }

        self.last_comment = None;
    }

    fn flush(mut self, items: &mut Vec<Item>) {
        if !self.comment_run.is_empty() {
            let run = std::mem::take(&mut self.comment_run);
            self.emit_comment(run.join("\n"), items);
        }

        // An unterminated block comment still gets itemized, best effort.
        if self.in_block {
            self.finish_block(items);
        }
    }

    fn finish_block(&mut self, items: &mut Vec<Item>) {
        let lines = std::mem::take(&mut self.block_lines);
        self.emit_comment(lines.join("\n"), items);
    }

    fn emit_comment(&mut self, text: String, items: &mut Vec<Item>) {
        items.extend(itemize(self.label, &text));
        self.last_comment = if text.trim().is_empty() {
            None
        } else {
            Some(text)
        };
    }

    fn push_block_line(&mut self, line: &str) {
        self.block_lines.push(strip_block_decoration(line));
    }
}

/// Strip `//`, `///`, or `//!` plus one following space.
fn strip_line_comment(line: &str) -> Option<&str> {
    for marker in ["///", "//!", "//"] {
        if let Some(rest) = line.strip_prefix(marker) {
            return Some(rest.strip_prefix(' ').unwrap_or(rest));
        }
    }
    None
}

/// Strip the leading `* ` decoration convention inside block comments.
fn strip_block_decoration(line: &str) -> String {
    let trimmed = line.trim_end();
    let inner = trimmed.trim_start();

    if let Some(rest) = inner.strip_prefix('*') {
        rest.strip_prefix(' ').unwrap_or(rest).to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(content: &str) -> Vec<Item> {
        let mut items = Vec::new();
        scan_file("lib.rs", content, &mut items);
        items
    }

    #[test]
    fn test_line_comment_run_is_itemized() {
        let items = scan("// Topic: From Comments\n// Body line.\nfn main() {}\n");

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "From Comments");
        assert_eq!(items[0].body, "Body line.");
        assert_eq!(items[0].source, "lib.rs");
    }

    #[test]
    fn test_block_comment_is_itemized() {
        let items = scan("/*\nTopic: Block\nLives under block.\n*/\n");

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Block");
        assert_eq!(items[0].body, "Lives under block.");
    }

    #[test]
    fn test_decorated_block_comment_loses_stars() {
        let items = scan("/**\n * Topic: Starred\n * Indented body.\n */\n");

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Starred");
        assert_eq!(items[0].body, "Indented body.");
    }

    #[test]
    fn test_mark_declaration_with_doc_comment() {
        let items = scan(
            "/// Keeps a warm set of upstream sockets.\n\
             static POOLING: TopicMark = mark::topic(\"Connection Pooling\");\n",
        );

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, ItemKind::Topic);
        assert_eq!(items[0].title, "Connection Pooling");
        assert_eq!(items[0].handle, "POOLING");
        assert_eq!(items[0].body, "Keeps a warm set of upstream sockets.");
    }

    #[test]
    fn test_term_mark_with_full_path() {
        let items = scan(
            "/// Least recently used eviction.\n\
             pub const LRU: almanac_parser::almanac::mark::TermMark = almanac::mark::term(\"LRU\");\n",
        );

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, ItemKind::Term);
        assert_eq!(items[0].handle, "LRU");
    }

    #[test]
    fn test_mark_without_doc_comment_is_skipped() {
        let items = scan("static BARE: TopicMark = mark::topic(\"No Body\");\n");
        assert!(items.is_empty());
    }

    #[test]
    fn test_blank_line_detaches_doc_comment() {
        let items = scan(
            "/// Detached.\n\n\
             static GAP: TopicMark = mark::topic(\"Gapped\");\n",
        );
        assert!(items.is_empty());
    }

    #[test]
    fn test_plain_code_produces_nothing() {
        let items = scan("fn quiet() -> u32 {\n    42\n}\n");
        assert!(items.is_empty());
    }
}
