//! Filesystem sources and HTML publishing for almanac documentation
//!
//!     This crate provides the concrete collaborators around the almanac core:
//!     sources that pull marker-tagged records out of a directory tree, and the
//!     sink that renders an assembled documentation set into a static HTML page
//!     tree.
//!
//!     This is a pure lib: it powers almanac-cli but is shell agnostic, so no
//!     code here prints to std streams or reads env vars.
//!
//! Architecture
//!
//!     - sources: `MarkdownSource` (whole markdown files) and `RustSource`
//!       (comment blocks and declaration marks in Rust files), both implementing
//!       the core `Source` trait.
//!     - registry: `SourceRegistry` for discovery and by-name construction of
//!       sources, so shells can offer them as flags.
//!     - render: `HtmlRenderer`, the core `Sink`, producing one page per topic
//!       plus a glossary page, with navigation and an embedded search index.

pub mod error;
pub mod registry;
pub mod render;
pub mod sources;

pub use error::PublishError;
pub use registry::SourceRegistry;
pub use render::html::HtmlRenderer;
pub use sources::markdown::MarkdownSource;
pub use sources::rust::RustSource;
