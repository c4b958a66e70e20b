//! Data model for almanac documentation
//!
//!     The model is deliberately flat at the input side and tree shaped at the
//!     output side. Extraction produces [`Item`] records with prefix-encoded
//!     handles; assembly reconstructs the hierarchy those prefixes imply and
//!     returns a [`Documentation`] value holding the topic tree and the
//!     glossary.
//!
//!     Items are transient: they are created by extraction (or synthesized by a
//!     source), moved into the assembler, and consumed into [`TopicNode`]s or
//!     the glossary. Nothing mutates an item after creation except the
//!     assembler, which clears the root's handle and rewrites placed nodes'
//!     handles to parent-relative segments.

pub mod documentation;
pub mod item;
pub mod topic;

pub use documentation::Documentation;
pub use item::{Item, ItemKind};
pub use topic::TopicNode;
