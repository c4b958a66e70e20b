//! Itemizing module
//!
//!     Itemizing splits a raw text block into flat [`Item`](crate::almanac::ast::Item)
//!     records. The input is scanned line by line against three field markers,
//!     matched case-insensitively as a prefix of the trimmed line:
//!
//!         Topic:  starts a topic record, finalizing any open record first
//!         Term:   starts a term record, same finalize-then-start behavior
//!         Handle: overrides the open record's handle; no-op with none open
//!
//!     Everything else is body text for the open record, or discarded preamble
//!     when no record is open yet. Itemizing is total: arbitrary input always
//!     produces a (possibly empty) record list, never an error.

pub mod handles;
pub mod itemizer;

pub use itemizer::{itemize, Itemizer};
