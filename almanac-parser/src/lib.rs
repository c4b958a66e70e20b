//! # almanac
//!
//! Record extraction and documentation assembly.
//!
//!     Almanac turns free-form text (markdown files, comment blocks lifted out of
//!     source files) into a navigable documentation tree plus an alphabetical
//!     glossary. Text blocks are itemized into flat Topic and Term records, and
//!     the records' prefix-encoded handles are then reassembled into an explicit
//!     hierarchy.
//!
//! The pipeline, leaf first:
//!
//!     - itemizing: split a raw text block into records on `Topic:` / `Term:` /
//!       `Handle:` markers, deriving normalized handles from titles.
//!     - assembling: pick a root, group the remaining topics under it by handle
//!       prefix, strip the prefixes, and sort the terms into a glossary.
//!     - documenting: drive any number of record sources in order and hand the
//!       merged records to the assembler.
//!
//! Sources and sinks are capability traits ([`almanac::documenting::Source`],
//! [`almanac::documenting::Sink`]); filesystem sources and the HTML sink live
//! in the `almanac-publish` crate.

pub mod almanac;
