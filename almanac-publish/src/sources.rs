//! Record sources
//!
//!     Each source walks a directory tree, picks out the files it understands,
//!     and turns their text into flat records via the core itemizer. Walk
//!     order is sorted by path so a documentation pass is deterministic
//!     regardless of directory iteration order.
//!
//!     Sources are best effort over content: text that isn't marker-tagged
//!     simply produces no records. Only filesystem failures are errors.

pub mod markdown;
pub mod rust;

mod walk;
