//! Handle encoding
//!
//!     Handles are the normalized identifiers that tree assembly groups on, so
//!     the transform has to be deterministic and idempotent: re-encoding an
//!     already encoded handle must be a no-op.

/// Encode a free-text title into a normalized handle.
///
/// Trims and lowercases, then maps per character: ASCII letters and digits
/// pass through, a space becomes `_`, an underscore stays (idempotence),
/// anything else is dropped. Runs of spaces become runs of underscores; no
/// compression is applied.
pub fn encode(title: &str) -> String {
    let mut handle = String::with_capacity(title.len());

    for c in title.trim().to_lowercase().chars() {
        match c {
            'a'..='z' | '0'..='9' | '_' => handle.push(c),
            ' ' => handle.push('_'),
            _ => {}
        }
    }

    handle
}
