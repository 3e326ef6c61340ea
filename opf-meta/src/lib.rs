//! Minimal OPF metadata extraction for EPUB backups
//!
//! Reads descriptive fields out of an EPUB package document without a real
//! XML parser:
//! - `extract`: first tag-prefix match, inner text
//! - `metadata`: title, author and year with per-field fallbacks
//! - `title`: destination filename built from those fields

pub mod extract;
pub mod metadata;
pub mod title;

pub use extract::extract_field;
pub use metadata::{BookMetadata, author, title, year};
pub use title::book_title;
