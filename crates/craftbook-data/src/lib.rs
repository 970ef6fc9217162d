//! Config documents and the recipe definition parser.
//!
//! Documents are loaded through a [`ConfigStore`] (a data directory with
//! bundled templates, or an in-memory store), then walked by
//! [`parse_document`] into resolved recipe descriptors.

pub mod document;
pub mod loader;
pub mod parser;

pub use document::{Document, DocumentError, Entry, Section};
pub use loader::{ConfigStore, DataLoadError, DirConfigStore, Format, MemoryConfigStore};
pub use parser::{ParseOutcome, parse_document};
