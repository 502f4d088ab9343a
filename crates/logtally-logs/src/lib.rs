//! Log processing for logtally
//!
//! This crate provides line parsing, file loading, per-level counting and
//! level filtering. Every operation is a plain function over its inputs.

mod counts;
mod error;
mod filter;
mod loader;
mod parser;

pub use counts::count_by_level;
pub use error::{LoadError, LoadErrorKind, ParseError};
pub use filter::{LevelFilter, by_level};
pub use loader::{load, load_from_reader};
pub use parser::LineParser;

// Re-export types used in our public API
pub use logtally_types::{CANONICAL_LEVELS, LevelCounts, LogRecord};
