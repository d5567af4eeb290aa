//! Parsers for locale files.
//!
//! - `line`: per-line classification (blank, comment, `key: value`)
//! - `yaml`: indentation-driven tree builder for YAML locale files

pub mod line;
pub mod yaml;

pub use yaml::{TreeBuilder, parse};
