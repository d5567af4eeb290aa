//! Core audit engine.
//!
//! Text flows strictly forward through the pipeline:
//! raw text → classified lines → tree → leaf paths → coverage results.
//!
//! - `parsers`: line classification and the indentation-based tree builder
//! - `flatten`: leaf path extraction
//! - `analyze`: reference vs. candidate comparison
//! - `file_scanner` / `context`: locale discovery and loading

pub mod analyze;
pub mod context;
pub mod data;
pub mod file_scanner;
pub mod flatten;
pub mod parsers;

pub use analyze::{AnalyzeError, analyze, coverage_percent};
pub use context::{AuditContext, ParsedLocale, load_locale};
pub use data::{CoverageResult, LeafPaths, LeafValue, Mapping, Node};
pub use file_scanner::{LocaleFile, ScanLocalesResult, scan_locale_files};
pub use flatten::{flatten, flatten_entries};
pub use parsers::parse;
