//! Locov - locale coverage auditor
//!
//! Locov compares the localization files of a project against a reference
//! locale. Each file is parsed with a lightweight indentation-based reader,
//! flattened into dot-joined key paths and diffed against the reference,
//! producing a coverage percentage and the list of missing keys per locale.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Parser, flattener, analyzer and locale loading
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
