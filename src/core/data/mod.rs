//! Core data types shared by the parser, flattener and analyzer.
//!
//! ## Module Structure
//!
//! - `node`: Parsed document tree (Node, Mapping, LeafValue)
//! - `leaf_paths`: Ordered set of dot-joined leaf paths
//! - `coverage`: Per-candidate coverage result

pub mod coverage;
pub mod leaf_paths;
pub mod node;

pub use coverage::CoverageResult;
pub use leaf_paths::LeafPaths;
pub use node::{LeafValue, Mapping, Node};
