//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes the coverage audit to AI assistants over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Tool router and server entry point
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{LocovMcpServer, run_server};
