//! Catnub Tools module
//!
//! Composed reports and service status behind the MCP tools.

pub mod insights;
pub mod status;
