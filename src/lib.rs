//! Catnub
//!
//! Nutrition scoring and weight projection engine, with an MCP server on top.

pub mod build_info;
pub mod collab;
pub mod config;
pub mod mcp;
pub mod models;
pub mod science;
pub mod tools;
pub mod tracking;
