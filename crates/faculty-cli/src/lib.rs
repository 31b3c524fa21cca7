//! CLI library components for the faculty ingestion tool.

pub mod config;
pub mod logging;
pub mod pipeline;
