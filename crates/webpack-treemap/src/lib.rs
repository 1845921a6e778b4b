//! webpack-treemap library
//!
//! Turns webpack build statistics into a compact embedded payload and,
//! on the consuming side, into per-asset sizes and a compacted treemap.
//!
//! The `webpack-treemap` CLI is a thin wrapper over [`commands`].

pub mod aggregator;
pub mod codec;
pub mod commands;
pub mod report;
pub mod stats;
pub mod treemap;
pub mod utils;
pub mod view;
