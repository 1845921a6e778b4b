//! Build stats parsing and normalization.
//!
//! This module handles:
//! - Reading the raw `stats.json` emitted by webpack
//! - Projecting it down to the embedded payload
//! - Defining the payload schema

pub mod normalizer;
pub mod schema;

// Re-export main types
pub use normalizer::{normalize, normalize_str, normalize_value, read_stats};
pub use schema::{Asset, Chunk, ChunkFiles, Identifier, Module, ModuleKey, Payload, RawStats};
