//! Aggregation of chunk and module data into per-asset sizes.
//!
//! This module transforms the normalized payload into:
//! - Noise-filtered chunk and module lists
//! - The deduplicated module index (size lookup by name or id)
//! - `statSize` for every script asset

pub mod filter;
pub mod module_index;
pub mod sizes;

// Re-export main types and functions
pub use filter::NoiseFilter;
pub use module_index::ModuleIndex;
pub use sizes::{
    asset_chunks, asset_modules, attach_stat_sizes, chunk_lookup, stat_size, ChunkLookup,
};
