//! Per-asset size attribution.
//!
//! An asset's `statSize` is the sum of the distinct source modules found in
//! the chunks that produced it. Modules shared by several of those chunks are
//! counted once; chunks are shared freely between assets.

use super::module_index::ModuleIndex;
use crate::stats::schema::{Asset, Chunk, Identifier, Module};
use crate::utils::error::AggregateError;
use log::debug;
use std::collections::{HashMap, HashSet};

/// Chunk id -> chunk, first occurrence wins
pub type ChunkLookup<'a> = HashMap<&'a Identifier, &'a Chunk>;

pub fn chunk_lookup(chunks: &[Chunk]) -> ChunkLookup<'_> {
    let mut lookup = HashMap::with_capacity(chunks.len());
    for chunk in chunks {
        lookup.entry(&chunk.id).or_insert(chunk);
    }
    lookup
}

/// Resolve the chunks an asset declares
///
/// # Errors
/// * `AggregateError::MissingChunk` - a declared chunk id is not in `lookup`
pub fn asset_chunks<'a>(
    asset: &Asset,
    lookup: &ChunkLookup<'a>,
) -> Result<Vec<&'a Chunk>, AggregateError> {
    asset
        .chunks
        .iter()
        .map(|id| {
            lookup
                .get(id)
                .copied()
                .ok_or_else(|| AggregateError::MissingChunk {
                    asset: asset.name.clone(),
                    chunk: id.clone(),
                })
        })
        .collect()
}

/// Every module of an asset's chunks, in chunk order, duplicates included
pub fn asset_modules<'a>(
    asset: &Asset,
    lookup: &ChunkLookup<'a>,
) -> Result<Vec<&'a Module>, AggregateError> {
    Ok(asset_chunks(asset, lookup)?
        .into_iter()
        .flat_map(|chunk| chunk.modules.iter())
        .collect())
}

/// Compute `statSize` for one asset
///
/// **Public** - main entry point for size attribution
///
/// # Errors
/// * `AggregateError::MissingChunk` - the asset names an unknown chunk
/// * `AggregateError::MissingModule` - a chunk module is absent from `index`
pub fn stat_size(
    asset: &Asset,
    lookup: &ChunkLookup<'_>,
    index: &ModuleIndex,
) -> Result<u64, AggregateError> {
    let mut seen = HashSet::new();
    let mut total = 0u64;

    for chunk in asset_chunks(asset, lookup)? {
        for module in &chunk.modules {
            let key = module.dedup_key();
            if !seen.insert(key) {
                continue;
            }

            let indexed = match &module.id {
                Some(id) => index.get_by_id(id),
                None => index.get_by_name(&module.name),
            };

            let indexed = indexed.ok_or_else(|| AggregateError::MissingModule {
                chunk: chunk.id.clone(),
                module: key.to_string(),
            })?;

            total += indexed.size;
        }
    }

    debug!(
        "Asset {}: {} unique modules, {} bytes",
        asset.name,
        seen.len(),
        total
    );

    Ok(total)
}

/// Attach `statSize` to every asset
///
/// Aborts on the first referential-integrity fault; a partial result would
/// under-report sizes.
pub fn attach_stat_sizes(
    assets: &mut [Asset],
    chunks: &[Chunk],
    index: &ModuleIndex,
) -> Result<(), AggregateError> {
    let lookup = chunk_lookup(chunks);
    for asset in assets.iter_mut() {
        asset.stat_size = Some(stat_size(asset, &lookup, index)?);
    }
    Ok(())
}
