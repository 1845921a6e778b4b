//! View-time model of a decoded payload.
//!
//! [`load`] turns the embedded payload string into a [`DecodedData`] that is
//! passed explicitly to every consumer: asset listing, totals and the treemap
//! for the current selection.

use crate::aggregator::{asset_modules, attach_stat_sizes, chunk_lookup, ModuleIndex};
use crate::codec;
use crate::stats::schema::{Asset, Chunk, Module, Payload};
use crate::treemap::{build_tree, compact, TreeNode};
use crate::utils::config::AnalyzerConfig;
use crate::utils::error::{AggregateError, LoadError};
use log::{debug, info, warn};
use std::collections::{BTreeMap, HashSet};

/// Everything the viewer needs, derived once per payload
#[derive(Debug, Clone)]
pub struct DecodedData {
    /// Chunk name -> script file, used to flag entry assets
    pub assets_by_chunk_name: BTreeMap<String, String>,

    /// Script assets with `stat_size` attached
    pub assets: Vec<Asset>,

    /// Chunks with noise modules removed
    pub chunks: Vec<Chunk>,

    /// Top-level modules with noise removed
    pub modules: Vec<Module>,

    /// Deduplicated size lookup
    pub all_modules: ModuleIndex,

    /// Asset names in payload order
    pub chunks_list: Vec<String>,
}

/// Decode an embedded payload and derive the view model
///
/// **Public** - main entry point at view time
///
/// # Errors
/// * `LoadError::Decode` - the payload string is corrupt
/// * `LoadError::Aggregate` - an asset or chunk references missing data
pub fn load(encoded: &str, config: &AnalyzerConfig) -> Result<DecodedData, LoadError> {
    let payload: Payload = codec::decode(encoded)?;
    Ok(DecodedData::from_payload(payload, config)?)
}

impl DecodedData {
    /// Derive the view model from an in-memory payload
    pub fn from_payload(payload: Payload, config: &AnalyzerConfig) -> Result<Self, AggregateError> {
        let filter = &config.noise;

        let mut assets: Vec<Asset> = payload
            .assets
            .into_iter()
            .filter(|asset| config.is_script(&asset.name))
            .collect();
        let chunks = filter.filter_chunks(&payload.chunks);
        let modules = filter.filter_modules(&payload.modules);
        let all_modules = ModuleIndex::build(&modules, &chunks);

        attach_stat_sizes(&mut assets, &chunks, &all_modules)?;

        let chunks_list = assets.iter().map(|asset| asset.name.clone()).collect();

        info!(
            "Loaded payload: {} script assets, {} chunks, {} unique modules",
            assets.len(),
            chunks.len(),
            all_modules.len()
        );

        Ok(Self {
            assets_by_chunk_name: payload.assets_by_chunk_name,
            assets,
            chunks,
            modules,
            all_modules,
            chunks_list,
        })
    }

    pub fn asset(&self, name: &str) -> Option<&Asset> {
        self.assets.iter().find(|asset| asset.name == name)
    }

    /// True if the asset is the script file of a named chunk
    pub fn is_entry_asset(&self, name: &str) -> bool {
        self.assets_by_chunk_name.values().any(|file| file == name)
    }

    /// Sum of `stat_size` over all script assets
    pub fn total_stat_size(&self) -> u64 {
        self.assets.iter().filter_map(|asset| asset.stat_size).sum()
    }

    /// Assets ordered by `stat_size`, largest first
    pub fn assets_by_stat_size(&self) -> Vec<&Asset> {
        let mut sorted: Vec<&Asset> = self.assets.iter().collect();
        sorted.sort_by(|a, b| b.stat_size.cmp(&a.stat_size));
        sorted
    }

    /// Unique module paths of one asset, first-seen order, `./` stripped
    pub fn module_paths(&self, asset: &Asset) -> Result<Vec<String>, AggregateError> {
        let lookup = chunk_lookup(&self.chunks);
        let mut seen = HashSet::new();

        let mut paths = Vec::new();

        for module in asset_modules(asset, &lookup)? {
            if seen.insert(module.name.as_str()) {
                let path = module.name.strip_prefix("./").unwrap_or(&module.name);
                paths.push(path.to_string());
            }
        }

        Ok(paths)
    }

    /// Treemap data for the selected assets
    ///
    /// **Public** - rebuilt on every selection change
    ///
    /// One wrapper node per selected asset, in `chunks_list` order, labelled
    /// by the asset's file name and holding the compacted module forest.
    /// An empty selection yields an empty forest.
    pub fn tree_for_selection<S: AsRef<str>>(
        &self,
        selected: &[S],
    ) -> Result<Vec<TreeNode>, AggregateError> {
        let selected: HashSet<&str> = selected.iter().map(AsRef::as_ref).collect();

        for name in &selected {
            if self.asset(name).is_none() {
                warn!("Ignoring unknown asset in selection: {}", name);
            }
        }

        let mut forest = Vec::new();
        for asset in &self.assets {
            if !selected.contains(asset.name.as_str()) {
                continue;
            }

            let paths = self.module_paths(asset)?;
            let label = asset.name.rsplit('/').next().unwrap_or(&asset.name);

            debug!("Building tree for {} from {} modules", asset.name, paths.len());

            forest.push(TreeNode {
                name: label.to_string(),
                path: label.to_string(),
                value: None,
                children: compact(build_tree(&paths, &self.all_modules)),
            });
        }

        Ok(forest)
    }

    /// Treemap data for every script asset
    pub fn full_tree(&self) -> Result<Vec<TreeNode>, AggregateError> {
        self.tree_for_selection(self.chunks_list.as_slice())
    }
}
