//! Removal of bundler bookkeeping modules.
//!
//! Runtime modules, extracted-CSS placeholders and externals/delegated
//! references carry no real source weight and would skew the treemap.

use crate::stats::schema::{Chunk, Module};
use serde::{Deserialize, Serialize};

/// Which modules count as noise
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NoiseFilter {
    /// `moduleType` values to drop
    pub module_types: Vec<String>,

    /// Module name prefixes to drop
    pub name_prefixes: Vec<String>,
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self {
            module_types: vec!["runtime".to_string(), "css/mini-extract".to_string()],
            name_prefixes: vec!["external".to_string(), "delegated".to_string()],
        }
    }
}

impl NoiseFilter {
    pub fn is_noise(&self, module: &Module) -> bool {
        let noisy_type = module
            .module_type
            .as_deref()
            .is_some_and(|t| self.module_types.iter().any(|m| m == t));

        noisy_type
            || self
                .name_prefixes
                .iter()
                .any(|prefix| module.name.starts_with(prefix.as_str()))
    }

    /// Keep only modules with real source weight
    pub fn filter_modules(&self, modules: &[Module]) -> Vec<Module> {
        modules
            .iter()
            .filter(|m| !self.is_noise(m))
            .cloned()
            .collect()
    }

    /// Copy chunks with their module lists filtered
    pub fn filter_chunks(&self, chunks: &[Chunk]) -> Vec<Chunk> {
        chunks
            .iter()
            .map(|chunk| Chunk {
                id: chunk.id.clone(),
                size: chunk.size,
                modules: self.filter_modules(&chunk.modules),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::schema::Identifier;

    #[test]
    fn test_is_noise() {
        let filter = NoiseFilter::default();

        assert!(filter.is_noise(&Module::new("webpack/runtime/define", 1, 10).with_module_type("runtime")));
        assert!(filter.is_noise(&Module::new("css ./a.css", 2, 10).with_module_type("css/mini-extract")));
        assert!(filter.is_noise(&Module::new("external \"react\"", 3, 42)));
        assert!(filter.is_noise(&Module::new("delegated ./x.js from dll-reference", 4, 42)));
        assert!(!filter.is_noise(&Module::new("./src/index.js", 5, 100).with_module_type("javascript/auto")));
    }

    #[test]
    fn test_filter_chunks_keeps_chunk_identity() {
        let chunk = Chunk {
            id: Identifier::Num(7),
            size: 110,
            modules: vec![
                Module::new("./src/index.js", 1, 100),
                Module::new("webpack/runtime/jsonp", 2, 10).with_module_type("runtime"),
            ],
        };

        let filtered = NoiseFilter::default().filter_chunks(&[chunk]);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, Identifier::Num(7));
        assert_eq!(filtered[0].size, 110);
        assert_eq!(filtered[0].modules.len(), 1);
        assert_eq!(filtered[0].modules[0].name, "./src/index.js");
    }
}
