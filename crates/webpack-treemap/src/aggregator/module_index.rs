//! The deduplicated module table used for every size lookup.

use crate::stats::schema::{Chunk, Identifier, Module};
use log::debug;
use std::collections::HashMap;

/// Union of all modules, one entry per distinct name
///
/// Built once per load and read-only afterwards. The first occurrence of a
/// name wins, so sizes are taken from top-level modules before chunk copies.
#[derive(Debug, Clone, Default)]
pub struct ModuleIndex {
    modules: Vec<Module>,
    by_name: HashMap<String, usize>,
    by_id: HashMap<Identifier, usize>,
}

impl ModuleIndex {
    /// Build the index from top-level modules followed by every chunk's modules
    ///
    /// Both inputs are expected to be noise-filtered already.
    pub fn build(modules: &[Module], chunks: &[Chunk]) -> Self {
        let all = modules
            .iter()
            .chain(chunks.iter().flat_map(|chunk| chunk.modules.iter()));
        let index = Self::from_modules(all);

        debug!(
            "Module index: {} unique modules from {} top-level and {} chunks",
            index.len(),
            modules.len(),
            chunks.len()
        );

        index
    }

    pub fn from_modules<'a>(modules: impl IntoIterator<Item = &'a Module>) -> Self {
        let mut index = Self::default();
        for module in modules {
            index.insert(module);
        }
        index
    }

    fn insert(&mut self, module: &Module) {
        if self.by_name.contains_key(&module.name) {
            return;
        }

        let position = self.modules.len();
        self.by_name.insert(module.name.clone(), position);
        if let Some(id) = &module.id {
            self.by_id.entry(id.clone()).or_insert(position);
        }
        self.modules.push(module.clone());
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Module> {
        self.by_name.get(name).map(|&i| &self.modules[i])
    }

    pub fn get_by_id(&self, id: &Identifier) -> Option<&Module> {
        self.by_id.get(id).map(|&i| &self.modules[i])
    }

    /// Size for a tree path, trying the literal name and then the `./` form
    pub fn size_for_path(&self, path: &str) -> Option<u64> {
        self.get_by_name(path)
            .or_else(|| self.get_by_name(&format!("./{}", path)))
            .map(|m| m.size)
    }

    /// Module names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(|m| m.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
