//! Build stats and payload schema definitions.
//!
//! The reduced types double as the projection: deserializing a full webpack
//! stats object into them keeps only the listed fields, and every field that
//! the source leaves out stays out of the serialized payload.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Chunk or module identifier
///
/// Webpack emits numeric ids by default and string ids for named chunks
/// and path-based module ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    Num(u64),
    Str(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Num(n) => write!(f, "{}", n),
            Identifier::Str(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<u64> for Identifier {
    fn from(n: u64) -> Self {
        Identifier::Num(n)
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Identifier::Str(s.to_string())
    }
}

/// Full stats object as produced by `stats.toJson()`, restricted to the
/// fields we read. Everything else (reasons, source, timings) is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStats {
    #[serde(default)]
    pub output_path: Option<String>,

    #[serde(default)]
    pub assets_by_chunk_name: BTreeMap<String, ChunkFiles>,

    #[serde(default)]
    pub assets: Vec<Asset>,

    #[serde(default)]
    pub chunks: Vec<Chunk>,

    #[serde(default)]
    pub modules: Vec<Module>,
}

/// Files emitted for one named chunk
///
/// Webpack 4 emits a bare string for single-file chunks, webpack 5 always
/// emits a list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ChunkFiles {
    One(String),
    Many(Vec<String>),
}

impl ChunkFiles {
    pub fn files(&self) -> &[String] {
        match self {
            ChunkFiles::One(file) => std::slice::from_ref(file),
            ChunkFiles::Many(files) => files,
        }
    }
}

/// Normalized payload embedded into the report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,

    /// Chunk name -> the chunk's script file
    #[serde(default)]
    pub assets_by_chunk_name: BTreeMap<String, String>,

    #[serde(default)]
    pub assets: Vec<Asset>,

    #[serde(default)]
    pub chunks: Vec<Chunk>,

    #[serde(default)]
    pub modules: Vec<Module>,
}

/// An emitted output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    pub name: String,

    #[serde(default)]
    pub size: u64,

    #[serde(default)]
    pub chunks: Vec<Identifier>,

    #[serde(default)]
    pub chunk_names: Vec<String>,

    /// Sum of the distinct source modules behind this asset, attached at load
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat_size: Option<u64>,
}

/// A build-tool grouping of modules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub id: Identifier,

    #[serde(default)]
    pub size: u64,

    #[serde(default)]
    pub modules: Vec<Module>,
}

/// A single source module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub name: String,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_type: Option<String>,

    #[serde(default)]
    pub size: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Identifier>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub chunks: Vec<Identifier>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<u64>,
}

impl Module {
    /// Minimal module, mostly useful for tests and fixtures
    pub fn new(name: impl Into<String>, id: u64, size: u64) -> Self {
        Self {
            name: name.into(),
            kind: None,
            module_type: None,
            size,
            index: None,
            id: Some(Identifier::Num(id)),
            chunks: Vec::new(),
            depth: None,
        }
    }

    pub fn with_id(mut self, id: Option<Identifier>) -> Self {
        self.id = id;
        self
    }

    pub fn with_module_type(mut self, module_type: impl Into<String>) -> Self {
        self.module_type = Some(module_type.into());
        self
    }

    /// Key used to count a module once per asset
    pub fn dedup_key(&self) -> ModuleKey<'_> {
        match &self.id {
            Some(id) => ModuleKey::Id(id),
            None => ModuleKey::Name(&self.name),
        }
    }
}

/// Identity of a module inside one asset's size computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKey<'a> {
    Id(&'a Identifier),
    Name(&'a str),
}

impl fmt::Display for ModuleKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModuleKey::Id(id) => write!(f, "{}", id),
            ModuleKey::Name(name) => write!(f, "{:?}", name),
        }
    }
}
