//! Core data structures and loader for LDTk projects
//!
//! This crate turns an LDTk project file into a lookup-friendly model:
//! - `Project` - The whole world: definitions plus levels
//! - `LayerDef` / `LayerInstance` - Layer templates and their per-level occurrences
//! - `EntityDef` - Placeable entity templates, keyed by identifier
//! - `TilesetDef` - Image atlas descriptors
//! - `Level` - Concrete levels, keyed by uid
//! - `Rgba` - Decoded `#RRGGBB` colors
//!
//! Sub-schemas that are not modeled (enums, field instances, auto-layer tiles,
//! entity instances) are kept as opaque [`Payload`] values.
//!
//! # Example
//!
//! ```rust,ignore
//! use ldtk_project_core::load_project;
//!
//! let project = load_project(Path::new("assets/world.ldtk"))?;
//! let player = project.entity("Player").expect("no Player entity");
//! println!("player is {}x{}", player.width, player.height);
//! ```

mod color;
mod entity;
mod layer;
mod level;
mod project;
mod tileset;
mod wire;

pub use color::{ColorError, Rgba};
pub use entity::EntityDef;
pub use layer::{IntGridValue, LayerDef, LayerInstance, LayerType, Tile};
pub use level::{Level, Neighbour, NeighbourDir};
pub use project::{Project, WorldLayout};
pub use tileset::{EnumTag, TileCustomData, TilesetDef};

use serde_json::error::Category;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use wire::ProjectJson;

/// An untyped sub-tree of the document, carried through unchanged
pub type Payload = serde_json::Value;

/// Errors that can occur when loading a project
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed JSON: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("Schema mismatch at {path}: {source}")]
    Schema {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid color in {field}: {source}")]
    Color {
        field: &'static str,
        #[source]
        source: ColorError,
    },
}

impl From<serde_path_to_error::Error<serde_json::Error>> for LoadError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        let source = err.into_inner();
        match source.classify() {
            Category::Data => LoadError::Schema { path, source },
            Category::Io | Category::Syntax | Category::Eof => LoadError::Decode(source),
        }
    }
}

/// Load a project from a `.ldtk` file
pub fn load_project(path: &Path) -> Result<Project, LoadError> {
    let bytes = std::fs::read(path)?;

    load_project_from_bytes(&bytes)
}

/// Parse a project from a JSON string
pub fn parse_project(json: &str) -> Result<Project, LoadError> {
    normalize(serde_json::Deserializer::from_str(json))
}

/// Load a project from bytes
pub fn load_project_from_bytes(bytes: &[u8]) -> Result<Project, LoadError> {
    normalize(serde_json::Deserializer::from_slice(bytes))
}

/// Load a project from a reader, consuming it to the end
pub fn load_project_from_reader<R: Read>(mut reader: R) -> Result<Project, LoadError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    load_project_from_bytes(&bytes)
}

fn normalize<'de, R>(mut deserializer: serde_json::Deserializer<R>) -> Result<Project, LoadError>
where
    R: serde_json::de::Read<'de>,
{
    let raw: ProjectJson = serde_path_to_error::deserialize(&mut deserializer)?;
    deserializer.end().map_err(LoadError::Decode)?;

    Project::from_wire(raw)
}
