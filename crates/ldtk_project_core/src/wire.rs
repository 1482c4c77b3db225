//! Shape of the project document as it sits on disk
//!
//! Only the normalizer sees these types; definitions are nested under `defs`
//! and keyed collections are still plain arrays.

use crate::{EntityDef, LayerDef, Level, Payload, TilesetDef};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProjectJson {
    #[serde(default)]
    pub iid: Option<Uuid>,
    #[serde(default)]
    pub json_version: Option<String>,
    pub world_layout: String,
    pub world_grid_width: i64,
    pub world_grid_height: i64,
    pub bg_color: String,
    pub external_levels: bool,
    pub defs: DefsJson,
    pub levels: Vec<Level>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DefsJson {
    pub layers: Vec<LayerDef>,
    pub entities: Vec<EntityDef>,
    pub tilesets: Vec<TilesetDef>,
    #[serde(default)]
    pub enums: Payload,
    #[serde(default)]
    pub external_enums: Payload,
    #[serde(default)]
    pub level_fields: Payload,
}
