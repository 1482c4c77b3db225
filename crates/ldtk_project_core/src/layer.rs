//! Layer definitions, per-level layer instances and placed tiles

use crate::Payload;
use serde::{Deserialize, Serialize};

/// The kind of a layer, parsed from its `__type` tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerType {
    IntGrid,
    Entities,
    Tiles,
    AutoLayer,
}

impl LayerType {
    /// Parse a wire `__type` tag. Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "IntGrid" => Some(LayerType::IntGrid),
            "Entities" => Some(LayerType::Entities),
            "Tiles" => Some(LayerType::Tiles),
            "AutoLayer" => Some(LayerType::AutoLayer),
            _ => None,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            LayerType::IntGrid => "IntGrid",
            LayerType::Entities => "Entities",
            LayerType::Tiles => "Tiles",
            LayerType::AutoLayer => "AutoLayer",
        }
    }
}

/// Maps an integer painted on an IntGrid layer to a label and display color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntGridValue {
    pub value: i64,
    pub identifier: Option<String>,
    pub color: String,
}

/// A layer template shared by every level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerDef {
    #[serde(rename = "__type")]
    pub kind: String,
    pub identifier: String,
    pub uid: i64,
    pub grid_size: i64,
    pub display_opacity: f64,
    pub px_offset_x: i64,
    pub px_offset_y: i64,
    pub int_grid_values: Vec<IntGridValue>,
    pub auto_tileset_def_uid: Option<i64>,
    pub auto_source_layer_def_uid: Option<i64>,
    pub tileset_def_uid: Option<i64>,
}

impl LayerDef {
    /// Get the type of this layer, if the tag is a known one
    pub fn layer_type(&self) -> Option<LayerType> {
        LayerType::from_tag(&self.kind)
    }

    /// Look up the IntGrid entry for a painted value
    pub fn int_grid_value(&self, value: i64) -> Option<&IntGridValue> {
        self.int_grid_values.iter().find(|v| v.value == value)
    }
}

/// A single placed tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Pixel position in the layer
    pub px: [i64; 2],
    /// Pixel position in the source atlas
    pub src: [i64; 2],
    /// Flip bits: bit 0 is X, bit 1 is Y
    pub f: i64,
    /// Tile id in the tileset
    pub t: i64,
}

impl Tile {
    pub fn flip_x(&self) -> bool {
        self.f & 1 != 0
    }

    pub fn flip_y(&self) -> bool {
        self.f & 2 != 0
    }
}

/// The realized occurrence of a [`LayerDef`] inside one level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerInstance {
    #[serde(rename = "__identifier")]
    pub identifier: String,
    #[serde(rename = "__type")]
    pub kind: String,
    #[serde(rename = "__cWid")]
    pub c_wid: i64,
    #[serde(rename = "__cHei")]
    pub c_hei: i64,
    #[serde(rename = "__gridSize")]
    pub grid_size: i64,
    #[serde(rename = "__opacity")]
    pub opacity: f64,
    #[serde(rename = "__pxTotalOffsetX")]
    pub px_total_offset_x: i64,
    #[serde(rename = "__pxTotalOffsetY")]
    pub px_total_offset_y: i64,
    #[serde(rename = "__tilesetDefUid")]
    pub tileset_def_uid: Option<i64>,
    #[serde(rename = "__tilesetRelPath")]
    pub tileset_rel_path: Option<String>,
    pub level_id: i64,
    pub layer_def_uid: i64,
    pub px_offset_x: i64,
    pub px_offset_y: i64,
    pub visible: bool,
    /// Row-major IntGrid values, `c_wid * c_hei` long for IntGrid layers
    pub int_grid_csv: Vec<i64>,
    #[serde(default)]
    pub auto_layer_tiles: Payload,
    pub override_tileset_uid: Option<i64>,
    pub grid_tiles: Vec<Tile>,
    #[serde(default)]
    pub entity_instances: Payload,
}

impl LayerInstance {
    /// Get the type of this layer, if the tag is a known one
    pub fn layer_type(&self) -> Option<LayerType> {
        LayerType::from_tag(&self.kind)
    }

    /// IntGrid value at a cell. `None` outside the grid, past the end of the
    /// csv, or when the grid is too large to index.
    pub fn int_grid_at(&self, x: i64, y: i64) -> Option<i64> {
        if x < 0 || y < 0 || x >= self.c_wid || y >= self.c_hei {
            return None;
        }
        let index = y.checked_mul(self.c_wid)?.checked_add(x)?;
        let index = usize::try_from(index).ok()?;
        self.int_grid_csv.get(index).copied()
    }
}
