//! Tileset (image atlas) definitions

use serde::{Deserialize, Serialize};

/// All tiles tagged with one enum value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumTag {
    pub enum_value_id: String,
    pub tile_ids: Vec<i64>,
}

/// Custom metadata attached to a set of tiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileCustomData {
    pub data: String,
    pub tile_id: Vec<i64>,
}

/// An image atlas descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TilesetDef {
    /// Width in cells
    #[serde(rename = "__cWid")]
    pub c_wid: i64,
    /// Height in cells
    #[serde(rename = "__cHei")]
    pub c_hei: i64,
    pub identifier: String,
    pub uid: i64,
    /// Path to the image, relative to the project file
    pub rel_path: Option<String>,
    pub px_wid: i64,
    pub px_hei: i64,
    pub tile_grid_size: i64,
    /// Space in pixels between tiles
    pub spacing: i64,
    /// Distance in pixels from the image borders
    pub padding: i64,
    /// Enum definition used for `enum_tags`
    pub tags_source_enum_uid: Option<i64>,
    pub enum_tags: Vec<EnumTag>,
    pub custom_data: Vec<TileCustomData>,
}

impl TilesetDef {
    /// Total number of tiles in the atlas, `None` if it does not fit in an `i64`
    pub fn tile_count(&self) -> Option<i64> {
        self.c_wid.checked_mul(self.c_hei)
    }

    /// Top-left pixel of a tile in the atlas, honoring padding and spacing.
    /// Returns None if the tile id is outside the grid or the position
    /// overflows.
    pub fn tile_grid_position(&self, tile_id: i64) -> Option<[i64; 2]> {
        if self.c_wid <= 0 || tile_id < 0 || tile_id >= self.tile_count()? {
            return None;
        }
        let step = self.tile_grid_size.checked_add(self.spacing)?;
        let offset = |cells: i64| cells.checked_mul(step)?.checked_add(self.padding);
        Some([offset(tile_id % self.c_wid)?, offset(tile_id / self.c_wid)?])
    }

    /// Custom data strings attached to a tile
    pub fn custom_data_for(&self, tile_id: i64) -> impl Iterator<Item = &str> + '_ {
        self.custom_data
            .iter()
            .filter(move |c| c.tile_id.contains(&tile_id))
            .map(|c| c.data.as_str())
    }

    /// Enum values a tile is tagged with
    pub fn enum_tags_for(&self, tile_id: i64) -> impl Iterator<Item = &str> + '_ {
        self.enum_tags
            .iter()
            .filter(move |t| t.tile_ids.contains(&tile_id))
            .map(|t| t.enum_value_id.as_str())
    }
}
