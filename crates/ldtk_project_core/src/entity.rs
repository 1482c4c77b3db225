//! Entity definitions (placeable templates)

use serde::{Deserialize, Serialize};

/// A placeable entity template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDef {
    /// Unique string identifier, also the key in [`Project::entities`](crate::Project::entities)
    pub identifier: String,
    pub uid: i64,
    pub width: i64,
    pub height: i64,
    /// Display color, kept as the raw `#RRGGBB` string
    pub color: String,
    pub tileset_id: Option<i64>,
    pub tile_id: Option<i64>,
    /// Anchor within the footprint, 0..=1 on each axis
    pub pivot_x: f64,
    pub pivot_y: f64,
}

impl EntityDef {
    /// Both halves of the tile reference, when the entity has one
    pub fn tile(&self) -> Option<(i64, i64)> {
        self.tileset_id.zip(self.tile_id)
    }

    /// Pivot offset in pixels from the top-left corner of the footprint
    pub fn pivot_px(&self) -> [f64; 2] {
        [
            self.pivot_x * self.width as f64,
            self.pivot_y * self.height as f64,
        ]
    }
}
