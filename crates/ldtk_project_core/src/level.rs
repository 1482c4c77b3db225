//! Concrete levels and their neighbourhood

use crate::{LayerInstance, Payload};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Which side of a level a neighbour touches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NeighbourDir {
    North,
    South,
    East,
    West,
}

/// An adjacent level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbour {
    #[serde(rename = "levelUid")]
    pub level_uid: i64,
    /// Direction tag: `n`, `s`, `e` or `w`
    pub dir: String,
}

impl Neighbour {
    pub fn direction(&self) -> Option<NeighbourDir> {
        match self.dir.as_str() {
            "n" => Some(NeighbourDir::North),
            "s" => Some(NeighbourDir::South),
            "e" => Some(NeighbourDir::East),
            "w" => Some(NeighbourDir::West),
            _ => None,
        }
    }
}

/// One level of the world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub identifier: String,
    /// Unique id, also the key in [`Project::levels`](crate::Project::levels)
    pub uid: i64,
    #[serde(default)]
    pub iid: Option<Uuid>,
    pub world_x: i64,
    pub world_y: i64,
    pub px_wid: i64,
    pub px_hei: i64,
    /// Background color as the raw `#RRGGBB` string (never decoded)
    #[serde(rename = "__bgColor")]
    pub bg_color: String,
    #[serde(rename = "__bgPos", default)]
    pub bg_pos: Payload,
    pub bg_rel_path: Option<String>,
    pub external_rel_path: Option<String>,
    #[serde(default)]
    pub field_instances: Payload,
    /// Layers in stacking order. Empty when the level lives in an external
    /// file, where the project writes `null` here.
    #[serde(deserialize_with = "null_as_empty")]
    pub layer_instances: Vec<LayerInstance>,
    #[serde(rename = "__neighbours")]
    pub neighbours: Vec<Neighbour>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Level {
    /// Find a layer instance by identifier
    pub fn layer(&self, identifier: &str) -> Option<&LayerInstance> {
        self.layer_instances
            .iter()
            .find(|l| l.identifier == identifier)
    }

    /// Neighbours on one side of this level
    pub fn neighbours_towards(&self, dir: NeighbourDir) -> impl Iterator<Item = i64> + '_ {
        self.neighbours
            .iter()
            .filter(move |n| n.direction() == Some(dir))
            .map(|n| n.level_uid)
    }
}
