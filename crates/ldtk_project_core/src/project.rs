//! The project aggregate and the wire-to-model normalization

use crate::wire::ProjectJson;
use crate::{EntityDef, LayerDef, Level, LoadError, Payload, Rgba, TilesetDef};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use tracing::{debug, trace};
use uuid::Uuid;

/// How levels are arranged in the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorldLayout {
    Free,
    GridVania,
    LinearHorizontal,
    LinearVertical,
}

impl WorldLayout {
    /// Parse a wire `worldLayout` tag. Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Free" => Some(WorldLayout::Free),
            "GridVania" => Some(WorldLayout::GridVania),
            "LinearHorizontal" => Some(WorldLayout::LinearHorizontal),
            "LinearVertical" => Some(WorldLayout::LinearVertical),
            _ => None,
        }
    }
}

/// A fully loaded LDTk project
///
/// Built once by one of the `load_project*` functions (or through its
/// [`Deserialize`] impl) and read-only afterwards. Entity definitions are keyed
/// by identifier and levels by uid; layers and tilesets keep file order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "bevy", derive(bevy::asset::Asset, bevy::reflect::TypePath))]
pub struct Project {
    pub iid: Option<Uuid>,
    pub json_version: Option<String>,
    /// Layout tag, see [`Project::world_layout`]
    pub world_layout: String,
    pub world_grid_width: i64,
    pub world_grid_height: i64,
    pub bg_color: Rgba,
    /// Levels are stored in separate files next to the project
    pub external_levels: bool,
    /// Layer definitions in stacking order
    pub layers: Vec<LayerDef>,
    pub entities: HashMap<String, EntityDef>,
    pub tilesets: Vec<TilesetDef>,
    pub enums: Payload,
    pub external_enums: Payload,
    pub level_fields: Payload,
    pub levels: HashMap<i64, Level>,
}

impl Project {
    /// Normalize the on-disk shape into the model.
    ///
    /// Duplicate entity identifiers or level uids are not rejected: the last
    /// occurrence in file order wins.
    pub(crate) fn from_wire(raw: ProjectJson) -> Result<Self, LoadError> {
        let bg_color = Rgba::from_hex(&raw.bg_color).map_err(|source| LoadError::Color {
            field: "bgColor",
            source,
        })?;

        let mut entities = HashMap::with_capacity(raw.defs.entities.len());
        for entity in raw.defs.entities {
            if let Some(previous) = entities.insert(entity.identifier.clone(), entity) {
                debug!(
                    identifier = %previous.identifier,
                    uid = previous.uid,
                    "duplicate entity identifier, later definition replaces it"
                );
            }
        }

        let mut levels = HashMap::with_capacity(raw.levels.len());
        for level in raw.levels {
            if let Some(previous) = levels.insert(level.uid, level) {
                debug!(
                    uid = previous.uid,
                    identifier = %previous.identifier,
                    "duplicate level uid, later level replaces it"
                );
            }
        }

        let project = Self {
            iid: raw.iid,
            json_version: raw.json_version,
            world_layout: raw.world_layout,
            world_grid_width: raw.world_grid_width,
            world_grid_height: raw.world_grid_height,
            bg_color,
            external_levels: raw.external_levels,
            layers: raw.defs.layers,
            entities,
            tilesets: raw.defs.tilesets,
            enums: raw.defs.enums,
            external_enums: raw.defs.external_enums,
            level_fields: raw.defs.level_fields,
            levels,
        };

        trace!(
            layers = project.layers.len(),
            entities = project.entities.len(),
            tilesets = project.tilesets.len(),
            levels = project.levels.len(),
            "normalized project"
        );

        Ok(project)
    }

    /// Get the world layout, if the tag is a known one
    pub fn world_layout(&self) -> Option<WorldLayout> {
        WorldLayout::from_tag(&self.world_layout)
    }

    /// Get an entity definition by identifier
    pub fn entity(&self, identifier: &str) -> Option<&EntityDef> {
        self.entities.get(identifier)
    }

    /// Get a level by uid
    pub fn level(&self, uid: i64) -> Option<&Level> {
        self.levels.get(&uid)
    }

    /// Find a level by its identifier
    pub fn level_by_identifier(&self, identifier: &str) -> Option<&Level> {
        self.levels.values().find(|l| l.identifier == identifier)
    }

    /// Find a layer definition by uid
    pub fn layer_def(&self, uid: i64) -> Option<&LayerDef> {
        self.layers.iter().find(|l| l.uid == uid)
    }

    /// Find a tileset definition by uid
    pub fn tileset(&self, uid: i64) -> Option<&TilesetDef> {
        self.tilesets.iter().find(|t| t.uid == uid)
    }
}

impl<'de> Deserialize<'de> for Project {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = ProjectJson::deserialize(deserializer)?;
        Project::from_wire(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn entity(identifier: &str, uid: i64, color: &str) -> Value {
        json!({
            "identifier": identifier,
            "uid": uid,
            "width": 16,
            "height": 16,
            "color": color,
            "tilesetId": null,
            "tileId": null,
            "pivotX": 0.5,
            "pivotY": 1
        })
    }

    fn level(identifier: &str, uid: i64) -> Value {
        json!({
            "identifier": identifier,
            "uid": uid,
            "worldX": uid * 256,
            "worldY": 0,
            "pxWid": 256,
            "pxHei": 256,
            "__bgColor": "#696A79",
            "__bgPos": null,
            "bgRelPath": null,
            "externalRelPath": null,
            "fieldInstances": [],
            "layerInstances": [],
            "__neighbours": []
        })
    }

    fn layer(identifier: &str, uid: i64) -> Value {
        json!({
            "__type": "Tiles",
            "identifier": identifier,
            "uid": uid,
            "gridSize": 16,
            "displayOpacity": 1,
            "pxOffsetX": 0,
            "pxOffsetY": 0,
            "intGridValues": [],
            "autoTilesetDefUid": null,
            "autoSourceLayerDefUid": null,
            "tilesetDefUid": 90
        })
    }

    /// A small but complete project document
    pub(crate) fn sample_project() -> Value {
        json!({
            "iid": "1c7ce2a0-66b0-11ec-a5d3-2d3eda95f8a5",
            "jsonVersion": "1.5.3",
            "worldLayout": "GridVania",
            "worldGridWidth": 256,
            "worldGridHeight": 256,
            "bgColor": "#1E1E2C",
            "externalLevels": false,
            "defs": {
                "layers": [layer("Foreground", 3), layer("Background", 1)],
                "entities": [
                    entity("Player", 10, "#94D9B3"),
                    entity("Door", 11, "#BE4A2F"),
                    entity("Key", 12, "#FEE761")
                ],
                "tilesets": [{
                    "__cWid": 2,
                    "__cHei": 2,
                    "identifier": "Tiles",
                    "uid": 90,
                    "relPath": "tiles.png",
                    "pxWid": 32,
                    "pxHei": 32,
                    "tileGridSize": 16,
                    "spacing": 0,
                    "padding": 0,
                    "tagsSourceEnumUid": null,
                    "enumTags": [],
                    "customData": []
                }],
                "enums": [{ "identifier": "Item", "uid": 40, "values": [{ "id": "Sword" }] }],
                "externalEnums": [],
                "levelFields": [{ "identifier": "music", "__type": "String" }]
            },
            "levels": [level("Entrance", 0), level("Hall", 4), level("Vault", 7)]
        })
    }

    fn parse(value: Value) -> Project {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_scalars_and_background() {
        let project = parse(sample_project());
        assert_eq!(project.world_layout(), Some(WorldLayout::GridVania));
        assert_eq!(project.world_grid_width, 256);
        assert_eq!(project.bg_color, Rgba::rgb(0x1E, 0x1E, 0x2C));
        assert_eq!(project.bg_color.a, 0xFF);
        assert!(!project.external_levels);
        assert_eq!(project.json_version.as_deref(), Some("1.5.3"));
        assert!(project.iid.is_some());
    }

    #[test]
    fn test_entities_rekeyed_by_identifier() {
        let raw = sample_project();
        let project = parse(raw.clone());
        let raw_entities = raw["defs"]["entities"].as_array().unwrap();

        assert_eq!(project.entities.len(), raw_entities.len());
        for raw_entity in raw_entities {
            let expected: EntityDef = serde_json::from_value(raw_entity.clone()).unwrap();
            assert_eq!(project.entities[&expected.identifier], expected);
        }
        for (key, value) in &project.entities {
            assert_eq!(key, &value.identifier);
        }
    }

    #[test]
    fn test_levels_rekeyed_by_uid() {
        let raw = sample_project();
        let project = parse(raw.clone());
        let raw_levels = raw["levels"].as_array().unwrap();

        assert_eq!(project.levels.len(), raw_levels.len());
        for raw_level in raw_levels {
            let expected: Level = serde_json::from_value(raw_level.clone()).unwrap();
            assert_eq!(project.levels[&expected.uid], expected);
        }
        assert_eq!(project.level(4).map(|l| l.identifier.as_str()), Some("Hall"));
        assert_eq!(project.level_by_identifier("Vault").map(|l| l.uid), Some(7));
        assert!(project.level(1).is_none());
    }

    #[test]
    fn test_duplicate_identifier_last_wins() {
        let mut raw = sample_project();
        raw["defs"]["entities"] = json!([
            entity("Player", 1, "#000000"),
            entity("Door", 2, "#111111"),
            entity("Player", 3, "#FFFFFF")
        ]);
        let project = parse(raw);

        assert_eq!(project.entities.len(), 2);
        let player = project.entity("Player").unwrap();
        assert_eq!(player.uid, 3);
        assert_eq!(player.color, "#FFFFFF");
    }

    #[test]
    fn test_duplicate_level_uid_last_wins() {
        let mut raw = sample_project();
        raw["levels"] = json!([level("First", 5), level("Second", 5)]);
        let project = parse(raw);

        assert_eq!(project.levels.len(), 1);
        assert_eq!(project.levels[&5].identifier, "Second");
    }

    #[test]
    fn test_ordered_definitions_keep_file_order() {
        let project = parse(sample_project());
        let layer_names: Vec<_> = project.layers.iter().map(|l| l.identifier.as_str()).collect();
        assert_eq!(layer_names, vec!["Foreground", "Background"]);
        assert_eq!(project.layer_def(1).map(|l| l.identifier.as_str()), Some("Background"));
        assert_eq!(project.tileset(90).and_then(|t| t.rel_path.as_deref()), Some("tiles.png"));
    }

    #[test]
    fn test_unmodeled_defs_pass_through() {
        let raw = sample_project();
        let project = parse(raw.clone());
        assert_eq!(project.enums, raw["defs"]["enums"]);
        assert_eq!(project.external_enums, json!([]));
        assert_eq!(project.level_fields, raw["defs"]["levelFields"]);
    }

    #[test]
    fn test_unmodeled_defs_any_shape_or_absent() {
        let mut raw = sample_project();
        let defs = raw["defs"].as_object_mut().unwrap();
        defs.insert("enums".to_string(), json!({ "not": ["an", "array"] }));
        defs.insert("externalEnums".to_string(), json!(42));
        defs.remove("levelFields");
        let project = parse(raw);

        assert_eq!(project.enums, json!({ "not": ["an", "array"] }));
        assert_eq!(project.external_enums, json!(42));
        assert!(project.level_fields.is_null());
    }

    #[test]
    fn test_level_background_stays_raw() {
        let project = parse(sample_project());
        assert_eq!(project.levels[&0].bg_color, "#696A79");
    }

    #[test]
    fn test_bad_background_fails_whole_load() {
        for bad in ["#1E1E2", "1E1E2C", "#1E1E2C0", ""] {
            let mut raw = sample_project();
            raw["bgColor"] = json!(bad);
            assert!(
                serde_json::from_value::<Project>(raw).is_err(),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_bad_background_names_the_field() {
        let mut raw = sample_project();
        raw["bgColor"] = json!("#1E1E2");
        let wire: ProjectJson = serde_json::from_value(raw).unwrap();

        match Project::from_wire(wire) {
            Err(LoadError::Color { field, source }) => {
                assert_eq!(field, "bgColor");
                assert_eq!(source, crate::ColorError::Length("#1E1E2".to_string()));
            }
            other => panic!("expected a color error, got {other:?}"),
        }
    }

    #[test]
    fn test_external_levels_without_layer_data() {
        let mut raw = sample_project();
        raw["externalLevels"] = json!(true);
        for (i, level) in raw["levels"].as_array_mut().unwrap().iter_mut().enumerate() {
            level["externalRelPath"] = json!(format!("world/Level_{i}.ldtkl"));
            level["layerInstances"] = Value::Null;
        }
        let project = parse(raw);

        assert!(project.external_levels);
        assert_eq!(project.levels.len(), 3);
        let hall = project.level(4).unwrap();
        assert!(hall.layer_instances.is_empty());
        assert_eq!(hall.external_rel_path.as_deref(), Some("world/Level_1.ldtkl"));
    }

    #[test]
    fn test_unknown_world_layout_tag() {
        let mut raw = sample_project();
        raw["worldLayout"] = json!("Spiral");
        let project = parse(raw);
        assert_eq!(project.world_layout, "Spiral");
        assert_eq!(project.world_layout(), None);
    }
}
