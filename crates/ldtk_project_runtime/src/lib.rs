//! Bevy integration for LDTk projects
//!
//! Registers [`Project`] as an asset and loads `.ldtk` files through the
//! asset server. Consumers read the loaded model from `Assets<Project>`.

mod loader;

pub use ldtk_project_core::LoadError;
pub use loader::LdtkProjectLoader;

use bevy::asset::AssetLoadFailedEvent;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use ldtk_project_core::Project;

/// Component holding a handle to a loaded LDTk project
#[derive(Component, Debug, Clone)]
pub struct LdtkProjectHandle(pub Handle<Project>);

impl From<Handle<Project>> for LdtkProjectHandle {
    fn from(handle: Handle<Project>) -> Self {
        Self(handle)
    }
}

/// Plugin that registers the project asset and its loader
pub struct LdtkProjectPlugin;

impl Plugin for LdtkProjectPlugin {
    fn build(&self, app: &mut App) {
        app.init_asset::<Project>()
            .init_asset_loader::<LdtkProjectLoader>()
            .add_systems(Update, (log_loaded_projects, log_failed_projects));
    }
}

/// One-line description of a project, used in load logs
pub fn project_summary(project: &Project) -> String {
    format!(
        "{} levels, {} layer defs, {} entity defs, {} tilesets, layout {}",
        project.levels.len(),
        project.layers.len(),
        project.entities.len(),
        project.tilesets.len(),
        project.world_layout
    )
}

fn log_loaded_projects(
    mut events: MessageReader<AssetEvent<Project>>,
    projects: Res<Assets<Project>>,
) {
    for event in events.read() {
        let (id, verb) = match event {
            AssetEvent::LoadedWithDependencies { id } => (id, "loaded"),
            AssetEvent::Modified { id } => (id, "reloaded"),
            _ => continue,
        };
        if let Some(project) = projects.get(*id) {
            info!("LDTk project {}: {}", verb, project_summary(project));
        }
    }
}

fn log_failed_projects(mut events: MessageReader<AssetLoadFailedEvent<Project>>) {
    for event in events.read() {
        warn!("Failed to load LDTk project '{}': {}", event.path, event.error);
    }
}

pub mod prelude {
    pub use crate::{LdtkProjectHandle, LdtkProjectLoader, LdtkProjectPlugin};
}
