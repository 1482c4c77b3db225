//! Example demonstrating how to load an LDTk project through the asset server
//!
//! Run with: cargo run -p ldtk_project_runtime --example load_project

use bevy::prelude::*;
use ldtk_project_core::{NeighbourDir, Project};
use ldtk_project_runtime::{LdtkProjectHandle, LdtkProjectPlugin};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "ldtk_project - Load Project Example".to_string(),
                resolution: (800, 600).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(LdtkProjectPlugin)
        .add_systems(Startup, setup)
        .add_systems(Update, describe_world)
        .run();
}

fn setup(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.spawn(Camera2d);
    commands.spawn(LdtkProjectHandle(asset_server.load("sample.ldtk")));
}

/// Log the world layout once the project is available
fn describe_world(
    query: Query<&LdtkProjectHandle>,
    projects: Res<Assets<Project>>,
    mut clear_color: ResMut<ClearColor>,
    mut done: Local<bool>,
) {
    if *done {
        return;
    }
    let Ok(handle) = query.single() else {
        return;
    };
    let Some(project) = projects.get(&handle.0) else {
        return;
    };

    clear_color.0 = project.bg_color.into();

    let mut levels: Vec<_> = project.levels.values().collect();
    levels.sort_by_key(|l| l.uid);
    for level in levels {
        let east: Vec<_> = level.neighbours_towards(NeighbourDir::East).collect();
        info!(
            "{} (uid {}) at {},{} size {}x{}, {} layers, east of it: {:?}",
            level.identifier,
            level.uid,
            level.world_x,
            level.world_y,
            level.px_wid,
            level.px_hei,
            level.layer_instances.len(),
            east
        );
    }
    if let Some(player) = project.entity("Player") {
        info!("Player footprint {}x{}, pivot {:?}", player.width, player.height, player.pivot_px());
    }
    *done = true;
}
