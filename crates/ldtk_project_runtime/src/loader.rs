//! Asset loader for LDTk project files
//!
//! This module provides a Bevy AssetLoader implementation for `.ldtk` files.
//! When combined with Bevy's `file_watcher` feature (the `hot-reload` feature of
//! this crate), saving the project in LDTk reloads it in the running game.
//!
//! # Example
//!
//! ```rust,ignore
//! use bevy::prelude::*;
//! use ldtk_project_runtime::{LdtkProjectHandle, LdtkProjectPlugin};
//!
//! fn setup(mut commands: Commands, asset_server: Res<AssetServer>) {
//!     commands.spawn(LdtkProjectHandle(asset_server.load("world.ldtk")));
//! }
//! ```

use bevy::asset::io::Reader;
use bevy::asset::{AssetLoader, LoadContext};
use bevy::reflect::TypePath;
use ldtk_project_core::{LoadError, Project};

/// Asset loader for LDTk project JSON files
///
/// Supports the `.ldtk` file extension and produces a [`Project`] asset.
/// Read failures and parse failures are both reported as [`LoadError`].
#[derive(Default, TypePath)]
pub struct LdtkProjectLoader;

impl AssetLoader for LdtkProjectLoader {
    type Asset = Project;
    type Settings = ();
    type Error = LoadError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;

        ldtk_project_core::load_project_from_bytes(&bytes)
    }

    fn extensions(&self) -> &[&str] {
        &["ldtk"]
    }
}
