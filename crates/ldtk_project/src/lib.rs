//! LDTk project loading for Rust and Bevy games
//!
//! Re-exports the model and loader from `ldtk_project_core` and, with the
//! default `runtime` feature, the Bevy asset plugin from `ldtk_project_runtime`.
//!
//! ```rust,ignore
//! use bevy::prelude::*;
//! use ldtk_project::prelude::*;
//!
//! App::new()
//!     .add_plugins(DefaultPlugins)
//!     .add_plugins(LdtkProjectPlugin)
//!     .run();
//! ```

pub use ldtk_project_core::*;

#[cfg(feature = "runtime")]
pub use ldtk_project_runtime as runtime;

pub mod prelude {
    pub use ldtk_project_core::{
        load_project, load_project_from_bytes, parse_project, EntityDef, LayerDef, LayerInstance,
        Level, LoadError, Project, Rgba, TilesetDef,
    };

    #[cfg(feature = "runtime")]
    pub use ldtk_project_runtime::prelude::*;
}
