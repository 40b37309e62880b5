//! Dataset description, layout classification, and the loader registry.

mod description;
mod layout;
mod loader;

pub use description::{CameraInfo, Normalization, SceneDescription};
pub use layout::SceneLayout;
pub use loader::{LoaderArgs, LoaderRegistry, SceneLoader};
