//! Loader registry keyed by dataset layout.
//!
//! Dataset parsing itself (COLMAP binary models, Blender transforms files)
//! lives outside this crate; callers register a loader per layout and the
//! scene orchestrator dispatches on the classified layout.

use super::description::SceneDescription;
use super::layout::SceneLayout;
use crate::error::SceneError;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Context handed to a scene loader for one invocation.
#[derive(Debug, Clone, Copy)]
pub struct LoaderArgs<'a> {
    /// Root of the source dataset.
    pub source_path: &'a Path,
    /// Image subfolder name relative to the source path.
    pub images_subdir: &'a str,
    /// Whether to hold out a test split.
    pub eval: bool,
    /// Whether synthetic sets composite onto a white background.
    pub white_background: bool,
}

/// A callback producing a [`SceneDescription`] from a source directory.
pub type SceneLoader =
    Box<dyn Fn(&LoaderArgs<'_>) -> Result<SceneDescription, SceneError> + Send + Sync>;

/// Maps each recognized layout to the loader that reads it.
#[derive(Default)]
pub struct LoaderRegistry {
    loaders: HashMap<SceneLayout, SceneLoader>,
}

impl LoaderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a loader for a layout, replacing any previous entry.
    pub fn register<F>(&mut self, layout: SceneLayout, loader: F)
    where
        F: Fn(&LoaderArgs<'_>) -> Result<SceneDescription, SceneError> + Send + Sync + 'static,
    {
        self.loaders.insert(layout, Box::new(loader));
    }

    /// Look up the loader for a layout.
    pub fn get(&self, layout: SceneLayout) -> Option<&SceneLoader> {
        self.loaders.get(&layout)
    }
}

impl fmt::Debug for LoaderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoaderRegistry")
            .field("layouts", &self.loaders.keys().collect::<Vec<_>>())
            .finish()
    }
}
