//! Error types for scene loading and orchestration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or operating a scene.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Point data error: {0}")]
    Data(#[from] parallax_data::DataError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not recognize scene type at {0}")]
    UnrecognizedLayout(PathBuf),

    #[error("No loader registered for {0} layout")]
    NoLoaderRegistered(&'static str),

    #[error("No checkpoints found under {0}")]
    NoCheckpoints(PathBuf),

    #[error("At least one resolution scale is required")]
    NoResolutionScales,

    #[error("Resolution scale must be finite and positive, got {0}")]
    InvalidResolutionScale(f32),

    #[error("Duplicate resolution scale: {0}")]
    DuplicateResolutionScale(f32),

    #[error("Resolution scale {0} was not requested at construction")]
    UnknownResolutionScale(f32),

    #[error("Model error: {0}")]
    Model(String),
}
