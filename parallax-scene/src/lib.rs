//! Parallax Scene Crate
//!
//! Scene loading and orchestration for point-based novel-view-synthesis
//! training. This crate classifies dataset layouts on disk, runs the
//! registered dataset loader, manages train/test camera lists per
//! resolution scale, and wires the loaded data to a point-based model.
//!
//! ## Modules
//!
//! - [`dataset`]: scene description types, layout classification, loader registry
//! - [`camera`]: camera objects, per-scale building, JSON serialization
//! - [`model`]: the model interface and a storage-only implementation
//! - [`checkpoint`]: checkpoint directory layout and scanning
//! - [`scene`]: the scene orchestrator

pub mod camera;
pub mod checkpoint;
pub mod dataset;
pub mod error;
pub mod model;
pub mod scene;

pub use camera::{Camera, CameraJson};
pub use dataset::{CameraInfo, LoaderRegistry, Normalization, SceneDescription, SceneLayout};
pub use error::SceneError;
pub use model::{PointCloudModel, SceneModel};
pub use scene::{LoadIteration, Scene, SceneConfig, SceneOptions};
