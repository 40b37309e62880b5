//! Scene description types produced by dataset loaders.

use glam::{Quat, Vec3};
use parallax_data::PointCloud;
use std::path::PathBuf;

/// Per-image camera record, immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraInfo {
    pub uid: u32,
    /// Camera center in world space.
    pub position: Vec3,
    /// Camera-to-world rotation.
    pub rotation: Quat,
    /// Horizontal field of view in radians.
    pub fov_x: f32,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Source image width in pixels.
    pub width: u32,
    /// Source image height in pixels.
    pub height: u32,
    pub image_name: String,
    pub image_path: PathBuf,
}

/// Scene normalization record: a bounding sphere over the camera centers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    /// Translation moving the camera centroid to the origin.
    pub translate: Vec3,
    /// Radius of the sphere covering all camera positions.
    pub radius: f32,
}

impl Normalization {
    /// Compute the normalization from camera centers.
    ///
    /// The radius gets a 10% margin so no camera sits exactly on the
    /// sphere. An empty input yields a unit sphere at the origin.
    pub fn from_camera_positions(positions: &[Vec3]) -> Self {
        if positions.is_empty() {
            return Self::default();
        }

        let center = positions.iter().copied().sum::<Vec3>() / positions.len() as f32;
        let max_dist = positions
            .iter()
            .map(|p| p.distance(center))
            .fold(0.0_f32, f32::max);

        Self {
            translate: -center,
            radius: max_dist * 1.1,
        }
    }
}

impl Default for Normalization {
    fn default() -> Self {
        Self {
            translate: Vec3::ZERO,
            radius: 1.0,
        }
    }
}

/// Everything a dataset loader hands back: ordered camera records for the
/// train and test splits, the source point cloud and the file it came from,
/// and the normalization used to scale the scene extent.
#[derive(Debug, Clone)]
pub struct SceneDescription {
    pub train_cameras: Vec<CameraInfo>,
    pub test_cameras: Vec<CameraInfo>,
    pub point_cloud: PointCloud,
    /// Path of the serialized source point set; copied into the model
    /// directory on fresh training.
    pub ply_path: PathBuf,
    pub normalization: Normalization,
}
