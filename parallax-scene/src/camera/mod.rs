//! Camera objects built from dataset records.

mod json;

pub use json::{CameraJson, camera_to_json};

use crate::dataset::CameraInfo;
use glam::{Quat, Vec3};
use std::path::PathBuf;
use tracing::debug;

/// A camera prepared for training or evaluation at one resolution scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub uid: u32,
    pub image_name: String,
    pub image_path: PathBuf,
    /// Camera center in world space.
    pub position: Vec3,
    /// Camera-to-world rotation.
    pub rotation: Quat,
    pub fov_x: f32,
    pub fov_y: f32,
    /// Image width after applying the resolution scale.
    pub width: u32,
    /// Image height after applying the resolution scale.
    pub height: u32,
    /// The scale this camera was built at.
    pub resolution_scale: f32,
}

impl Camera {
    /// Build a camera from a record, scaling the image dimensions.
    ///
    /// The scale multiplies the image dimensions; results are rounded and
    /// clamped to at least one pixel.
    pub fn from_info(info: &CameraInfo, resolution_scale: f32) -> Self {
        Self {
            uid: info.uid,
            image_name: info.image_name.clone(),
            image_path: info.image_path.clone(),
            position: info.position,
            rotation: info.rotation,
            fov_x: info.fov_x,
            fov_y: info.fov_y,
            width: scale_dimension(info.width, resolution_scale),
            height: scale_dimension(info.height, resolution_scale),
            resolution_scale,
        }
    }
}

fn scale_dimension(dim: u32, scale: f32) -> u32 {
    ((dim as f32 * scale).round() as u32).max(1)
}

/// Build the camera list for one resolution scale.
///
/// Output order matches the input record order.
pub fn camera_list_from_infos(infos: &[CameraInfo], resolution_scale: f32) -> Vec<Camera> {
    debug!(
        "Building {} cameras at scale {}",
        infos.len(),
        resolution_scale
    );
    infos
        .iter()
        .map(|info| Camera::from_info(info, resolution_scale))
        .collect()
}
