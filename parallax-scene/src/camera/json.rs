//! JSON serialization of camera records for `cameras.json`.

use crate::dataset::CameraInfo;
use glam::Mat3;
use serde::{Deserialize, Serialize};

/// One entry of the `cameras.json` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraJson {
    pub id: u32,
    pub img_name: String,
    pub width: u32,
    pub height: u32,
    pub position: [f32; 3],
    /// Row-major camera-to-world rotation matrix.
    pub rotation: [[f32; 3]; 3],
    pub fx: f32,
    pub fy: f32,
}

/// Serialize a camera record with the sequential id it gets in
/// `cameras.json`.
pub fn camera_to_json(id: u32, info: &CameraInfo) -> CameraJson {
    CameraJson {
        id,
        img_name: info.image_name.clone(),
        width: info.width,
        height: info.height,
        position: info.position.to_array(),
        rotation: rotation_rows(Mat3::from_quat(info.rotation)),
        fx: focal_from_fov(info.fov_x, info.width),
        fy: focal_from_fov(info.fov_y, info.height),
    }
}

/// Focal length in pixels for a field of view spanning `pixels`.
fn focal_from_fov(fov: f32, pixels: u32) -> f32 {
    pixels as f32 / (2.0 * (fov / 2.0).tan())
}

// glam matrices are column-major; cameras.json stores rows.
fn rotation_rows(m: Mat3) -> [[f32; 3]; 3] {
    let c = m.to_cols_array_2d();
    [
        [c[0][0], c[1][0], c[2][0]],
        [c[0][1], c[1][1], c[2][1]],
        [c[0][2], c[1][2], c[2][2]],
    ]
}
