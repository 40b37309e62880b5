//! The point-based model interface mutated by the scene orchestrator.

mod point_cloud;

pub use point_cloud::PointCloudModel;

use crate::error::SceneError;
use parallax_data::PointCloud;
use std::path::Path;

/// The narrow contract between the scene orchestrator and a point-based
/// model.
///
/// During scene construction exactly one of [`load`](SceneModel::load) or
/// [`create_from_point_cloud`](SceneModel::create_from_point_cloud) runs,
/// depending on whether a checkpoint is being resumed.
pub trait SceneModel {
    /// Restore persisted state from a checkpoint file.
    fn load(&mut self, path: &Path) -> Result<(), SceneError>;

    /// Initialize fresh state from a point cloud and the scene extent.
    fn create_from_point_cloud(
        &mut self,
        cloud: &PointCloud,
        extent: f32,
    ) -> Result<(), SceneError>;

    /// Persist the current state to the given file.
    fn save(&self, path: &Path) -> Result<(), SceneError>;
}
