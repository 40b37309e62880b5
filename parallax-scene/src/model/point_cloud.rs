//! A storage-only model backed by a raw point cloud.

use super::SceneModel;
use crate::error::SceneError;
use parallax_data::{PointCloud, load_points_from_ply, write_points_to_ply};
use std::path::Path;
use tracing::info;

/// A minimal [`SceneModel`] that keeps the raw point set.
///
/// It performs no optimization; it exists so checkpoint round-trips can be
/// exercised end to end and as a starting point for real model
/// implementations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloudModel {
    points: PointCloud,
    extent: f32,
}

impl PointCloudModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored point set.
    pub fn points(&self) -> &PointCloud {
        &self.points
    }

    /// Scene extent the model was created with.
    ///
    /// Zero until [`create_from_point_cloud`](SceneModel::create_from_point_cloud)
    /// runs; the extent is not part of the persisted state.
    pub fn extent(&self) -> f32 {
        self.extent
    }
}

impl SceneModel for PointCloudModel {
    fn load(&mut self, path: &Path) -> Result<(), SceneError> {
        self.points = load_points_from_ply(path)?;
        info!(
            "Restored {} points from {}",
            self.points.len(),
            path.display()
        );
        Ok(())
    }

    fn create_from_point_cloud(
        &mut self,
        cloud: &PointCloud,
        extent: f32,
    ) -> Result<(), SceneError> {
        self.points = cloud.clone();
        self.extent = extent;
        info!(
            "Initialized model from {} points, extent {}",
            self.points.len(),
            extent
        );
        Ok(())
    }

    fn save(&self, path: &Path) -> Result<(), SceneError> {
        write_points_to_ply(path, &self.points)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use parallax_data::Point;

    fn test_cloud() -> PointCloud {
        PointCloud::new(vec![
            Point::with_normal(Vec3::new(1.0, 2.0, 3.0), Vec3::new(1.0, 0.0, 0.0), Vec3::Z),
            Point::with_normal(Vec3::new(-0.5, 0.25, 0.0), Vec3::new(0.0, 1.0, 0.0), Vec3::Y),
        ])
    }

    #[test]
    fn test_create_from_point_cloud_stores_state() {
        let mut model = PointCloudModel::new();
        model.create_from_point_cloud(&test_cloud(), 2.5).unwrap();

        assert_eq!(model.points(), &test_cloud());
        assert_eq!(model.extent(), 2.5);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "parallax-model-test-{}-{:?}.ply",
            std::process::id(),
            std::thread::current().id()
        ));

        let mut model = PointCloudModel::new();
        model.create_from_point_cloud(&test_cloud(), 1.0).unwrap();
        model.save(&path).unwrap();

        let mut restored = PointCloudModel::new();
        restored.load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(restored.points(), &test_cloud());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let mut model = PointCloudModel::new();
        let err = model
            .load(Path::new("/nonexistent/parallax/point_cloud.ply"))
            .unwrap_err();
        assert!(matches!(err, SceneError::Data(_)));
    }
}
