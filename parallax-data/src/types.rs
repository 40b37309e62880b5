//! Core point-cloud data types.
//!
//! These are CPU-side representations shared across the parallax crates.

use glam::Vec3;

/// A single point in a point cloud.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Position in world space.
    pub position: Vec3,
    /// RGB color (linear, 0-1 range).
    pub color: Vec3,
    /// Surface normal, if the source provided one.
    pub normal: Option<Vec3>,
}

impl Point {
    /// Create a new point with position and color.
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self {
            position,
            color,
            normal: None,
        }
    }

    /// Create a new point with position, color, and normal.
    pub fn with_normal(position: Vec3, color: Vec3, normal: Vec3) -> Self {
        Self {
            position,
            color,
            normal: Some(normal),
        }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            color: Vec3::splat(0.8),
            normal: None,
        }
    }
}

/// An unordered set of colored points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    pub points: Vec<Point>,
}

impl PointCloud {
    /// Create a point cloud from a list of points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Number of points in the cloud.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the cloud contains no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterator over point positions.
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.points.iter().map(|p| p.position)
    }
}
