//! PLY point-cloud loading functions.

use crate::error::DataError;
use crate::types::{Point, PointCloud};
use glam::Vec3;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

// PLY file structure; vertex rows keyed by property name.
#[derive(Deserialize, Debug)]
struct PlyFile {
    #[serde(rename = "vertex")]
    vertex: Vec<HashMap<String, JsonValue>>,
}

/// Load a point cloud from a PLY file.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_points_from_ply<P: AsRef<Path>>(path: P) -> Result<PointCloud, DataError> {
    debug!("Loading PLY points from: {}", path.as_ref().display());
    let file = File::open(path.as_ref())?;
    load_points(BufReader::new(file))
}

/// Load a point cloud from any PLY reader.
///
/// Requires `x`/`y`/`z` positions per vertex. Colors come from
/// `red`/`green`/`blue` or `r`/`g`/`b` properties, falling back to grey.
/// Normals come from `nx`/`ny`/`nz` when all three are present.
pub fn load_points<R: Read>(reader: R) -> Result<PointCloud, DataError> {
    let ply_data: PlyFile = serde_ply::from_reader(BufReader::new(reader)).map_err(|e| {
        warn!("Failed to parse PLY file: {}", e);
        DataError::Parse(e.to_string())
    })?;

    info!("PLY file parsed: {} vertices", ply_data.vertex.len());

    fn get_f32(prop: Option<&JsonValue>) -> Option<f32> {
        prop.and_then(|v| match v {
            JsonValue::Number(n) => n.as_f64().map(|f| f as f32),
            _ => None,
        })
    }

    fn get_u8(prop: Option<&JsonValue>) -> Option<u8> {
        prop.and_then(|v| match v {
            JsonValue::Number(n) => n
                .as_u64()
                .map(|u| u as u8)
                .or_else(|| n.as_i64().map(|i| i as u8)),
            _ => None,
        })
    }

    let mut points = Vec::with_capacity(ply_data.vertex.len());

    for (i, vertex) in ply_data.vertex.iter().enumerate() {
        let x = get_f32(vertex.get("x"))
            .ok_or(DataError::MissingProperty { name: "x", index: i })?;
        let y = get_f32(vertex.get("y"))
            .ok_or(DataError::MissingProperty { name: "y", index: i })?;
        let z = get_f32(vertex.get("z"))
            .ok_or(DataError::MissingProperty { name: "z", index: i })?;

        let color = if let (Some(r), Some(g), Some(b)) = (
            get_u8(vertex.get("red")),
            get_u8(vertex.get("green")),
            get_u8(vertex.get("blue")),
        ) {
            Vec3::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
        } else if let (Some(r), Some(g), Some(b)) = (
            get_u8(vertex.get("r")),
            get_u8(vertex.get("g")),
            get_u8(vertex.get("b")),
        ) {
            Vec3::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
        } else {
            Vec3::splat(0.8)
        };

        let normal = match (
            get_f32(vertex.get("nx")),
            get_f32(vertex.get("ny")),
            get_f32(vertex.get("nz")),
        ) {
            (Some(nx), Some(ny), Some(nz)) => Some(Vec3::new(nx, ny, nz)),
            _ => None,
        };

        points.push(Point {
            position: Vec3::new(x, y, z),
            color,
            normal,
        });
    }

    debug!("Loaded {} points from PLY file", points.len());
    Ok(PointCloud::new(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ply_with_body(header_props: &str, count: usize, body: &str) -> Vec<u8> {
        format!(
            "ply\nformat ascii 1.0\nelement vertex {count}\n{header_props}end_header\n{body}"
        )
        .into_bytes()
    }

    #[test]
    fn test_load_points_full_properties() {
        let data = ply_with_body(
            "property float x\nproperty float y\nproperty float z\n\
             property float nx\nproperty float ny\nproperty float nz\n\
             property uchar red\nproperty uchar green\nproperty uchar blue\n",
            2,
            "1 2 3 0 0 1 255 0 0\n-1.5 0.25 4 0 1 0 0 255 0\n",
        );

        let cloud = load_points(Cursor::new(data)).unwrap();
        assert_eq!(cloud.len(), 2);
        assert_eq!(cloud.points[0].position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(cloud.points[0].color, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(cloud.points[0].normal, Some(Vec3::Z));
        assert_eq!(cloud.points[1].position, Vec3::new(-1.5, 0.25, 4.0));
        assert_eq!(cloud.points[1].normal, Some(Vec3::Y));
    }

    #[test]
    fn test_load_points_short_color_names() {
        let data = ply_with_body(
            "property float x\nproperty float y\nproperty float z\n\
             property uchar r\nproperty uchar g\nproperty uchar b\n",
            1,
            "0 0 0 0 0 255\n",
        );

        let cloud = load_points(Cursor::new(data)).unwrap();
        assert_eq!(cloud.points[0].color, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(cloud.points[0].normal, None);
    }

    #[test]
    fn test_load_points_missing_color_defaults_to_grey() {
        let data = ply_with_body(
            "property float x\nproperty float y\nproperty float z\n",
            1,
            "5 6 7\n",
        );

        let cloud = load_points(Cursor::new(data)).unwrap();
        assert_eq!(cloud.points[0].color, Vec3::splat(0.8));
    }

    #[test]
    fn test_load_points_missing_coordinate_fails() {
        let data = ply_with_body(
            "property float y\nproperty float z\n",
            1,
            "6 7\n",
        );

        let err = load_points(Cursor::new(data)).unwrap_err();
        assert!(matches!(
            err,
            DataError::MissingProperty { name: "x", index: 0 }
        ));
    }

    #[test]
    fn test_load_points_garbage_fails_with_parse_error() {
        let err = load_points(Cursor::new(b"not a ply file".to_vec())).unwrap_err();
        assert!(matches!(err, DataError::Parse(_)));
    }
}
