//! PLY point-cloud writing functions.

use crate::error::DataError;
use crate::types::PointCloud;
use glam::Vec3;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Write a point cloud as an ASCII PLY file, truncating any existing file.
pub fn write_points_to_ply<P: AsRef<Path>>(path: P, cloud: &PointCloud) -> Result<(), DataError> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_points(&mut writer, cloud)?;
    writer.flush()?;
    debug!("Wrote {} points to {}", cloud.len(), path.as_ref().display());
    Ok(())
}

/// Write a point cloud as an ASCII PLY document.
///
/// Properties are `x y z nx ny nz red green blue`; points without a normal
/// get a zero normal, colors are quantized to u8.
pub fn write_points(writer: &mut impl Write, cloud: &PointCloud) -> Result<(), DataError> {
    writeln!(writer, "ply")?;
    writeln!(writer, "format ascii 1.0")?;
    writeln!(writer, "element vertex {}", cloud.len())?;
    for name in ["x", "y", "z", "nx", "ny", "nz"] {
        writeln!(writer, "property float {name}")?;
    }
    for name in ["red", "green", "blue"] {
        writeln!(writer, "property uchar {name}")?;
    }
    writeln!(writer, "end_header")?;

    for point in &cloud.points {
        let n = point.normal.unwrap_or(Vec3::ZERO);
        let [r, g, b] = color_to_u8(point.color);
        writeln!(
            writer,
            "{} {} {} {} {} {} {r} {g} {b}",
            point.position.x, point.position.y, point.position.z, n.x, n.y, n.z,
        )?;
    }

    Ok(())
}

fn color_to_u8(color: Vec3) -> [u8; 3] {
    let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}
