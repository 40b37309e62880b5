//! Parallax Data Crate
//!
//! CPU-side point-cloud types and PLY file I/O for the parallax scene
//! pipeline. This crate is renderer-agnostic and focuses on parsing and
//! persisting point sets.

pub mod error;
pub mod ply;
pub mod types;

pub use error::DataError;
pub use ply::{load_points, load_points_from_ply, write_points, write_points_to_ply};
pub use types::{Point, PointCloud};
