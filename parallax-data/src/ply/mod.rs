//! PLY file loading and writing.

mod loader;
mod writer;

pub use loader::{load_points, load_points_from_ply};
pub use writer::{write_points, write_points_to_ply};
