//! Dataset layout classification.
//!
//! Which loader applies is decided from directory markers: a COLMAP
//! reconstruction ships a `sparse` subdirectory, a Blender-style synthetic
//! set ships a `transforms_train.json` file.

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

const COLMAP_MARKER: &str = "sparse";
const BLENDER_MARKER: &str = "transforms_train.json";

/// The closed set of recognized dataset layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneLayout {
    /// COLMAP reconstruction with a `sparse` subdirectory.
    Colmap,
    /// Blender-style synthetic dataset with a `transforms_train.json` file.
    Blender,
}

impl SceneLayout {
    /// Short name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Colmap => "colmap",
            Self::Blender => "blender",
        }
    }

    /// Classify a directory listing given as `(name, is_dir)` pairs.
    ///
    /// COLMAP wins when both markers are present.
    pub fn from_listing<'a, I>(entries: I) -> Option<Self>
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let mut layout = None;
        for (name, is_dir) in entries {
            match (name, is_dir) {
                (COLMAP_MARKER, true) => return Some(Self::Colmap),
                (BLENDER_MARKER, false) => layout = Some(Self::Blender),
                _ => {}
            }
        }
        layout
    }

    /// Classify a source directory on disk.
    pub fn classify(source_path: &Path) -> Result<Option<Self>, io::Error> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(source_path)? {
            let entry = entry?;
            let is_dir = entry.file_type()?.is_dir();
            entries.push((entry.file_name(), is_dir));
        }

        let layout = Self::from_listing(
            entries
                .iter()
                .filter_map(|(name, is_dir)| name.to_str().map(|n| (n, *is_dir))),
        );
        debug!(
            "Classified {} as {:?}",
            source_path.display(),
            layout.map(|l| l.name())
        );
        Ok(layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_directory_means_colmap() {
        let layout = SceneLayout::from_listing([("images", true), ("sparse", true)]);
        assert_eq!(layout, Some(SceneLayout::Colmap));
    }

    #[test]
    fn test_transforms_file_means_blender() {
        let layout = SceneLayout::from_listing([
            ("train", true),
            ("transforms_train.json", false),
            ("transforms_test.json", false),
        ]);
        assert_eq!(layout, Some(SceneLayout::Blender));
    }

    #[test]
    fn test_colmap_wins_when_both_markers_present() {
        let layout =
            SceneLayout::from_listing([("transforms_train.json", false), ("sparse", true)]);
        assert_eq!(layout, Some(SceneLayout::Colmap));
    }

    #[test]
    fn test_markers_of_wrong_kind_are_ignored() {
        // `sparse` must be a directory, `transforms_train.json` a file.
        let layout =
            SceneLayout::from_listing([("sparse", false), ("transforms_train.json", true)]);
        assert_eq!(layout, None);
    }

    #[test]
    fn test_unmarked_listing_is_unrecognized() {
        let layout = SceneLayout::from_listing([("images", true), ("notes.txt", false)]);
        assert_eq!(layout, None);
    }

    #[test]
    fn test_names() {
        assert_eq!(SceneLayout::Colmap.name(), "colmap");
        assert_eq!(SceneLayout::Blender.name(), "blender");
    }
}
