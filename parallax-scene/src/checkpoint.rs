//! Checkpoint directory layout and scanning.
//!
//! Checkpoints live at `<model_path>/point_cloud/iteration_<N>/point_cloud.ply`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory under the model path holding per-iteration checkpoints.
pub const POINT_CLOUD_DIR: &str = "point_cloud";

/// File name of the serialized point set inside an iteration directory.
pub const CHECKPOINT_FILE: &str = "point_cloud.ply";

const ITERATION_PREFIX: &str = "iteration_";

/// Directory of the checkpoint for one iteration.
pub fn iteration_dir(model_path: &Path, iteration: u32) -> PathBuf {
    model_path
        .join(POINT_CLOUD_DIR)
        .join(format!("{ITERATION_PREFIX}{iteration}"))
}

/// Full path of the serialized point set for one iteration.
pub fn checkpoint_file(model_path: &Path, iteration: u32) -> PathBuf {
    iteration_dir(model_path, iteration).join(CHECKPOINT_FILE)
}

/// Find the highest iteration number present under a checkpoint directory.
///
/// Returns `Ok(None)` when the directory does not exist or holds no
/// `iteration_<N>` entries. Entries that do not parse are skipped.
pub fn search_max_iteration(dir: &Path) -> Result<Option<u32>, io::Error> {
    if !dir.exists() {
        return Ok(None);
    }

    let mut max = None;
    for entry in fs::read_dir(dir)? {
        let name = entry?.file_name();
        let Some(name) = name.to_str() else { continue };
        let Some(suffix) = name.strip_prefix(ITERATION_PREFIX) else {
            continue;
        };
        let Ok(iteration) = suffix.parse::<u32>() else {
            continue;
        };
        max = Some(max.map_or(iteration, |m: u32| m.max(iteration)));
    }
    Ok(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TempDir(PathBuf);

    impl TempDir {
        fn new(tag: &str) -> Self {
            let nanos = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos())
                .unwrap_or(0);
            let path = std::env::temp_dir().join(format!(
                "parallax-checkpoint-{tag}-{}-{nanos}",
                std::process::id()
            ));
            fs::create_dir_all(&path).expect("temporary directory created");
            Self(path)
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn test_checkpoint_paths() {
        let model_path = Path::new("/out/run1");
        assert_eq!(
            iteration_dir(model_path, 7000),
            Path::new("/out/run1/point_cloud/iteration_7000")
        );
        assert_eq!(
            checkpoint_file(model_path, 7000),
            Path::new("/out/run1/point_cloud/iteration_7000/point_cloud.ply")
        );
    }

    #[test]
    fn test_search_max_iteration_picks_numeric_max() {
        let dir = TempDir::new("max");
        for name in ["iteration_2", "iteration_10", "iteration_9"] {
            fs::create_dir(dir.0.join(name)).unwrap();
        }

        assert_eq!(search_max_iteration(&dir.0).unwrap(), Some(10));
    }

    #[test]
    fn test_search_max_iteration_skips_junk_entries() {
        let dir = TempDir::new("junk");
        fs::create_dir(dir.0.join("iteration_5")).unwrap();
        fs::create_dir(dir.0.join("iteration_final")).unwrap();
        fs::write(dir.0.join("events.log"), b"").unwrap();

        assert_eq!(search_max_iteration(&dir.0).unwrap(), Some(5));
    }

    #[test]
    fn test_search_max_iteration_missing_dir_is_none() {
        let dir = TempDir::new("missing");
        assert_eq!(
            search_max_iteration(&dir.0.join("point_cloud")).unwrap(),
            None
        );
    }

    #[test]
    fn test_search_max_iteration_empty_dir_is_none() {
        let dir = TempDir::new("empty");
        assert_eq!(search_max_iteration(&dir.0).unwrap(), None);
    }
}
