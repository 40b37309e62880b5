//! Scene construction and checkpointing.
//!
//! [`Scene::new`] wires a source dataset to a point-based model: it
//! classifies the dataset layout, runs the registered loader, persists the
//! camera metadata and source point cloud for fresh runs, builds per-scale
//! camera lists, and initializes or restores the model.

use crate::camera::{Camera, CameraJson, camera_list_from_infos, camera_to_json};
use crate::checkpoint::{self, POINT_CLOUD_DIR, checkpoint_file, search_max_iteration};
use crate::dataset::{LoaderArgs, LoaderRegistry, SceneDescription, SceneLayout};
use crate::error::SceneError;
use crate::model::SceneModel;
use ordered_float::OrderedFloat;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Name of the point-cloud copy written on fresh training.
const INPUT_PLY: &str = "input.ply";
/// Name of the camera metadata file written on fresh training.
const CAMERAS_JSON: &str = "cameras.json";

/// Model configuration for scene construction.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Root of the source dataset.
    pub source_path: PathBuf,
    /// Output directory owned by the model.
    pub model_path: PathBuf,
    /// Image subfolder name under the source path.
    pub images: String,
    /// Hold out a test split.
    pub eval: bool,
    /// Composite synthetic images onto a white background.
    pub white_background: bool,
}

impl SceneConfig {
    /// Configuration with the conventional `images` subfolder, no test
    /// split, and a black background.
    pub fn new(source_path: impl Into<PathBuf>, model_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            model_path: model_path.into(),
            images: "images".to_string(),
            eval: false,
            white_background: false,
        }
    }
}

/// Which checkpoint to restore at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadIteration {
    /// The highest iteration present under the model path.
    Latest,
    /// A specific iteration.
    At(u32),
}

// Resolved initialization path: restore a checkpoint or start fresh from
// the loaded point cloud. Mutually exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModelSource {
    Resume(u32),
    Fresh,
}

/// Options for [`Scene::new`].
#[derive(Debug, Clone)]
pub struct SceneOptions {
    /// Checkpoint selector; `None` means fresh training.
    pub load_iteration: Option<LoadIteration>,
    /// Seed for shuffling camera order; `None` keeps loader order.
    pub shuffle_seed: Option<u64>,
    /// Resolution scales to build camera lists at.
    pub resolution_scales: Vec<f32>,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            load_iteration: None,
            shuffle_seed: None,
            resolution_scales: vec![1.0],
        }
    }
}

/// A loaded scene: train/test camera lists per resolution scale plus the
/// initialized model.
#[derive(Debug)]
pub struct Scene<M: SceneModel> {
    model: M,
    model_path: PathBuf,
    loaded_iteration: Option<u32>,
    cameras_extent: f32,
    train_cameras: BTreeMap<OrderedFloat<f32>, Vec<Camera>>,
    test_cameras: BTreeMap<OrderedFloat<f32>, Vec<Camera>>,
}

impl<M: SceneModel> Scene<M> {
    /// Load a scene from disk and initialize the model.
    ///
    /// Fails when the source directory matches no recognized layout, no
    /// loader is registered for the detected layout, the iteration selector
    /// cannot be resolved, or a resolution scale is invalid. On fresh runs
    /// the source point cloud and camera metadata are persisted into the
    /// model directory before the model is created.
    #[tracing::instrument(skip_all, fields(source = %config.source_path.display()))]
    pub fn new(
        config: &SceneConfig,
        mut model: M,
        loaders: &LoaderRegistry,
        options: &SceneOptions,
    ) -> Result<Self, SceneError> {
        validate_scales(&options.resolution_scales)?;

        let source = resolve_model_source(&config.model_path, options.load_iteration)?;
        if let ModelSource::Resume(iteration) = source {
            info!("Loading trained model at iteration {}", iteration);
        }

        let layout = SceneLayout::classify(&config.source_path)?
            .ok_or_else(|| SceneError::UnrecognizedLayout(config.source_path.clone()))?;
        info!(
            "Detected {} layout at {}",
            layout.name(),
            config.source_path.display()
        );

        let loader = loaders
            .get(layout)
            .ok_or(SceneError::NoLoaderRegistered(layout.name()))?;
        let args = LoaderArgs {
            source_path: &config.source_path,
            images_subdir: &config.images,
            eval: config.eval,
            white_background: config.white_background,
        };
        let mut description = loader(&args)?;

        if source == ModelSource::Fresh {
            write_scene_metadata(&config.model_path, &description)?;
        }

        if let Some(seed) = options.shuffle_seed {
            let mut rng = StdRng::seed_from_u64(seed);
            description.train_cameras.shuffle(&mut rng);
            description.test_cameras.shuffle(&mut rng);
            debug!("Shuffled camera order with seed {}", seed);
        }

        let cameras_extent = description.normalization.radius;

        let mut train_cameras = BTreeMap::new();
        let mut test_cameras = BTreeMap::new();
        for &scale in &options.resolution_scales {
            info!("Loading training cameras at scale {}", scale);
            train_cameras.insert(
                OrderedFloat(scale),
                camera_list_from_infos(&description.train_cameras, scale),
            );
            info!("Loading test cameras at scale {}", scale);
            test_cameras.insert(
                OrderedFloat(scale),
                camera_list_from_infos(&description.test_cameras, scale),
            );
        }

        let loaded_iteration = match source {
            ModelSource::Resume(iteration) => {
                model.load(&checkpoint_file(&config.model_path, iteration))?;
                Some(iteration)
            }
            ModelSource::Fresh => {
                model.create_from_point_cloud(&description.point_cloud, cameras_extent)?;
                None
            }
        };

        Ok(Self {
            model,
            model_path: config.model_path.clone(),
            loaded_iteration,
            cameras_extent,
            train_cameras,
            test_cameras,
        })
    }

    /// Persist the model to `point_cloud/iteration_<N>/point_cloud.ply`
    /// under the model path, creating directories as needed and overwriting
    /// any previous checkpoint for that iteration.
    pub fn save(&self, iteration: u32) -> Result<(), SceneError> {
        let dir = checkpoint::iteration_dir(&self.model_path, iteration);
        fs::create_dir_all(&dir)?;
        let path = dir.join(checkpoint::CHECKPOINT_FILE);
        self.model.save(&path)?;
        info!(
            "Saved checkpoint for iteration {} to {}",
            iteration,
            path.display()
        );
        Ok(())
    }

    /// Training cameras for one of the requested resolution scales.
    pub fn train_cameras(&self, scale: f32) -> Result<&[Camera], SceneError> {
        lookup_cameras(&self.train_cameras, scale)
    }

    /// Test cameras for one of the requested resolution scales.
    pub fn test_cameras(&self, scale: f32) -> Result<&[Camera], SceneError> {
        lookup_cameras(&self.test_cameras, scale)
    }

    /// Iteration restored at construction, if any.
    pub fn loaded_iteration(&self) -> Option<u32> {
        self.loaded_iteration
    }

    /// Radius of the bounding sphere over the camera positions.
    pub fn cameras_extent(&self) -> f32 {
        self.cameras_extent
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }
}

fn lookup_cameras<'a>(
    map: &'a BTreeMap<OrderedFloat<f32>, Vec<Camera>>,
    scale: f32,
) -> Result<&'a [Camera], SceneError> {
    map.get(&OrderedFloat(scale))
        .map(Vec::as_slice)
        .ok_or(SceneError::UnknownResolutionScale(scale))
}

fn validate_scales(scales: &[f32]) -> Result<(), SceneError> {
    if scales.is_empty() {
        return Err(SceneError::NoResolutionScales);
    }

    let mut seen = BTreeSet::new();
    for &scale in scales {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(SceneError::InvalidResolutionScale(scale));
        }
        if !seen.insert(OrderedFloat(scale)) {
            return Err(SceneError::DuplicateResolutionScale(scale));
        }
    }
    Ok(())
}

fn resolve_model_source(
    model_path: &Path,
    selector: Option<LoadIteration>,
) -> Result<ModelSource, SceneError> {
    match selector {
        None => Ok(ModelSource::Fresh),
        Some(LoadIteration::At(iteration)) => Ok(ModelSource::Resume(iteration)),
        Some(LoadIteration::Latest) => {
            let dir = model_path.join(POINT_CLOUD_DIR);
            match search_max_iteration(&dir)? {
                Some(iteration) => Ok(ModelSource::Resume(iteration)),
                None => Err(SceneError::NoCheckpoints(dir)),
            }
        }
    }
}

// Copies the source point cloud to `input.ply` and dumps every camera to
// `cameras.json`, test cameras first, ids sequential from zero. Fresh
// training only; resumed runs keep the files from the original run.
fn write_scene_metadata(
    model_path: &Path,
    description: &SceneDescription,
) -> Result<(), SceneError> {
    fs::create_dir_all(model_path)?;
    fs::copy(&description.ply_path, model_path.join(INPUT_PLY))?;

    let entries: Vec<CameraJson> = description
        .test_cameras
        .iter()
        .chain(description.train_cameras.iter())
        .enumerate()
        .map(|(id, info)| camera_to_json(id as u32, info))
        .collect();

    let file = File::create(model_path.join(CAMERAS_JSON))?;
    serde_json::to_writer(BufWriter::new(file), &entries)?;
    Ok(())
}
