//! Solver traits and configuration.

use crate::result::LoadReport;
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pre-placement ordering of the item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SortStrategy {
    /// Descending by item volume / container volume (stable).
    #[default]
    FitScore,
    /// Descending by volume, then length, width and weight.
    VolumeThenDimensions,
    /// Keep the caller's order.
    InputOrder,
}

/// Order in which existing containers are offered an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ContainerPolicy {
    /// Creation order; the first container that accepts the item wins.
    #[default]
    FirstAvailable,
    /// Fullest container first (by occupied voxels), ties by creation order.
    BestFit,
}

/// Whether the placement engine may swap length and width during its search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EngineRotation {
    /// Test the swapped orientation at every origin where the current one collides.
    #[default]
    Always,
    /// Items already turned by the pre-rotation pass keep their orientation.
    UnlessPreRotated,
    /// Never rotate during the search.
    Never,
}

/// Origin ranges scanned when the rotated orientation is tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ScanBounds {
    /// Ranges sized for the item's entering orientation only.
    #[default]
    Inherited,
    /// Union of the ranges of both orientations.
    PerOrientation,
}

/// Configuration for a loading run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Item ordering applied before placement.
    pub sort: SortStrategy,

    /// Whether the pre-rotation pass runs.
    pub pre_rotation: bool,

    /// Rotation allowed inside the placement search.
    pub engine_rotation: EngineRotation,

    /// Origin ranges used by the placement search.
    pub scan_bounds: ScanBounds,

    /// Container selection policy.
    pub container_policy: ContainerPolicy,

    /// Maximum number of containers (None = unlimited).
    pub max_containers: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sort: SortStrategy::default(),
            pre_rotation: true,
            engine_rotation: EngineRotation::default(),
            scan_bounds: ScanBounds::default(),
            container_policy: ContainerPolicy::default(),
            max_containers: None,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sort strategy.
    pub fn with_sort(mut self, sort: SortStrategy) -> Self {
        self.sort = sort;
        self
    }

    /// Enables or disables the pre-rotation pass.
    pub fn with_pre_rotation(mut self, enabled: bool) -> Self {
        self.pre_rotation = enabled;
        self
    }

    /// Sets the engine rotation mode.
    pub fn with_engine_rotation(mut self, rotation: EngineRotation) -> Self {
        self.engine_rotation = rotation;
        self
    }

    /// Sets the scan bounds mode.
    pub fn with_scan_bounds(mut self, bounds: ScanBounds) -> Self {
        self.scan_bounds = bounds;
        self
    }

    /// Sets the container selection policy.
    pub fn with_container_policy(mut self, policy: ContainerPolicy) -> Self {
        self.container_policy = policy;
        self
    }

    /// Caps the number of containers a run may open.
    pub fn with_max_containers(mut self, max: usize) -> Self {
        self.max_containers = Some(max);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_containers == Some(0) {
            return Err(Error::ConfigError(
                "max_containers must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Short label describing the heuristics in use.
    pub fn label(&self) -> String {
        let sort = match self.sort {
            SortStrategy::FitScore => "fit-score",
            SortStrategy::VolumeThenDimensions => "volume-dims",
            SortStrategy::InputOrder => "input-order",
        };
        let policy = match self.container_policy {
            ContainerPolicy::FirstAvailable => "first-fit",
            ContainerPolicy::BestFit => "best-fit",
        };
        format!("{}/{}", sort, policy)
    }
}

/// Progress callback for long-running operations.
pub type ProgressCallback = Box<dyn Fn(ProgressInfo) + Send + Sync>;

/// Progress information reported after each item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressInfo {
    /// Items placed so far.
    pub placed: usize,
    /// Items in the run.
    pub total: usize,
    /// Containers open so far.
    pub containers: usize,
    /// Whether the run is still in progress.
    pub running: bool,
}

impl ProgressInfo {
    /// Fraction of items placed (1.0 for an empty run).
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.placed as f64 / self.total as f64
        }
    }
}

/// Trait for container loading solvers.
pub trait Solver {
    /// The item type this solver places.
    type Item;
    /// The container template type.
    type Template;

    /// Places every item, mutating it in place, and reports the outcome.
    fn solve(&self, items: &mut [Self::Item], template: &Self::Template) -> Result<LoadReport>;

    /// Solves with a progress callback.
    fn solve_with_progress(
        &self,
        items: &mut [Self::Item],
        template: &Self::Template,
        callback: ProgressCallback,
    ) -> Result<LoadReport>;
}
