//! Container template and voxel occupancy model.

use crate::item::{Extents, Item, Origin};
use nalgebra::Vector3;
use u_loading_core::{ContainerSummary, Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dimensions shared by every container of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContainerSpec {
    extents: Extents,
}

impl ContainerSpec {
    /// Creates a new container template with the given dimensions.
    pub fn new(length: usize, width: usize, height: usize) -> Self {
        Self {
            extents: Extents::new(length, width, height),
        }
    }

    /// Returns the extents.
    pub fn extents(&self) -> Extents {
        self.extents
    }

    /// Returns the length (x).
    pub fn length(&self) -> usize {
        self.extents.length
    }

    /// Returns the width (y).
    pub fn width(&self) -> usize {
        self.extents.width
    }

    /// Returns the height (z).
    pub fn height(&self) -> usize {
        self.extents.height
    }

    /// Returns the volume in voxels.
    pub fn volume(&self) -> u64 {
        self.extents.volume()
    }

    /// Checks that every dimension is at least one voxel.
    pub fn validate(&self) -> Result<()> {
        if self.extents.is_degenerate() {
            return Err(Error::InvalidContainer(format!(
                "All dimensions must be positive, got {}",
                self.extents
            )));
        }
        Ok(())
    }
}

/// One container being filled: an occupancy grid plus weight accumulators.
///
/// The grid is stored flat with x varying fastest, matching the scan order of
/// the placement engine.
#[derive(Debug, Clone)]
pub struct Container {
    extents: Extents,
    grid: Vec<bool>,
    occupied: u64,
    weight: f64,
    weighted_sum: Vector3<f64>,
    item_count: usize,
}

impl Container {
    /// Creates an empty container from a template.
    pub fn new(spec: &ContainerSpec) -> Self {
        let extents = spec.extents();
        Self {
            extents,
            grid: vec![false; extents.volume() as usize],
            occupied: 0,
            weight: 0.0,
            weighted_sum: Vector3::zeros(),
            item_count: 0,
        }
    }

    /// Returns the extents.
    pub fn extents(&self) -> Extents {
        self.extents
    }

    /// Returns the length (x).
    pub fn length(&self) -> usize {
        self.extents.length
    }

    /// Returns the width (y).
    pub fn width(&self) -> usize {
        self.extents.width
    }

    /// Returns the height (z).
    pub fn height(&self) -> usize {
        self.extents.height
    }

    /// Total voxels.
    pub fn volume(&self) -> u64 {
        self.extents.volume()
    }

    /// Voxels marked occupied.
    pub fn occupied_voxels(&self) -> u64 {
        self.occupied
    }

    /// Voxels still free.
    pub fn free_voxels(&self) -> u64 {
        self.volume() - self.occupied
    }

    /// Accumulated weight of committed items.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Number of committed items.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Returns true if nothing has been committed.
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    fn index(&self, x: usize, y: usize, z: usize) -> Option<usize> {
        let e = &self.extents;
        if x >= e.length || y >= e.width || z >= e.height {
            return None;
        }
        Some((z * e.width + y) * e.length + x)
    }

    /// Returns true if the voxel is occupied. Coordinates outside the container
    /// count as occupied.
    pub fn query(&self, x: usize, y: usize, z: usize) -> bool {
        match self.index(x, y, z) {
            Some(i) => self.grid[i],
            None => true,
        }
    }

    /// Marks a voxel occupied. Out-of-range coordinates are ignored.
    pub fn mark(&mut self, x: usize, y: usize, z: usize) {
        if let Some(i) = self.index(x, y, z) {
            if !self.grid[i] {
                self.grid[i] = true;
                self.occupied += 1;
            }
        }
    }

    /// Returns true if every voxel of the box at `origin` is free.
    pub fn is_region_free(&self, origin: Origin, extents: Extents) -> bool {
        for z in origin.z..origin.z + extents.height {
            for y in origin.y..origin.y + extents.width {
                for x in origin.x..origin.x + extents.length {
                    if self.query(x, y, z) {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Marks every voxel of the box at `origin` occupied.
    pub fn mark_region(&mut self, origin: Origin, extents: Extents) {
        for z in origin.z..origin.z + extents.height {
            for y in origin.y..origin.y + extents.width {
                for x in origin.x..origin.x + extents.length {
                    self.mark(x, y, z);
                }
            }
        }
    }

    /// Adds a positioned item to the weight and weighted-position accumulators.
    ///
    /// Must be called once per placed item, after its voxels are marked.
    pub fn commit(&mut self, item: &Item) -> Result<()> {
        let center = item.center().ok_or_else(|| {
            Error::Internal(format!("Item '{}' committed without a position", item.id()))
        })?;

        self.weight += item.weight();
        self.weighted_sum += center * item.weight();
        self.item_count += 1;
        Ok(())
    }

    /// Occupied voxels / total voxels.
    pub fn usage_ratio(&self) -> f64 {
        self.occupied as f64 / self.volume() as f64
    }

    /// Counts occupied voxels by scanning the whole grid.
    pub fn count_occupied(&self) -> u64 {
        self.grid.iter().filter(|&&v| v).count() as u64
    }

    /// Weight-weighted mean of the centers of the committed items.
    ///
    /// `index` only labels the error when no weight has been committed.
    pub fn center_of_mass(&self, index: usize) -> Result<Vector3<f64>> {
        if self.item_count == 0 || self.weight <= 0.0 {
            return Err(Error::UndefinedCenterOfMass(index));
        }
        Ok(self.weighted_sum / self.weight)
    }

    /// End-of-run statistics for this container.
    pub fn summary(&self, index: usize) -> ContainerSummary {
        ContainerSummary {
            index,
            item_count: self.item_count,
            weight: self.weight,
            occupied_voxels: self.occupied,
            total_voxels: self.volume(),
            usage_ratio: self.usage_ratio(),
            center_of_mass: self
                .center_of_mass(index)
                .ok()
                .map(|c| [c.x, c.y, c.z]),
        }
    }
}
