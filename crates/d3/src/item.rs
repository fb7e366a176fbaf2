//! Items to be loaded and their oriented extents.

use nalgebra::Vector3;
use u_loading_core::{Error, ItemId, Placement, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned box extents in voxels (length along x, width along y, height along z).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Extents {
    /// Size along x.
    pub length: usize,
    /// Size along y.
    pub width: usize,
    /// Size along z.
    pub height: usize,
}

impl Extents {
    /// Creates new extents.
    pub const fn new(length: usize, width: usize, height: usize) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Volume in voxels.
    pub fn volume(&self) -> u64 {
        self.length as u64 * self.width as u64 * self.height as u64
    }

    /// The same box turned 90° about the vertical axis.
    pub fn rotated(&self) -> Self {
        Self::new(self.width, self.length, self.height)
    }

    /// Returns true if turning about the vertical axis changes nothing.
    pub fn is_square_footprint(&self) -> bool {
        self.length == self.width
    }

    /// Returns true if every axis fits inside `outer` without reorientation.
    pub fn fits_within(&self, outer: &Extents) -> bool {
        self.length <= outer.length && self.width <= outer.width && self.height <= outer.height
    }

    /// Returns true if any axis is zero.
    pub fn is_degenerate(&self) -> bool {
        self.length == 0 || self.width == 0 || self.height == 0
    }

    /// Half of each extent, as real coordinates.
    pub fn half(&self) -> Vector3<f64> {
        Vector3::new(
            self.length as f64 / 2.0,
            self.width as f64 / 2.0,
            self.height as f64 / 2.0,
        )
    }

    /// As an array (length, width, height).
    pub fn to_array(&self) -> [usize; 3] {
        [self.length, self.width, self.height]
    }
}

impl std::fmt::Display for Extents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.length, self.width, self.height)
    }
}

/// Minimum-corner voxel coordinate of a placed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Origin {
    /// X coordinate.
    pub x: usize,
    /// Y coordinate.
    pub y: usize,
    /// Z coordinate.
    pub z: usize,
}

impl Origin {
    /// Creates a new origin.
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// As a real-valued vector.
    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x as f64, self.y as f64, self.z as f64)
    }
}

/// The container an item went into and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemPlacement {
    /// Container index (0-based, creation order).
    pub container: usize,
    /// Minimum corner.
    pub origin: Origin,
}

/// A rectangular item to be loaded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// Unique identifier.
    id: ItemId,

    /// Extents in the current orientation.
    extents: Extents,

    /// Weight (non-negative).
    weight: f64,

    /// Whether the item is turned relative to its input orientation.
    rotated: bool,

    /// Assigned container and origin; None until placed.
    placement: Option<ItemPlacement>,
}

impl Item {
    /// Creates a new item with the given ID, dimensions and weight.
    pub fn new(
        id: impl Into<ItemId>,
        length: usize,
        width: usize,
        height: usize,
        weight: f64,
    ) -> Self {
        Self {
            id: id.into(),
            extents: Extents::new(length, width, height),
            weight,
            rotated: false,
            placement: None,
        }
    }

    /// Returns the identifier.
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Returns the extents in the current orientation.
    pub fn extents(&self) -> Extents {
        self.extents
    }

    /// Returns the length (x extent).
    pub fn length(&self) -> usize {
        self.extents.length
    }

    /// Returns the width (y extent).
    pub fn width(&self) -> usize {
        self.extents.width
    }

    /// Returns the height (z extent).
    pub fn height(&self) -> usize {
        self.extents.height
    }

    /// Returns the weight.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the volume in voxels.
    pub fn volume(&self) -> u64 {
        self.extents.volume()
    }

    /// Returns whether the item is turned relative to its input orientation.
    pub fn is_rotated(&self) -> bool {
        self.rotated
    }

    /// Returns the assigned placement, if any.
    pub fn placement(&self) -> Option<ItemPlacement> {
        self.placement
    }

    /// Returns true once the item has been placed.
    pub fn is_placed(&self) -> bool {
        self.placement.is_some()
    }

    /// Returns the assigned container index, if placed.
    pub fn container(&self) -> Option<usize> {
        self.placement.map(|p| p.container)
    }

    /// Returns the assigned origin, if placed.
    pub fn origin(&self) -> Option<Origin> {
        self.placement.map(|p| p.origin)
    }

    /// Turns the item 90° about the vertical axis.
    pub fn rotate(&mut self) {
        self.extents = self.extents.rotated();
        self.rotated = !self.rotated;
    }

    /// Records a placement; `turned` applies one rotation first.
    pub fn assign(&mut self, container: usize, origin: Origin, turned: bool) {
        if turned {
            self.rotate();
        }
        self.placement = Some(ItemPlacement { container, origin });
    }

    /// Clears the placement, keeping the orientation.
    pub fn clear_placement(&mut self) {
        self.placement = None;
    }

    /// Center of the placed item in container coordinates.
    pub fn center(&self) -> Option<Vector3<f64>> {
        self.origin()
            .map(|origin| origin.to_vector() + self.extents.half())
    }

    /// Converts a placed item into a report placement.
    pub fn to_placement(&self) -> Option<Placement> {
        let placement = self.placement?;
        let o = placement.origin;
        Some(
            Placement::new(self.id.clone(), o.x, o.y, o.z)
                .with_container(placement.container)
                .with_extents(self.extents.length, self.extents.width, self.extents.height)
                .with_rotated(self.rotated)
                .with_weight(self.weight),
        )
    }

    /// Checks that the item describes a physical object.
    pub fn validate(&self) -> Result<()> {
        if self.extents.is_degenerate() {
            return Err(Error::InvalidItem(format!(
                "All dimensions for '{}' must be positive, got {}",
                self.id, self.extents
            )));
        }

        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(Error::InvalidItem(format!(
                "Weight for '{}' must be a non-negative number, got {}",
                self.id, self.weight
            )));
        }

        Ok(())
    }
}
