//! Placement representation for loaded items.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier of an item.
pub type ItemId = String;

/// Where and how one item ended up.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// The ID of the placed item.
    pub item_id: ItemId,

    /// Index of the container (0-based, creation order).
    pub container_index: usize,

    /// Origin voxel (x, y, z).
    pub position: [usize; 3],

    /// Final extents (length, width, height) after rotation.
    pub extents: [usize; 3],

    /// Whether the item ends up turned 90° about the vertical axis.
    pub rotated: bool,

    /// Weight of the item.
    pub weight: f64,
}

impl Placement {
    /// Creates a new placement in container 0.
    pub fn new(item_id: impl Into<ItemId>, x: usize, y: usize, z: usize) -> Self {
        Self {
            item_id: item_id.into(),
            container_index: 0,
            position: [x, y, z],
            extents: [0, 0, 0],
            rotated: false,
            weight: 0.0,
        }
    }

    /// Sets the container index.
    pub fn with_container(mut self, index: usize) -> Self {
        self.container_index = index;
        self
    }

    /// Sets the extents.
    pub fn with_extents(mut self, length: usize, width: usize, height: usize) -> Self {
        self.extents = [length, width, height];
        self
    }

    /// Sets the rotated flag.
    pub fn with_rotated(mut self, rotated: bool) -> Self {
        self.rotated = rotated;
        self
    }

    /// Sets the weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Returns the x coordinate.
    pub fn x(&self) -> usize {
        self.position[0]
    }

    /// Returns the y coordinate.
    pub fn y(&self) -> usize {
        self.position[1]
    }

    /// Returns the z coordinate.
    pub fn z(&self) -> usize {
        self.position[2]
    }

    /// Exclusive upper corner of the occupied region.
    pub fn end(&self) -> [usize; 3] {
        [
            self.position[0] + self.extents[0],
            self.position[1] + self.extents[1],
            self.position[2] + self.extents[2],
        ]
    }

    /// Occupied volume in voxels.
    pub fn volume(&self) -> u64 {
        self.extents.iter().map(|&e| e as u64).product()
    }

    /// Key of the loading sequence: container, then x, y, z.
    pub fn sequence_key(&self) -> (usize, usize, usize, usize) {
        (self.container_index, self.x(), self.y(), self.z())
    }

    /// Returns true if the two placements share at least one voxel.
    pub fn overlaps(&self, other: &Placement) -> bool {
        if self.container_index != other.container_index {
            return false;
        }
        let (a_end, b_end) = (self.end(), other.end());
        (0..3).all(|axis| self.position[axis] < b_end[axis] && other.position[axis] < a_end[axis])
    }
}

/// Placement statistics for a set of placements.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementStats {
    /// Total number of placements.
    pub count: usize,
    /// Number of rotated placements.
    pub rotated_count: usize,
    /// Distribution of placements per container.
    pub container_distribution: HashMap<usize, usize>,
}

impl PlacementStats {
    /// Computes statistics from a set of placements.
    pub fn from_placements(placements: &[Placement]) -> Self {
        let mut stats = Self {
            count: placements.len(),
            ..Default::default()
        };

        for p in placements {
            if p.rotated {
                stats.rotated_count += 1;
            }
            *stats
                .container_distribution
                .entry(p.container_index)
                .or_insert(0) += 1;
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_accessors() {
        let p = Placement::new("7", 10, 20, 30)
            .with_container(2)
            .with_extents(5, 6, 7)
            .with_rotated(true)
            .with_weight(12.5);
        assert_eq!(p.x(), 10);
        assert_eq!(p.y(), 20);
        assert_eq!(p.z(), 30);
        assert_eq!(p.end(), [15, 26, 37]);
        assert_eq!(p.volume(), 210);
        assert_eq!(p.sequence_key(), (2, 10, 20, 30));
    }

    #[test]
    fn test_overlap() {
        let a = Placement::new("a", 0, 0, 0).with_extents(10, 10, 10);
        let touching = Placement::new("b", 10, 0, 0).with_extents(10, 10, 10);
        let crossing = Placement::new("c", 9, 9, 9).with_extents(2, 2, 2);
        let elsewhere = Placement::new("d", 0, 0, 0)
            .with_extents(10, 10, 10)
            .with_container(1);

        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&crossing));
        assert!(!a.overlaps(&elsewhere));
    }

    #[test]
    fn test_placement_stats() {
        let placements = vec![
            Placement::new("a", 0, 0, 0),
            Placement::new("b", 0, 0, 0).with_rotated(true),
            Placement::new("c", 0, 0, 0).with_container(1),
        ];

        let stats = PlacementStats::from_placements(&placements);
        assert_eq!(stats.count, 3);
        assert_eq!(stats.rotated_count, 1);
        assert_eq!(stats.container_distribution.get(&0), Some(&2));
        assert_eq!(stats.container_distribution.get(&1), Some(&1));
    }
}
