//! Load result representation.

use crate::placement::{ItemId, Placement, PlacementStats};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Statistics for a single container at the end of a run.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContainerSummary {
    /// Index of the container (0-based, creation order).
    pub index: usize,
    /// Number of items committed to this container.
    pub item_count: usize,
    /// Accumulated weight.
    pub weight: f64,
    /// Occupied voxels.
    pub occupied_voxels: u64,
    /// Total voxels.
    pub total_voxels: u64,
    /// Occupied / total voxels (0.0 - 1.0).
    pub usage_ratio: f64,
    /// Weight-weighted center of the committed items; None when no weight was committed.
    pub center_of_mass: Option<[f64; 3]>,
}

impl ContainerSummary {
    /// Returns true if no item went into this container.
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Returns usage as a percentage value.
    pub fn usage_percent(&self) -> f64 {
        self.usage_ratio * 100.0
    }
}

/// Counters collected during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadStats {
    /// Items handed to the run.
    pub items_total: usize,
    /// Items placed.
    pub items_placed: usize,
    /// Containers open at the end of the run.
    pub containers_opened: usize,
    /// Containers opened because every existing one rejected an item.
    pub overflow_containers: usize,
    /// Items turned by the pre-rotation pass.
    pub heuristic_rotations: usize,
    /// Placements that used the engine's swapped orientation.
    pub engine_rotations: usize,
    /// Container trials that ended exhausted.
    pub exhausted_attempts: usize,
}

/// Result of a loading run.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadReport {
    /// Placements in loading-sequence order (container, x, y, z).
    pub placements: Vec<Placement>,

    /// Per-container statistics in creation order.
    pub containers: Vec<ContainerSummary>,

    /// Run counters.
    pub stats: LoadStats,

    /// Total item volume / total volume of the opened containers (0.0 - 1.0).
    pub utilization: f64,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,

    /// Heuristics used for the run.
    pub strategy: Option<String>,
}

impl LoadReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the strategy label.
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }

    /// Returns the number of placed items.
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    /// Returns the number of containers holding at least one item.
    pub fn containers_used(&self) -> usize {
        self.containers.iter().filter(|c| !c.is_empty()).count()
    }

    /// Sum of the container weights.
    pub fn total_weight(&self) -> f64 {
        self.containers.iter().map(|c| c.weight).sum()
    }

    /// Placements of one container, in loading order.
    pub fn placements_in(&self, container: usize) -> impl Iterator<Item = &Placement> + '_ {
        self.placements
            .iter()
            .filter(move |p| p.container_index == container)
    }

    /// Looks up the placement of an item.
    pub fn placement_of(&self, id: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.item_id == id)
    }

    /// Returns true if the placements are in loading-sequence order.
    pub fn is_sequence_sorted(&self) -> bool {
        self.placements
            .windows(2)
            .all(|w| w[0].sequence_key() <= w[1].sequence_key())
    }

    /// Computes placement statistics.
    pub fn placement_stats(&self) -> PlacementStats {
        PlacementStats::from_placements(&self.placements)
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization * 100.0)
    }

    /// Pairs of items that share a voxel. Empty for a valid plan.
    pub fn overlapping_pairs(&self) -> Vec<(ItemId, ItemId)> {
        let mut pairs = Vec::new();
        for (i, a) in self.placements.iter().enumerate() {
            for b in &self.placements[i + 1..] {
                if a.overlaps(b) {
                    pairs.push((a.item_id.clone(), b.item_id.clone()));
                }
            }
        }
        pairs
    }
}

/// Summary statistics for a load report.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadSummary {
    /// Total items requested.
    pub total_requested: usize,
    /// Total items placed.
    pub total_placed: usize,
    /// Utilization percentage.
    pub utilization_percent: f64,
    /// Number of containers used.
    pub containers_used: usize,
    /// Total weight loaded.
    pub total_weight: f64,
    /// Computation time in milliseconds.
    pub time_ms: u64,
    /// Strategy used.
    pub strategy: String,
}

impl From<&LoadReport> for LoadSummary {
    fn from(report: &LoadReport) -> Self {
        Self {
            total_requested: report.stats.items_total,
            total_placed: report.placements.len(),
            utilization_percent: report.utilization * 100.0,
            containers_used: report.containers_used(),
            total_weight: report.total_weight(),
            time_ms: report.computation_time_ms,
            strategy: report
                .strategy
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn summary(index: usize, items: usize, weight: f64) -> ContainerSummary {
        ContainerSummary {
            index,
            item_count: items,
            weight,
            ..Default::default()
        }
    }

    #[test]
    fn test_report_new() {
        let report = LoadReport::new();
        assert!(report.placements.is_empty());
        assert_eq!(report.utilization, 0.0);
        assert_eq!(report.containers_used(), 0);
        assert!(report.is_sequence_sorted());
    }

    #[test]
    fn test_totals() {
        let mut report = LoadReport::new().with_strategy("fit-score/first-fit");
        report.containers = vec![summary(0, 3, 15.0), summary(1, 0, 0.0), summary(2, 1, 2.5)];
        report.utilization = 0.25;

        assert_eq!(report.containers_used(), 2);
        assert_relative_eq!(report.total_weight(), 17.5);
        assert_eq!(report.utilization_percent(), "25.0%");
    }

    #[test]
    fn test_sequence_order_check() {
        let mut report = LoadReport::new();
        report.placements = vec![
            Placement::new("a", 0, 0, 0),
            Placement::new("b", 10, 0, 0),
            Placement::new("c", 0, 0, 0).with_container(1),
        ];
        assert!(report.is_sequence_sorted());
        assert_eq!(report.placements_in(0).count(), 2);
        assert_eq!(report.placement_of("c").map(|p| p.container_index), Some(1));

        report.placements.swap(0, 2);
        assert!(!report.is_sequence_sorted());
    }

    #[test]
    fn test_overlapping_pairs() {
        let mut report = LoadReport::new();
        report.placements = vec![
            Placement::new("a", 0, 0, 0).with_extents(5, 5, 5),
            Placement::new("b", 4, 4, 4).with_extents(5, 5, 5),
            Placement::new("c", 5, 0, 0).with_extents(5, 5, 5),
        ];
        let pairs = report.overlapping_pairs();
        assert_eq!(pairs, vec![("a".to_string(), "b".to_string()), ("b".to_string(), "c".to_string())]);
    }

    #[test]
    fn test_load_summary() {
        let mut report = LoadReport::new();
        report.placements.push(Placement::new("a", 0, 0, 0));
        report.containers.push(summary(0, 1, 5.0));
        report.stats.items_total = 1;
        report.utilization = 0.5;
        report.computation_time_ms = 12;

        let s = LoadSummary::from(&report);
        assert_eq!(s.total_requested, 1);
        assert_eq!(s.total_placed, 1);
        assert_eq!(s.containers_used, 1);
        assert_relative_eq!(s.utilization_percent, 50.0);
        assert_eq!(s.strategy, "unknown");
    }
}
