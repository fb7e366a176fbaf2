//! Multi-container loading orchestrator.

use crate::container::{Container, ContainerSpec};
use crate::item::Item;
use crate::loading_utils::{
    check_feasibility, container_order, engine_may_rotate, validate_inputs, volume_utilization,
};
use crate::ordering::{pre_rotate, sort_items, sort_loading_sequence};
use crate::placement_engine::{Attempt, PlacementEngine};
use u_loading_core::solver::{Config, ProgressCallback, ProgressInfo, Solver};
use u_loading_core::{Error, LoadReport, LoadStats, Result};

use std::time::Instant;

/// Containers and counters produced by one run.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    /// Containers in creation order.
    pub containers: Vec<Container>,
    /// Run counters.
    pub stats: LoadStats,
    /// Computation time in milliseconds.
    pub computation_time_ms: u64,
    /// Heuristics used.
    pub strategy: String,
}

impl LoadOutcome {
    /// Number of containers opened.
    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    /// Total item volume over the volume of the opened containers.
    pub fn utilization(&self) -> f64 {
        volume_utilization(&self.containers)
    }

    /// Builds the structured report for the items of this run.
    pub fn report(&self, items: &[Item]) -> LoadReport {
        let mut report = LoadReport::new().with_strategy(self.strategy.clone());
        report.placements = items.iter().filter_map(Item::to_placement).collect();
        report.containers = self
            .containers
            .iter()
            .enumerate()
            .map(|(i, c)| c.summary(i))
            .collect();
        report.stats = self.stats;
        report.utilization = self.utilization();
        report.computation_time_ms = self.computation_time_ms;
        report
    }
}

/// 3D container loader: sort, pre-rotate, then first-fit each item into the
/// open containers, opening a new one when all of them are full.
#[derive(Debug, Clone, Default)]
pub struct Loader3D {
    config: Config,
}

impl Loader3D {
    /// Creates a new loader with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a loader with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Places every item, mutating it in place.
    ///
    /// On success the items are reordered into loading sequence and every item
    /// carries its container index, origin and final orientation.
    pub fn load(&self, items: &mut [Item], spec: &ContainerSpec) -> Result<LoadOutcome> {
        self.run(items, spec, &|_: ProgressInfo| {})
    }

    /// Like [`Loader3D::load`], calling `progress` after each item.
    pub fn load_with_progress(
        &self,
        items: &mut [Item],
        spec: &ContainerSpec,
        progress: &dyn Fn(ProgressInfo),
    ) -> Result<LoadOutcome> {
        self.run(items, spec, progress)
    }

    fn run(
        &self,
        items: &mut [Item],
        spec: &ContainerSpec,
        progress: &dyn Fn(ProgressInfo),
    ) -> Result<LoadOutcome> {
        let start = Instant::now();
        self.config.validate()?;
        validate_inputs(items, spec)?;

        let engine = PlacementEngine::new(self.config.scan_bounds);
        let mut stats = LoadStats {
            items_total: items.len(),
            ..Default::default()
        };

        for item in items.iter_mut() {
            item.clear_placement();
        }

        sort_items(items, spec, self.config.sort);
        if self.config.pre_rotation {
            stats.heuristic_rotations = pre_rotate(items, spec);
        }
        check_feasibility(items, spec, &engine, self.config.engine_rotation)?;

        let mut containers = vec![Container::new(spec)];

        for item in items.iter_mut() {
            let allow_rotation = engine_may_rotate(item, self.config.engine_rotation);
            let mut placed = None;

            for index in container_order(&containers, self.config.container_policy) {
                match engine.place(item, &mut containers[index], index, allow_rotation)? {
                    Attempt::Found { rotated, .. } => {
                        placed = Some(rotated);
                        break;
                    }
                    Attempt::Exhausted => stats.exhausted_attempts += 1,
                }
            }

            if placed.is_none() {
                if let Some(max) = self.config.max_containers {
                    if containers.len() >= max {
                        return Err(Error::ContainerLimit(max));
                    }
                }

                let index = containers.len();
                containers.push(Container::new(spec));
                stats.overflow_containers += 1;
                log::debug!("Opened container {} for item '{}'", index + 1, item.id());

                match engine.place(item, &mut containers[index], index, allow_rotation)? {
                    Attempt::Found { rotated, .. } => placed = Some(rotated),
                    Attempt::Exhausted => {
                        return Err(Error::Internal(format!(
                            "Empty container rejected feasible item '{}'",
                            item.id()
                        )))
                    }
                }
            }

            if placed == Some(true) {
                stats.engine_rotations += 1;
            }
            stats.items_placed += 1;

            progress(ProgressInfo {
                placed: stats.items_placed,
                total: stats.items_total,
                containers: containers.len(),
                running: stats.items_placed < stats.items_total,
            });
        }

        sort_loading_sequence(items);
        stats.containers_opened = containers.len();

        let outcome = LoadOutcome {
            containers,
            stats,
            computation_time_ms: start.elapsed().as_millis() as u64,
            strategy: self.config.label(),
        };

        log::info!(
            "Loaded {} items into {} containers ({:.1}% volume used) in {}ms",
            stats.items_placed,
            outcome.container_count(),
            outcome.utilization() * 100.0,
            outcome.computation_time_ms
        );

        Ok(outcome)
    }
}

impl Solver for Loader3D {
    type Item = Item;
    type Template = ContainerSpec;

    fn solve(&self, items: &mut [Item], template: &ContainerSpec) -> Result<LoadReport> {
        let outcome = self.load(items, template)?;
        Ok(outcome.report(items))
    }

    fn solve_with_progress(
        &self,
        items: &mut [Item],
        template: &ContainerSpec,
        callback: ProgressCallback,
    ) -> Result<LoadReport> {
        let outcome = self.load_with_progress(items, template, &*callback)?;
        Ok(outcome.report(items))
    }
}
