//! Runs manifests through the loader.

use crate::manifest::Manifest;
use std::cell::Cell;
use u_loading_core::{Config, LoadReport, ProgressInfo, Result};
use u_loading_d3::Loader3D;

/// Runs manifests with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct LoadRunner {
    config: Config,
}

impl LoadRunner {
    /// Creates a runner with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Loads every item of the manifest and returns the report.
    ///
    /// Progress is logged at each tenth of the item count.
    pub fn run(&self, manifest: &Manifest) -> Result<LoadReport> {
        let info = manifest.info();
        log::info!(
            "Loading '{}': {} items ({} types) into {}x{}x{}, at least {} containers by volume",
            info.name,
            info.total_items,
            info.item_types,
            manifest.container.length,
            manifest.container.width,
            manifest.container.height,
            info.min_containers
        );

        let mut items = manifest.expand_items();
        let spec = manifest.container.to_spec();
        let loader = Loader3D::new(self.config.clone());

        let last_decile = Cell::new(0u32);
        let progress = |p: ProgressInfo| {
            let decile = (p.fraction() * 10.0).floor() as u32;
            if p.running && decile > last_decile.get() {
                last_decile.set(decile);
                log::info!(
                    "{}% placed ({} / {}), {} containers",
                    decile * 10,
                    p.placed,
                    p.total,
                    p.containers
                );
            }
        };

        let outcome = loader.load_with_progress(&mut items, &spec, &progress)?;
        Ok(outcome.report(&items))
    }
}
