//! Shared helpers for the loading orchestrator.
//!
//! # Extracted Components
//!
//! - [`validate_inputs`]: Template, item and identifier checks before a run
//! - [`check_feasibility`]: Rejects items no empty container can take
//! - [`container_order`]: Order in which open containers are offered an item
//! - [`volume_utilization`]: Item volume over the volume of the opened containers

use crate::container::{Container, ContainerSpec};
use crate::item::Item;
use crate::placement_engine::PlacementEngine;
use std::collections::HashSet;
use u_loading_core::{ContainerPolicy, EngineRotation, Error, Result};

/// Validates the template and every item, and checks identifiers are unique.
pub fn validate_inputs(items: &[Item], spec: &ContainerSpec) -> Result<()> {
    spec.validate()?;

    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        item.validate()?;
        if !seen.insert(item.id().as_str()) {
            return Err(Error::InvalidItem(format!(
                "Duplicate item id '{}'",
                item.id()
            )));
        }
    }
    Ok(())
}

/// Whether the engine may turn this item during its search.
pub fn engine_may_rotate(item: &Item, mode: EngineRotation) -> bool {
    match mode {
        EngineRotation::Always => true,
        EngineRotation::UnlessPreRotated => !item.is_rotated(),
        EngineRotation::Never => false,
    }
}

/// Fails with [`Error::Unplaceable`] for the first item an empty container would reject.
///
/// Runs after sorting and pre-rotation, so the orientation checked is the one
/// the placement loop will start from.
pub fn check_feasibility(
    items: &[Item],
    spec: &ContainerSpec,
    engine: &PlacementEngine,
    rotation: EngineRotation,
) -> Result<()> {
    let outer = spec.extents();
    for item in items {
        let allow_rotation = engine_may_rotate(item, rotation);
        if !engine.fits_empty(outer, item.extents(), allow_rotation) {
            return Err(Error::Unplaceable {
                item: item.id().clone(),
                reason: format!(
                    "{} exceeds container {} in every allowed orientation",
                    item.extents(),
                    outer
                ),
            });
        }
    }
    Ok(())
}

/// Indices of the open containers in the order they should be tried.
pub fn container_order(containers: &[Container], policy: ContainerPolicy) -> Vec<usize> {
    let mut order: Vec<usize> = (0..containers.len()).collect();
    if policy == ContainerPolicy::BestFit {
        order.sort_by(|&a, &b| {
            containers[b]
                .occupied_voxels()
                .cmp(&containers[a].occupied_voxels())
        });
    }
    order
}

/// Total placed item volume over the total volume of the opened containers.
pub fn volume_utilization(containers: &[Container]) -> f64 {
    let total: u64 = containers.iter().map(Container::volume).sum();
    if total == 0 {
        return 0.0;
    }
    let used: u64 = containers.iter().map(Container::occupied_voxels).sum();
    used as f64 / total as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Extents, Origin};
    use u_loading_core::ScanBounds;

    #[test]
    fn test_validate_inputs_duplicate_ids() {
        let spec = ContainerSpec::new(10, 10, 10);
        let items = vec![Item::new("a", 1, 1, 1, 1.0), Item::new("a", 2, 2, 2, 1.0)];
        let err = validate_inputs(&items, &spec).unwrap_err();
        assert!(matches!(err, Error::InvalidItem(msg) if msg.contains("Duplicate")));
    }

    #[test]
    fn test_validate_inputs_rejects_zero_volume() {
        let spec = ContainerSpec::new(10, 10, 10);
        let items = vec![Item::new("flat", 1, 1, 0, 1.0)];
        assert!(matches!(
            validate_inputs(&items, &spec),
            Err(Error::InvalidItem(_))
        ));
        assert!(matches!(
            validate_inputs(&[], &ContainerSpec::new(0, 1, 1)),
            Err(Error::InvalidContainer(_))
        ));
    }

    #[test]
    fn test_engine_may_rotate() {
        let mut item = Item::new("a", 1, 2, 3, 1.0);
        assert!(engine_may_rotate(&item, EngineRotation::Always));
        assert!(engine_may_rotate(&item, EngineRotation::UnlessPreRotated));
        assert!(!engine_may_rotate(&item, EngineRotation::Never));
        item.rotate();
        assert!(!engine_may_rotate(&item, EngineRotation::UnlessPreRotated));
    }

    #[test]
    fn test_check_feasibility_names_item() {
        let spec = ContainerSpec::new(10, 10, 10);
        let engine = PlacementEngine::default();
        let items = vec![Item::new("ok", 10, 10, 10, 1.0), Item::new("huge", 11, 11, 11, 1.0)];
        let err = check_feasibility(&items, &spec, &engine, EngineRotation::Always).unwrap_err();
        assert_eq!(err.item_id(), Some("huge"));
    }

    #[test]
    fn test_check_feasibility_rotation_modes() {
        let spec = ContainerSpec::new(10, 5, 5);
        let items = vec![Item::new("turn-me", 5, 10, 5, 1.0)];

        let inherited = PlacementEngine::default();
        assert!(check_feasibility(&items, &spec, &inherited, EngineRotation::Always).is_err());

        let wide = PlacementEngine::new(ScanBounds::PerOrientation);
        assert!(check_feasibility(&items, &spec, &wide, EngineRotation::Always).is_ok());
        assert!(check_feasibility(&items, &spec, &wide, EngineRotation::Never).is_err());
    }

    #[test]
    fn test_container_order() {
        let spec = ContainerSpec::new(4, 4, 4);
        let mut containers = vec![
            Container::new(&spec),
            Container::new(&spec),
            Container::new(&spec),
        ];
        containers[1].mark_region(Origin::new(0, 0, 0), Extents::new(4, 4, 2));
        containers[2].mark_region(Origin::new(0, 0, 0), Extents::new(4, 4, 1));

        assert_eq!(
            container_order(&containers, ContainerPolicy::FirstAvailable),
            vec![0, 1, 2]
        );
        assert_eq!(
            container_order(&containers, ContainerPolicy::BestFit),
            vec![1, 2, 0]
        );
    }

    #[test]
    fn test_volume_utilization() {
        assert_eq!(volume_utilization(&[]), 0.0);

        let spec = ContainerSpec::new(2, 2, 2);
        let mut containers = vec![Container::new(&spec), Container::new(&spec)];
        containers[0].mark_region(Origin::new(0, 0, 0), Extents::new(2, 2, 2));
        assert!((volume_utilization(&containers) - 0.5).abs() < 1e-12);
    }
}
