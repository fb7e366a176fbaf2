//! Pre-placement ordering heuristics and the final loading sequence.
//!
//! These passes only reorder items or toggle their orientation; none of them
//! reserves space in a container.

use crate::container::ContainerSpec;
use crate::item::{Extents, Item};
use std::cmp::Ordering;
use u_loading_core::SortStrategy;

/// Share of the template volume taken by the item.
pub fn fit_score(item: &Item, spec: &ContainerSpec) -> f64 {
    item.volume() as f64 / spec.volume() as f64
}

/// Sorts items by descending fit score. Equal scores keep their order.
pub fn sort_by_fit_score(items: &mut [Item], spec: &ContainerSpec) {
    items.sort_by(|a, b| fit_score(b, spec).total_cmp(&fit_score(a, spec)));
}

/// Sorts by descending volume, then length, width and weight.
pub fn sort_by_volume_then_dimensions(items: &mut [Item]) {
    items.sort_by(|a, b| {
        b.volume()
            .cmp(&a.volume())
            .then_with(|| b.length().cmp(&a.length()))
            .then_with(|| b.width().cmp(&a.width()))
            .then_with(|| b.weight().total_cmp(&a.weight()))
    });
}

/// Applies the configured ordering.
pub fn sort_items(items: &mut [Item], spec: &ContainerSpec, strategy: SortStrategy) {
    match strategy {
        SortStrategy::FitScore => sort_by_fit_score(items, spec),
        SortStrategy::VolumeThenDimensions => sort_by_volume_then_dimensions(items),
        SortStrategy::InputOrder => {}
    }
}

/// Decides whether one turn helps an item that does not fit as-is.
///
/// Three tests run against the template: as-is, length/width swapped, and
/// height laid along the length axis. Only the length/width swap is ever
/// applied.
pub fn should_rotate(extents: Extents, spec: &ContainerSpec) -> bool {
    let outer = spec.extents();

    if extents.fits_within(&outer) {
        return false;
    }

    if extents.rotated().fits_within(&outer) {
        return true;
    }

    let laid_down = Extents::new(extents.height, extents.width, extents.length);
    laid_down.fits_within(&outer)
}

/// Turns every item for which [`should_rotate`] holds. Returns how many turned.
pub fn pre_rotate(items: &mut [Item], spec: &ContainerSpec) -> usize {
    let mut rotated = 0;
    for item in items.iter_mut() {
        if should_rotate(item.extents(), spec) {
            item.rotate();
            rotated += 1;
        }
    }
    if rotated > 0 {
        log::debug!("Pre-rotation turned {} of {} items", rotated, items.len());
    }
    rotated
}

fn sequence_key(item: &Item) -> Option<(usize, usize, usize, usize)> {
    let placement = item.placement()?;
    let o = placement.origin;
    Some((placement.container, o.x, o.y, o.z))
}

/// Stable sort into unloading order: container, then x, y, z. Unplaced items go last.
pub fn sort_loading_sequence(items: &mut [Item]) {
    items.sort_by(|a, b| match (sequence_key(a), sequence_key(b)) {
        (Some(ka), Some(kb)) => ka.cmp(&kb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
