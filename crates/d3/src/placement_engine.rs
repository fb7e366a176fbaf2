//! First-fit voxel search for a single item in a single container.
//!
//! # Algorithm
//!
//! Candidate origins are scanned with z outermost, then y, then x, each
//! ascending. At every origin the item is tested in its current orientation;
//! if that collides and rotation is allowed, the length/width-swapped extents
//! are tested at the same origin. The first free region wins; there is no
//! best-fit scoring.
//!
//! Scan ranges come from the entering orientation ([`ScanBounds::Inherited`])
//! or from the union of both orientations ([`ScanBounds::PerOrientation`]).
//! Regions poking out of the container are rejected by
//! [`Container::query`], which treats outside voxels as occupied.

use crate::container::Container;
use crate::item::{Extents, Item, Origin};
use u_loading_core::{Result, ScanBounds};

/// Outcome of one (item, container) attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    /// A free region was found.
    Found {
        /// Minimum corner of the region.
        origin: Origin,
        /// Whether the swapped orientation was used.
        rotated: bool,
    },
    /// Every candidate origin collided.
    Exhausted,
}

impl Attempt {
    /// Returns true for [`Attempt::Found`].
    pub fn is_found(&self) -> bool {
        matches!(self, Attempt::Found { .. })
    }
}

/// Highest origins to scan along each axis; None if no origin exists.
fn scan_limits(container: Extents, item: Extents) -> Option<(usize, usize, usize)> {
    Some((
        container.length.checked_sub(item.length)?,
        container.width.checked_sub(item.width)?,
        container.height.checked_sub(item.height)?,
    ))
}

fn merge_limits(
    a: Option<(usize, usize, usize)>,
    b: Option<(usize, usize, usize)>,
) -> Option<(usize, usize, usize)> {
    match (a, b) {
        (Some(a), Some(b)) => Some((a.0.max(b.0), a.1.max(b.1), a.2.max(b.2))),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Exhaustive first-fit search with optional single-axis rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementEngine {
    scan_bounds: ScanBounds,
}

impl Default for PlacementEngine {
    fn default() -> Self {
        Self::new(ScanBounds::default())
    }
}

impl PlacementEngine {
    /// Creates an engine with the given scan-bounds mode.
    pub fn new(scan_bounds: ScanBounds) -> Self {
        Self { scan_bounds }
    }

    /// Returns the scan-bounds mode.
    pub fn scan_bounds(&self) -> ScanBounds {
        self.scan_bounds
    }

    fn limits(
        &self,
        container: Extents,
        item: Extents,
        allow_rotation: bool,
    ) -> Option<(usize, usize, usize)> {
        let base = scan_limits(container, item);
        match self.scan_bounds {
            ScanBounds::Inherited => base,
            ScanBounds::PerOrientation if allow_rotation => {
                merge_limits(base, scan_limits(container, item.rotated()))
            }
            ScanBounds::PerOrientation => base,
        }
    }

    /// Returns true if an empty container with these extents would accept the item.
    pub fn fits_empty(&self, container: Extents, item: Extents, allow_rotation: bool) -> bool {
        if item.fits_within(&container) {
            return true;
        }
        allow_rotation
            && self.scan_bounds == ScanBounds::PerOrientation
            && item.rotated().fits_within(&container)
    }

    /// Searches for the first free region for `extents`. Does not modify the container.
    pub fn find(&self, extents: Extents, container: &Container, allow_rotation: bool) -> Attempt {
        if container.free_voxels() < extents.volume() {
            return Attempt::Exhausted;
        }

        let Some((max_x, max_y, max_z)) = self.limits(container.extents(), extents, allow_rotation)
        else {
            return Attempt::Exhausted;
        };

        let turned = extents.rotated();
        let try_turned = allow_rotation && !extents.is_square_footprint();

        for z in 0..=max_z {
            for y in 0..=max_y {
                for x in 0..=max_x {
                    let origin = Origin::new(x, y, z);
                    if container.is_region_free(origin, extents) {
                        return Attempt::Found {
                            origin,
                            rotated: false,
                        };
                    }
                    if try_turned && container.is_region_free(origin, turned) {
                        return Attempt::Found {
                            origin,
                            rotated: true,
                        };
                    }
                }
            }
        }

        Attempt::Exhausted
    }

    /// Searches and, on success, marks the voxels, positions the item and commits it.
    ///
    /// On [`Attempt::Exhausted`] neither the item nor the container changes.
    pub fn place(
        &self,
        item: &mut Item,
        container: &mut Container,
        container_index: usize,
        allow_rotation: bool,
    ) -> Result<Attempt> {
        let attempt = self.find(item.extents(), container, allow_rotation);

        if let Attempt::Found { origin, rotated } = attempt {
            item.assign(container_index, origin, rotated);
            container.mark_region(origin, item.extents());
            container.commit(item)?;
        }

        Ok(attempt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::ContainerSpec;

    fn container(l: usize, w: usize, h: usize) -> Container {
        Container::new(&ContainerSpec::new(l, w, h))
    }

    #[test]
    fn test_first_origin_in_empty_container() {
        let engine = PlacementEngine::default();
        let c = container(10, 10, 10);
        assert_eq!(
            engine.find(Extents::new(3, 4, 5), &c, true),
            Attempt::Found {
                origin: Origin::new(0, 0, 0),
                rotated: false
            }
        );
    }

    #[test]
    fn test_x_is_filled_before_y_and_z() {
        let engine = PlacementEngine::default();
        let mut c = container(4, 4, 4);
        let mut found = Vec::new();
        for i in 0..4 {
            let mut item = Item::new(format!("{}", i), 2, 2, 2, 1.0);
            let attempt = engine.place(&mut item, &mut c, 0, true).unwrap();
            assert!(attempt.is_found());
            found.push(item.origin().unwrap());
        }
        assert_eq!(
            found,
            vec![
                Origin::new(0, 0, 0),
                Origin::new(2, 0, 0),
                Origin::new(0, 2, 0),
                Origin::new(2, 2, 0),
            ]
        );
    }

    #[test]
    fn test_rotation_at_same_origin() {
        let engine = PlacementEngine::default();
        let mut c = container(6, 6, 1);
        // Leave a 2x6 strip free at x = 4..6.
        c.mark_region(Origin::new(0, 0, 0), Extents::new(4, 6, 1));

        let mut item = Item::new("bar", 6, 2, 1, 1.0);
        // Inherited bounds: x only scans 0..=0 for a 6-long item, and the
        // strip starts at x = 4.
        let attempt = engine.place(&mut item, &mut c, 0, true).unwrap();
        assert_eq!(attempt, Attempt::Exhausted);
        assert!(!item.is_rotated());
        assert!(!item.is_placed());

        let wide = PlacementEngine::new(ScanBounds::PerOrientation);
        let attempt = wide.place(&mut item, &mut c, 0, true).unwrap();
        assert_eq!(
            attempt,
            Attempt::Found {
                origin: Origin::new(4, 0, 0),
                rotated: true
            }
        );
        assert_eq!(item.extents(), Extents::new(2, 6, 1));
        assert!(item.is_rotated());
    }

    #[test]
    fn test_rotation_within_inherited_bounds() {
        let engine = PlacementEngine::default();
        let mut c = container(4, 4, 1);
        // Block the row y = 0..2 at x = 2..4, so a 4x2 bar does not fit at y = 0
        // but a 2x4 bar does at x = 0.
        c.mark_region(Origin::new(2, 0, 0), Extents::new(2, 2, 1));

        let mut item = Item::new("bar", 4, 2, 1, 1.0);
        let attempt = engine.place(&mut item, &mut c, 0, true).unwrap();
        assert_eq!(
            attempt,
            Attempt::Found {
                origin: Origin::new(0, 0, 0),
                rotated: true
            }
        );
        assert_eq!(c.occupied_voxels(), 12);
        assert_eq!(c.item_count(), 1);
    }

    #[test]
    fn test_no_rotation_when_disallowed() {
        let engine = PlacementEngine::default();
        let mut c = container(4, 4, 1);
        c.mark_region(Origin::new(2, 0, 0), Extents::new(2, 2, 1));

        let mut item = Item::new("bar", 4, 2, 1, 1.0);
        let attempt = engine.place(&mut item, &mut c, 0, false).unwrap();
        assert_eq!(
            attempt,
            Attempt::Found {
                origin: Origin::new(0, 2, 0),
                rotated: false
            }
        );
    }

    #[test]
    fn test_exhausted_leaves_container_untouched() {
        let engine = PlacementEngine::default();
        let mut c = container(5, 5, 5);
        c.mark_region(Origin::new(0, 0, 0), Extents::new(5, 5, 3));
        let before = c.occupied_voxels();

        let mut item = Item::new("tall", 1, 1, 3, 1.0);
        assert_eq!(
            engine.place(&mut item, &mut c, 0, true).unwrap(),
            Attempt::Exhausted
        );
        assert_eq!(c.occupied_voxels(), before);
        assert_eq!(c.item_count(), 0);
        assert!(!item.is_placed());
    }

    #[test]
    fn test_oversized_item_has_no_origin() {
        let engine = PlacementEngine::default();
        let c = container(5, 5, 5);
        assert_eq!(engine.find(Extents::new(6, 1, 1), &c, true), Attempt::Exhausted);
    }

    #[test]
    fn test_fits_empty() {
        let engine = PlacementEngine::default();
        let wide = PlacementEngine::new(ScanBounds::PerOrientation);
        let c = Extents::new(10, 5, 5);

        assert!(engine.fits_empty(c, Extents::new(10, 5, 5), true));
        assert!(!engine.fits_empty(c, Extents::new(5, 10, 5), true));
        assert!(wide.fits_empty(c, Extents::new(5, 10, 5), true));
        assert!(!wide.fits_empty(c, Extents::new(5, 10, 5), false));
        assert!(!wide.fits_empty(c, Extents::new(5, 5, 10), true));
    }
}
