//! # U-Loading 3D
//!
//! Voxel-based 3D container loading for the U-Loading engine.
//!
//! Items are sorted and pre-rotated, then placed one by one with an exhaustive
//! first-fit search over a boolean occupancy grid. Items that fit no open
//! container overflow into a fresh one.

pub mod container;
pub mod item;
pub mod loader;
pub mod loading_utils;
pub mod ordering;
pub mod placement_engine;

// Re-exports
pub use container::{Container, ContainerSpec};
pub use item::{Extents, Item, ItemPlacement, Origin};
pub use loader::{LoadOutcome, Loader3D};
pub use placement_engine::{Attempt, PlacementEngine};
pub use u_loading_core::{Config, Error, LoadReport, Placement, Result, Solver};
