//! # U-Loading
//!
//! Heuristic 3D container loading.
//!
//! Given rectangular items and a container template, U-Loading decides a
//! position and orientation for every item, opening as many containers as
//! needed, and reports usage and center of mass per container.
//!
//! ## Quick Start
//!
//! ```rust
//! use u_loading::d3::{ContainerSpec, Item, Loader3D};
//! use u_loading::Solver;
//!
//! let spec = ContainerSpec::new(20, 20, 20);
//! let mut items = vec![
//!     Item::new("1", 10, 10, 10, 5.0),
//!     Item::new("2", 10, 10, 10, 5.0),
//! ];
//!
//! let report = Loader3D::default_config().solve(&mut items, &spec)?;
//! assert_eq!(report.containers_used(), 1);
//! # Ok::<(), u_loading::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support

/// Core types, errors and configuration.
pub use u_loading_core as core;

/// Voxel-based 3D loading.
pub use u_loading_d3 as d3;

// Re-export commonly used types at root level
pub use u_loading_core::{Config, Error, LoadReport, Placement, Result, Solver};
