//! # U-Loading Core
//!
//! Core types shared by the U-Loading container loading engine.
//!
//! ## Core Components
//!
//! - **Error handling**: `Error`, `Result`
//! - **Configuration**: `Config` with the sort, rotation, scan-bounds and container-policy choices
//! - **Solver trait**: Common interface for loading algorithms, with progress reporting
//! - **Results**: `Placement`, `ContainerSummary`, `LoadReport`
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod placement;
pub mod result;
pub mod solver;

// Re-exports
pub use error::{Error, Result};
pub use placement::{ItemId, Placement, PlacementStats};
pub use result::{ContainerSummary, LoadReport, LoadStats, LoadSummary};
pub use solver::{
    Config, ContainerPolicy, EngineRotation, ProgressCallback, ProgressInfo, ScanBounds, Solver,
    SortStrategy,
};
