//! Command-line support for U-Loading.
//!
//! This crate provides:
//! - JSON and CSV manifest parsing
//! - Built-in sample loads
//! - A runner with progress logging
//! - Report printing and JSON/CSV output

mod manifest;
mod parser;
mod presets;
mod report;
mod runner;

pub use manifest::{ContainerDims, ItemLine, Manifest, ManifestInfo};
pub use parser::{parse_dims, ManifestParser, ParseError};
pub use presets::SamplePreset;
pub use report::{format_report, print_summary, save_csv, save_json, to_csv, ReportError};
pub use runner::LoadRunner;
