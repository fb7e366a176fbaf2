//! Printing and saving load reports.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use thiserror::Error;
use u_loading_core::{LoadReport, LoadSummary};

/// Errors that can occur when writing reports.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Formats the per-item and per-container lines.
///
/// Containers are numbered from 1 in the output.
pub fn format_report(report: &LoadReport) -> String {
    let mut out = String::new();

    for p in &report.placements {
        let _ = writeln!(
            out,
            "#{} in {} @({}, {}, {}) Rotated: {}",
            p.item_id,
            p.container_index + 1,
            p.position[0],
            p.position[1],
            p.position[2],
            p.rotated
        );
    }

    for c in &report.containers {
        let _ = write!(
            out,
            "Container {}: Weight: {}; {:.2}%",
            c.index + 1,
            c.weight,
            c.usage_percent()
        );
        match c.center_of_mass {
            Some([x, y, z]) => {
                let _ = writeln!(out, "; COM ({:.2}, {:.2}, {:.2})", x, y, z);
            }
            None => {
                let _ = writeln!(out, "; COM n/a");
            }
        }
    }

    out
}

/// Prints the full report followed by a one-line summary.
pub fn print_summary(report: &LoadReport, verbose: bool) {
    if verbose {
        print!("{}", format_report(report));
    } else {
        for c in &report.containers {
            println!(
                "Container {}: {} items, Weight: {}; {:.2}%",
                c.index + 1,
                c.item_count,
                c.weight,
                c.usage_percent()
            );
        }
    }

    let summary = LoadSummary::from(report);
    println!();
    println!(
        "{} / {} items in {} containers ({:.2}% utilization) using {} in {} ms",
        summary.total_placed,
        summary.total_requested,
        summary.containers_used,
        summary.utilization_percent,
        summary.strategy,
        summary.time_ms
    );
    println!(
        "Rotations: {} by heuristic, {} by search; {} overflow containers",
        report.stats.heuristic_rotations,
        report.stats.engine_rotations,
        report.stats.overflow_containers
    );
}

/// Renders placements as CSV.
pub fn to_csv(report: &LoadReport) -> String {
    let mut out = String::from("item,container,x,y,z,length,width,height,rotated,weight\n");
    for p in &report.placements {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{}",
            p.item_id,
            p.container_index + 1,
            p.position[0],
            p.position[1],
            p.position[2],
            p.extents[0],
            p.extents[1],
            p.extents[2],
            p.rotated,
            p.weight
        );
    }
    out
}

/// Saves the report as pretty-printed JSON.
pub fn save_json(report: &LoadReport, path: impl AsRef<Path>) -> Result<(), ReportError> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}

/// Saves the placements as CSV.
pub fn save_csv(report: &LoadReport, path: impl AsRef<Path>) -> Result<(), ReportError> {
    fs::write(path, to_csv(report))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use u_loading_core::{ContainerSummary, Placement};

    fn report() -> LoadReport {
        let mut report = LoadReport::new().with_strategy("fit-score/first-fit");
        report.placements = vec![
            Placement::new("1", 0, 0, 0)
                .with_extents(10, 10, 10)
                .with_weight(5.0),
            Placement::new("2", 10, 0, 0)
                .with_extents(10, 10, 10)
                .with_rotated(true)
                .with_weight(5.0),
        ];
        report.containers = vec![
            ContainerSummary {
                index: 0,
                item_count: 2,
                weight: 10.0,
                occupied_voxels: 2000,
                total_voxels: 8000,
                usage_ratio: 0.25,
                center_of_mass: Some([10.0, 5.0, 5.0]),
            },
            ContainerSummary {
                index: 1,
                total_voxels: 8000,
                ..Default::default()
            },
        ];
        report
    }

    #[test]
    fn test_format_report() {
        let text = format_report(&report());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "#1 in 1 @(0, 0, 0) Rotated: false");
        assert_eq!(lines[1], "#2 in 1 @(10, 0, 0) Rotated: true");
        assert_eq!(
            lines[2],
            "Container 1: Weight: 10; 25.00%; COM (10.00, 5.00, 5.00)"
        );
        assert_eq!(lines[3], "Container 2: Weight: 0; 0.00%; COM n/a");
    }

    #[test]
    fn test_to_csv() {
        let csv = to_csv(&report());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("item,container"));
        assert_eq!(lines[2], "2,1,10,0,0,10,10,10,true,5");
    }

    #[test]
    fn test_save_json() {
        let path = std::env::temp_dir().join(format!("u-loading-report-{}.json", std::process::id()));
        save_json(&report(), &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).ok();

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["placements"].as_array().unwrap().len(), 2);
        assert_eq!(value["strategy"], "fit-score/first-fit");
    }
}
