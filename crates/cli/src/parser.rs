//! Manifest parser for JSON and CSV files.

use crate::manifest::{ContainerDims, ItemLine, Manifest};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when parsing manifests.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid manifest format: {0}")]
    InvalidFormat(String),
}

/// Parser for loading manifests.
#[derive(Debug, Default)]
pub struct ManifestParser;

impl ManifestParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses a manifest file; `.csv` files are read as CSV, anything else as JSON.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Manifest, ParseError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

        if is_csv {
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("manifest");
            self.parse_csv(&content, name)
        } else {
            self.parse_json(&content)
        }
    }

    /// Parses a manifest from a JSON string.
    pub fn parse_json(&self, json: &str) -> Result<Manifest, ParseError> {
        let manifest: Manifest = serde_json::from_str(json)?;
        Ok(manifest)
    }

    /// Parses a manifest from CSV text.
    ///
    /// Layout: an optional header row, one `container,L,W,H` row, then one
    /// row per item line as `length,width,height,weight[,quantity[,label]]`.
    /// Blank lines and lines starting with `#` are ignored.
    pub fn parse_csv(&self, csv: &str, name: &str) -> Result<Manifest, ParseError> {
        let mut container = None;
        let mut items = Vec::new();

        for (number, raw) in csv.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            let row = number + 1;

            if fields[0].eq_ignore_ascii_case("container") {
                if fields.len() != 4 {
                    return Err(ParseError::InvalidFormat(format!(
                        "line {}: container row needs 3 dimensions",
                        row
                    )));
                }
                container = Some(ContainerDims::new(
                    parse_field(fields[1], row)?,
                    parse_field(fields[2], row)?,
                    parse_field(fields[3], row)?,
                ));
                continue;
            }

            if fields[0].eq_ignore_ascii_case("length") {
                continue;
            }

            items.push(parse_item_row(&fields, row)?);
        }

        let container = container.ok_or_else(|| {
            ParseError::InvalidFormat("missing `container,L,W,H` row".to_string())
        })?;

        Ok(Manifest {
            name: name.to_string(),
            container,
            items,
        })
    }
}

/// Parses `LxWxH` (also accepts `,` as separator).
pub fn parse_dims(text: &str) -> Result<ContainerDims, ParseError> {
    let parts: Vec<&str> = text
        .split(|c| c == 'x' || c == 'X' || c == ',')
        .map(str::trim)
        .collect();
    if parts.len() != 3 {
        return Err(ParseError::InvalidFormat(format!(
            "expected LxWxH, got '{}'",
            text
        )));
    }
    let dim = |s: &str| {
        s.parse::<usize>()
            .map_err(|_| ParseError::InvalidFormat(format!("invalid dimension '{}'", s)))
    };
    Ok(ContainerDims::new(dim(parts[0])?, dim(parts[1])?, dim(parts[2])?))
}

fn parse_item_row(fields: &[&str], row: usize) -> Result<ItemLine, ParseError> {
    if !(4..=6).contains(&fields.len()) {
        return Err(ParseError::InvalidFormat(format!(
            "line {}: expected 4 to 6 fields, found {}",
            row,
            fields.len()
        )));
    }

    let weight = fields[3].parse::<f64>().map_err(|_| {
        ParseError::InvalidFormat(format!("line {}: invalid weight '{}'", row, fields[3]))
    })?;
    let mut line = ItemLine::new(
        parse_field(fields[0], row)?,
        parse_field(fields[1], row)?,
        parse_field(fields[2], row)?,
        weight,
    );

    if let Some(quantity) = fields.get(4).filter(|q| !q.is_empty()) {
        line = line.with_quantity(parse_field(quantity, row)?);
    }
    if let Some(label) = fields.get(5).filter(|l| !l.is_empty()) {
        line = line.with_label(*label);
    }
    Ok(line)
}

fn parse_field(text: &str, row: usize) -> Result<usize, ParseError> {
    text.parse::<usize>()
        .map_err(|_| ParseError::InvalidFormat(format!("line {}: invalid number '{}'", row, text)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json() {
        let json = r#"{
            "name": "pallets",
            "container": { "length": 30, "width": 30, "height": 30 },
            "items": [
                { "label": "crate", "length": 10, "width": 10, "height": 10, "weight": 5.0, "quantity": 27 }
            ]
        }"#;
        let manifest = ManifestParser::new().parse_json(json).unwrap();
        assert_eq!(manifest.name, "pallets");
        assert_eq!(manifest.container, ContainerDims::new(30, 30, 30));
        assert_eq!(manifest.expand_items().len(), 27);
    }

    #[test]
    fn test_parse_csv() {
        let csv = "\
# two groups
length,width,height,weight,quantity,label
container,45,40,35
10,9,5,5.0,3
1,2,2,0.5,2,pin

5,4,3,1.5
";
        let manifest = ManifestParser::new().parse_csv(csv, "mixed").unwrap();
        assert_eq!(manifest.name, "mixed");
        assert_eq!(manifest.container, ContainerDims::new(45, 40, 35));
        assert_eq!(manifest.items.len(), 3);
        assert_eq!(manifest.items[0].quantity, 3);
        assert_eq!(manifest.items[1].label.as_deref(), Some("pin"));
        assert_eq!(manifest.items[2].quantity, 1);
        assert_eq!(manifest.info().total_items, 6);
    }

    #[test]
    fn test_csv_missing_container() {
        let err = ManifestParser::new()
            .parse_csv("10,10,10,1.0\n", "x")
            .unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(_)));
    }

    #[test]
    fn test_csv_bad_row() {
        let err = ManifestParser::new()
            .parse_csv("container,10,10,10\n10,ten,10,1.0\n", "x")
            .unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_parse_dims() {
        assert_eq!(parse_dims("284x239x235").unwrap(), ContainerDims::new(284, 239, 235));
        assert_eq!(parse_dims("1, 2, 3").unwrap(), ContainerDims::new(1, 2, 3));
        assert!(parse_dims("10x10").is_err());
        assert!(parse_dims("10xfoox10").is_err());
    }

    #[test]
    fn test_parse_file_by_extension() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("u-loading-parser-{}.csv", std::process::id()));
        fs::write(&path, "container,20,20,20\n10,10,10,5.0,2\n").unwrap();

        let manifest = ManifestParser::new().parse_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(manifest.container.length, 20);
        assert_eq!(manifest.items[0].quantity, 2);
    }
}
