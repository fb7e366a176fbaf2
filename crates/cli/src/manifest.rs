//! Manifest types: a container template plus the items to load into it.

use serde::{Deserialize, Serialize};
use u_loading_d3::{ContainerSpec, Item};

/// Container dimensions in voxels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerDims {
    /// Size along x.
    pub length: usize,
    /// Size along y.
    pub width: usize,
    /// Size along z.
    pub height: usize,
}

impl ContainerDims {
    /// Creates new dimensions.
    pub fn new(length: usize, width: usize, height: usize) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Converts to the loader's template type.
    pub fn to_spec(&self) -> ContainerSpec {
        ContainerSpec::new(self.length, self.width, self.height)
    }

    /// Volume in voxels.
    pub fn volume(&self) -> u64 {
        self.length as u64 * self.width as u64 * self.height as u64
    }
}

fn one() -> usize {
    1
}

fn is_one(n: &usize) -> bool {
    *n == 1
}

/// One line of the manifest: an item type and how many copies to load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemLine {
    /// Optional label; copies are named `<label>-<n>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Size along x.
    pub length: usize,
    /// Size along y.
    pub width: usize,
    /// Size along z.
    pub height: usize,
    /// Weight of one copy.
    pub weight: f64,
    /// Number of copies.
    #[serde(default = "one", skip_serializing_if = "is_one")]
    pub quantity: usize,
}

impl ItemLine {
    /// Creates a line for a single unlabeled item.
    pub fn new(length: usize, width: usize, height: usize, weight: f64) -> Self {
        Self {
            label: None,
            length,
            width,
            height,
            weight,
            quantity: 1,
        }
    }

    /// Sets the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the number of copies.
    pub fn with_quantity(mut self, quantity: usize) -> Self {
        self.quantity = quantity;
        self
    }

    fn volume(&self) -> u64 {
        self.length as u64 * self.width as u64 * self.height as u64
    }
}

/// Summary information about a manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestInfo {
    /// Manifest name.
    pub name: String,
    /// Number of item lines.
    pub item_types: usize,
    /// Items after expanding quantities.
    pub total_items: usize,
    /// Total item volume.
    pub total_item_volume: u64,
    /// Total item weight.
    pub total_weight: f64,
    /// Lower bound on containers needed, by volume alone.
    pub min_containers: u64,
}

/// A parsed loading manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Manifest name.
    pub name: String,
    /// Container template.
    pub container: ContainerDims,
    /// Item lines.
    pub items: Vec<ItemLine>,
}

impl Manifest {
    /// Creates an empty manifest.
    pub fn new(name: impl Into<String>, container: ContainerDims) -> Self {
        Self {
            name: name.into(),
            container,
            items: Vec::new(),
        }
    }

    /// Appends an item line.
    pub fn with_line(mut self, line: ItemLine) -> Self {
        self.items.push(line);
        self
    }

    /// Returns manifest information.
    pub fn info(&self) -> ManifestInfo {
        let total_items = self.items.iter().map(|l| l.quantity).sum();
        let total_item_volume: u64 = self
            .items
            .iter()
            .map(|l| l.volume() * l.quantity as u64)
            .sum();
        let total_weight = self
            .items
            .iter()
            .map(|l| l.weight * l.quantity as f64)
            .sum();
        let container_volume = self.container.volume().max(1);
        ManifestInfo {
            name: self.name.clone(),
            item_types: self.items.len(),
            total_items,
            total_item_volume,
            total_weight,
            min_containers: total_item_volume.div_ceil(container_volume),
        }
    }

    /// Expands item lines by quantity.
    ///
    /// Unlabeled items are numbered from 1 in manifest order; labeled lines
    /// produce `<label>-<n>` (or just `<label>` for a single copy).
    pub fn expand_items(&self) -> Vec<Item> {
        let mut expanded = Vec::new();
        let mut number = 0usize;
        for line in &self.items {
            for copy in 1..=line.quantity {
                number += 1;
                let id = match &line.label {
                    Some(label) if line.quantity == 1 => label.clone(),
                    Some(label) => format!("{}-{}", label, copy),
                    None => number.to_string(),
                };
                expanded.push(Item::new(
                    id,
                    line.length,
                    line.width,
                    line.height,
                    line.weight,
                ));
            }
        }
        expanded
    }
}
