//! Built-in sample manifests.

use crate::manifest::{ContainerDims, ItemLine, Manifest};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A built-in sample load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplePreset {
    /// Two 10³ cubes in a 20³ container.
    TwoCubes,
    /// 270 10³ cubes filling ten 30³ containers exactly.
    PerfectFill,
    /// Large, medium and small boxes in a 45x40x35 container.
    MixedSizes,
    /// 1000 random items of 5-29 per side in 100x100x55.
    RandomMedium,
    /// 250 random items of 40-54 per side in 100x100x55.
    RandomLarge,
    /// A realistic cargo list for a 10 ft container, in cm and kg.
    TenFoot,
}

impl SamplePreset {
    /// Every preset, in listing order.
    pub fn all() -> [SamplePreset; 6] {
        [
            SamplePreset::TwoCubes,
            SamplePreset::PerfectFill,
            SamplePreset::MixedSizes,
            SamplePreset::RandomMedium,
            SamplePreset::RandomLarge,
            SamplePreset::TenFoot,
        ]
    }

    /// Short name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            SamplePreset::TwoCubes => "two-cubes",
            SamplePreset::PerfectFill => "perfect-fill",
            SamplePreset::MixedSizes => "mixed-sizes",
            SamplePreset::RandomMedium => "random-medium",
            SamplePreset::RandomLarge => "random-large",
            SamplePreset::TenFoot => "ten-foot",
        }
    }

    /// One-line description.
    pub fn description(&self) -> &'static str {
        match self {
            SamplePreset::TwoCubes => "2 cubes of 10 into 20x20x20",
            SamplePreset::PerfectFill => "270 cubes of 10 into 30x30x30 (exactly 10 containers)",
            SamplePreset::MixedSizes => "300 x 10x9x5, 200 x 5x4x3, 2000 x 1x2x2 into 45x40x35",
            SamplePreset::RandomMedium => "1000 random items, 5-29 per side, into 100x100x55",
            SamplePreset::RandomLarge => "250 random items, 40-54 per side, into 100x100x55",
            SamplePreset::TenFoot => "1000 mixed cargo items into a 10 ft container (284x239x235)",
        }
    }

    /// Builds the manifest. `seed` only affects the random presets.
    pub fn build(&self, seed: u64) -> Manifest {
        match self {
            SamplePreset::TwoCubes => uniform("two-cubes", ContainerDims::new(20, 20, 20), 2),
            SamplePreset::PerfectFill => {
                uniform("perfect-fill", ContainerDims::new(30, 30, 30), 270)
            }
            SamplePreset::MixedSizes => Manifest::new("mixed-sizes", ContainerDims::new(45, 40, 35))
                .with_line(ItemLine::new(10, 9, 5, 5.0).with_quantity(300))
                .with_line(ItemLine::new(5, 4, 3, 5.0).with_quantity(200))
                .with_line(ItemLine::new(1, 2, 2, 5.0).with_quantity(2000)),
            SamplePreset::RandomMedium => random(
                "random-medium",
                ContainerDims::new(100, 100, 55),
                1000,
                5..30,
                seed,
            ),
            SamplePreset::RandomLarge => random(
                "random-large",
                ContainerDims::new(100, 100, 55),
                250,
                40..55,
                seed,
            ),
            SamplePreset::TenFoot => ten_foot(),
        }
    }
}

fn uniform(name: &str, container: ContainerDims, count: usize) -> Manifest {
    Manifest::new(name, container).with_line(ItemLine::new(10, 10, 10, 5.0).with_quantity(count))
}

fn random(
    name: &str,
    container: ContainerDims,
    count: usize,
    sides: std::ops::Range<usize>,
    seed: u64,
) -> Manifest {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut manifest = Manifest::new(name, container);
    for _ in 0..count {
        manifest = manifest.with_line(ItemLine::new(
            rng.gen_range(sides.clone()),
            rng.gen_range(sides.clone()),
            rng.gen_range(sides.clone()),
            10.0,
        ));
    }
    manifest
}

fn ten_foot() -> Manifest {
    let cargo: [(&str, usize, [usize; 3], f64); 13] = [
        ("engine", 10, [280, 230, 110], 1000.0),
        ("satellite", 20, [80, 50, 100], 300.0),
        ("tent", 20, [140, 235, 230], 50.0),
        ("radio", 50, [48, 25, 10], 15.0),
        ("fuel-drum", 100, [30, 30, 45], 10.0),
        ("relief-kit", 30, [75, 65, 40], 500.0),
        ("backpack", 50, [70, 45, 30], 20.0),
        ("helmet", 50, [30, 30, 20], 2.0),
        ("armor-plate", 150, [28, 22, 2], 3.0),
        ("ammo-can", 100, [45, 25, 15], 6.0),
        ("rifle-case", 25, [120, 20, 10], 15.0),
        ("ration", 150, [20, 13, 10], 1.0),
        ("misc", 245, [12, 8, 5], 1.0),
    ];

    cargo.iter().fold(
        Manifest::new("ten-foot", ContainerDims::new(284, 239, 235)),
        |manifest, &(label, quantity, [l, w, h], weight)| {
            manifest.with_line(
                ItemLine::new(l, w, h, weight)
                    .with_label(label)
                    .with_quantity(quantity),
            )
        },
    )
}
