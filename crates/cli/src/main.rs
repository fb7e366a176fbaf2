//! U-Loading command-line runner

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use u_loading_cli::{
    parse_dims, print_summary, save_csv, save_json, LoadRunner, Manifest, ManifestParser,
    SamplePreset,
};
use u_loading_core::{Config, ContainerPolicy, EngineRotation, ScanBounds, SortStrategy};

#[derive(Parser)]
#[command(name = "load-runner")]
#[command(about = "Heuristic 3D container loading")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List built-in sample loads
    List,

    /// Load the items of a JSON or CSV manifest
    Run {
        /// Path to the manifest (.json or .csv)
        file: PathBuf,

        /// Override the manifest's container, as LxWxH
        #[arg(long)]
        container: Option<String>,

        #[command(flatten)]
        load: LoadArgs,
    },

    /// Load one of the built-in sample loads
    Sample {
        /// Sample to load
        #[arg(value_enum)]
        preset: PresetArg,

        /// Seed for the random samples
        #[arg(long, default_value = "42")]
        seed: u64,

        #[command(flatten)]
        load: LoadArgs,
    },
}

#[derive(Args)]
struct LoadArgs {
    /// Item ordering before placement
    #[arg(short, long, value_enum, default_value = "fit-score")]
    sort: SortArg,

    /// Order in which open containers are tried
    #[arg(short, long, value_enum, default_value = "first-available")]
    policy: PolicyArg,

    /// Rotation allowed in the placement search
    #[arg(short, long, value_enum, default_value = "always")]
    rotation: RotationArg,

    /// Origin ranges scanned by the placement search
    #[arg(short, long, value_enum, default_value = "inherited")]
    bounds: BoundsArg,

    /// Skip the pre-rotation pass
    #[arg(long)]
    no_pre_rotation: bool,

    /// Fail when more containers than this would be needed
    #[arg(long)]
    max_containers: Option<usize>,

    /// Print every placement, not just container totals
    #[arg(short, long)]
    verbose: bool,

    /// Output file for the report (JSON)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output file for placements (CSV)
    #[arg(long)]
    csv: Option<PathBuf>,
}

impl LoadArgs {
    fn config(&self) -> Config {
        let mut config = Config::new()
            .with_sort(self.sort.into())
            .with_container_policy(self.policy.into())
            .with_engine_rotation(self.rotation.into())
            .with_scan_bounds(self.bounds.into())
            .with_pre_rotation(!self.no_pre_rotation);
        if let Some(max) = self.max_containers {
            config = config.with_max_containers(max);
        }
        config
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    /// Best-fitting items first
    FitScore,
    /// Largest volume first, then length, width and weight
    VolumeDims,
    /// Keep manifest order
    Input,
}

impl From<SortArg> for SortStrategy {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::FitScore => SortStrategy::FitScore,
            SortArg::VolumeDims => SortStrategy::VolumeThenDimensions,
            SortArg::Input => SortStrategy::InputOrder,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    /// Creation order
    FirstAvailable,
    /// Fullest container first
    BestFit,
}

impl From<PolicyArg> for ContainerPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::FirstAvailable => ContainerPolicy::FirstAvailable,
            PolicyArg::BestFit => ContainerPolicy::BestFit,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum RotationArg {
    /// Always try the swapped orientation
    Always,
    /// Not for items the pre-rotation pass already turned
    UnlessPreRotated,
    /// Never
    Never,
}

impl From<RotationArg> for EngineRotation {
    fn from(arg: RotationArg) -> Self {
        match arg {
            RotationArg::Always => EngineRotation::Always,
            RotationArg::UnlessPreRotated => EngineRotation::UnlessPreRotated,
            RotationArg::Never => EngineRotation::Never,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum BoundsArg {
    /// Ranges from the item's incoming orientation
    Inherited,
    /// Ranges from both orientations
    PerOrientation,
}

impl From<BoundsArg> for ScanBounds {
    fn from(arg: BoundsArg) -> Self {
        match arg {
            BoundsArg::Inherited => ScanBounds::Inherited,
            BoundsArg::PerOrientation => ScanBounds::PerOrientation,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PresetArg {
    TwoCubes,
    PerfectFill,
    MixedSizes,
    RandomMedium,
    RandomLarge,
    TenFoot,
}

impl From<PresetArg> for SamplePreset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::TwoCubes => SamplePreset::TwoCubes,
            PresetArg::PerfectFill => SamplePreset::PerfectFill,
            PresetArg::MixedSizes => SamplePreset::MixedSizes,
            PresetArg::RandomMedium => SamplePreset::RandomMedium,
            PresetArg::RandomLarge => SamplePreset::RandomLarge,
            PresetArg::TenFoot => SamplePreset::TenFoot,
        }
    }
}

fn execute(manifest: &Manifest, args: &LoadArgs) -> anyhow::Result<()> {
    let runner = LoadRunner::new(args.config());
    let report = runner.run(manifest)?;

    print_summary(&report, args.verbose);

    if let Some(path) = &args.output {
        save_json(&report, path)?;
        println!("Report saved to: {}", path.display());
    }

    if let Some(path) = &args.csv {
        save_csv(&report, path)?;
        println!("CSV saved to: {}", path.display());
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            println!("Built-in samples:");
            println!("=================");
            for preset in SamplePreset::all() {
                println!("  {:<14} {}", preset.name(), preset.description());
            }
            println!("\nUse 'load-runner sample <NAME>' to run one");
        }

        Commands::Run {
            file,
            container,
            load,
        } => {
            let mut manifest = ManifestParser::new().parse_file(&file)?;
            if let Some(dims) = container {
                manifest.container = parse_dims(&dims)?;
            }
            execute(&manifest, &load)?;
        }

        Commands::Sample { preset, seed, load } => {
            let manifest = SamplePreset::from(preset).build(seed);
            execute(&manifest, &load)?;
        }
    }

    Ok(())
}
