use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pointcloud::{
    CanvasConfig, CanvasSurface, ClusterLabels, GeneratorConfig, PointCloud, color_for,
    generate_seeded, load_collection, load_plain, render, save_plain,
};
use std::path::PathBuf;
use tracing::info;

/// Manipulate point clouds
#[derive(Parser, Debug)]
#[command(name = "points")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Make a point cloud
    Generate {
        /// Output filename
        #[arg(long, default_value = "points.txt")]
        output: PathBuf,

        /// Number of clusters
        #[arg(long, default_value_t = 7)]
        clusters: usize,

        /// Minimum cluster size
        #[arg(long, default_value_t = 500)]
        minsize: usize,

        /// Maximum cluster size
        #[arg(long, default_value_t = 5000)]
        maxsize: usize,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Label every point with cluster 0 instead of its cluster index
        #[arg(long)]
        zero_labels: bool,
    },

    /// Display a points file
    Display {
        /// Input filename
        #[arg(long, default_value = "points.txt")]
        input: PathBuf,

        #[command(flatten)]
        canvas: CanvasArgs,
    },

    /// Display a collection of JSON points files
    Collect {
        /// Input filenames
        #[arg(long, num_args = 1.., required = true)]
        input: Vec<PathBuf>,

        #[command(flatten)]
        canvas: CanvasArgs,
    },
}

#[derive(Args, Debug)]
struct CanvasArgs {
    /// PNG written with the rendered points
    #[arg(long, default_value = "points.png")]
    image: PathBuf,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,
}

impl From<CanvasArgs> for CanvasConfig {
    fn from(args: CanvasArgs) -> Self {
        CanvasConfig {
            width: args.width,
            height: args.height,
            output: args.image,
            ..CanvasConfig::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Command::Generate {
            output,
            clusters,
            minsize,
            maxsize,
            seed,
            zero_labels,
        } => {
            let labels = if zero_labels {
                ClusterLabels::Zero
            } else {
                ClusterLabels::Sampled
            };
            let config = GeneratorConfig::new(clusters, minsize, maxsize).labels(labels);

            let cloud = generate_seeded(&config, seed).context("Failed to generate points")?;
            save_plain(&cloud, &output)
                .with_context(|| format!("Failed to write points to {}", output.display()))?;
        }
        Command::Display { input, canvas } => {
            let cloud = load_plain(&input)
                .with_context(|| format!("Failed to load points from {}", input.display()))?;
            show(&cloud, canvas.into())?;
        }
        Command::Collect { input, canvas } => {
            let cloud = load_collection(&input).context("Failed to load point collection")?;
            show(&cloud, canvas.into())?;
        }
    }

    Ok(())
}

fn show(cloud: &PointCloud, config: CanvasConfig) -> Result<()> {
    for (cluster, size) in cloud.cluster_sizes() {
        info!(
            "Cluster {}: {} points ({})",
            cluster,
            size,
            color_for(cluster).name()
        );
    }

    let mut surface = CanvasSurface::new(config).context("Failed to create canvas")?;
    render(cloud, &mut surface).context("Failed to render points")?;
    Ok(())
}

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_target(false)
        .init();
}
