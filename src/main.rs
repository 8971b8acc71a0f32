use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sepiaconv::io::default_output_path;
use sepiaconv::{ConvertConfig, Pipeline};

#[derive(Parser)]
#[command(name = "sepiaconv")]
#[command(about = "Convert an image to sepia using a pool of tile workers")]
struct Cli {
    /// Input image file
    file: PathBuf,

    /// Number of worker threads [default: 4]
    #[arg(long)]
    threads: Option<usize>,

    /// Additional tile divisions per axis; the grid is (subdivs+1)^2 tiles [default: 3]
    #[arg(long)]
    subdivs: Option<u32>,

    /// Output file (default: input name prefixed with "output_")
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Background color for pixels no tile covers, as hex RGB (e.g. "#000000")
    #[arg(long)]
    background: Option<String>,

    /// Remainder strip handling when the image is not divisible by the grid: "leave" or "extend"
    #[arg(long)]
    edges: Option<String>,

    /// YAML config file; command-line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    fn apply_overrides(&self, config: &mut ConvertConfig) {
        if let Some(threads) = self.threads {
            config.threads = threads;
        }
        if let Some(subdivs) = self.subdivs {
            config.subdivs = subdivs;
        }
        if let Some(ref background) = self.background {
            config.background = background.clone();
        }
        if let Some(ref edges) = self.edges {
            config.edges = edges.clone();
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sepiaconv=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let mut config = match cli.config {
        Some(ref path) => ConvertConfig::load(path)?,
        None => ConvertConfig::default(),
    };
    cli.apply_overrides(&mut config);

    let options = config.resolve()?;
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&cli.file));

    let stats = Pipeline::new(options).convert_file(&cli.file, &output)?;

    println!(
        "Image saved as {} ({} tiles, {} threads, {} ms)",
        output.display(),
        stats.tiles,
        stats.workers.len(),
        stats.elapsed.as_millis()
    );

    Ok(())
}
