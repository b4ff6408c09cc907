use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use u_facility::facility::place_facilities_with_rng;
use u_facility::grid::Grid;
use u_facility::random::rng_from_seed;
use u_facility::sink::{FrameWriter, NullSink, SnapshotSink, TextRenderer};
use u_facility::Result;

/// Place hospitals on a grid of randomly scattered houses by hill climbing.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of grid rows.
    #[arg(long)]
    height: usize,

    /// Number of grid columns.
    #[arg(long)]
    width: usize,

    /// Number of hospitals to place.
    #[arg(long)]
    hospitals: usize,

    /// Number of houses scattered at random before the search.
    #[arg(long)]
    houses: usize,

    /// Seed for house scattering and the search.
    #[arg(short = 'S', long)]
    seed: Option<u64>,

    /// Write one text frame per snapshot into this directory.
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// File name prefix for frames.
    #[arg(long, default_value = "hospitals")]
    prefix: String,

    /// Print every snapshot to stdout.
    #[arg(long, default_value_t = false)]
    show: bool,

    /// Only log warnings and errors.
    #[arg(short, long, default_value_t = false)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut grid = Grid::new(cli.height, cli.width, cli.hospitals)?;

    // Houses and search draw from one stream so a seed fixes the whole run.
    let mut rng = rng_from_seed(cli.seed);
    grid.populate_random_houses(cli.houses, &mut rng)?;
    info!(
        height = cli.height,
        width = cli.width,
        cells = grid.capacity(),
        hospitals = cli.hospitals,
        houses = grid.houses().len(),
        "grid ready"
    );

    let mut sink: Box<dyn SnapshotSink> = match (&cli.output_dir, cli.show) {
        (Some(dir), _) => {
            info!("writing frames to {}", dir.display());
            Box::new(FrameWriter::new(dir, cli.prefix.clone())?)
        }
        (None, true) => Box::new(TextRenderer::new(io::stdout())),
        (None, false) => Box::new(NullSink),
    };

    let result = place_facilities_with_rng(&mut grid, &mut rng, sink.as_mut())?;

    println!("Initial cost: {}", result.initial_cost);
    println!("Final cost:   {}", result.best_cost);
    println!("Iterations:   {}", result.iterations);
    println!("Hospitals:");
    for cell in grid.facilities() {
        println!("  {}", cell);
    }
    Ok(())
}
