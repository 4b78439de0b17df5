use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use pigeon_smash_core::{
    AppConfig, GameSession, GameState, GestureClassifier, Landmark, NonOverlappingPlacer,
    PlacementRegion, PropCatalog, ReactionMap,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

fn main() -> pigeon_smash_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { input, config } => run_classify(&input, config.as_deref()),
        Commands::Scatter {
            count,
            seed,
            floor,
            padding,
            config,
        } => run_scatter(count, seed, floor, padding, config.as_deref()),
    }
}

/// Replays recorded landmark frames through a game session and prints a
/// summary of the run.
fn run_classify(input: &Path, config: Option<&Path>) -> pigeon_smash_core::Result<()> {
    let config = load_config(config)?;
    tracing::info!(?input, "replaying recorded frames");

    // Frames on disk: array of frames, each an array of hands, each an array
    // of 21 landmarks.
    let frames: Vec<Vec<Vec<Landmark>>> =
        serde_json::from_str(&std::fs::read_to_string(input)?)?;

    let mut session = GameSession::from_parts(
        GestureClassifier::with_config(config.gesture),
        ReactionMap::default_wiring(),
        GameState::new(config.game),
    );

    let mut total_hits = 0;
    for (index, frame) in frames.iter().enumerate() {
        let outcome = session.process_frame(frame)?;
        total_hits += outcome.hits;
        tracing::info!(
            frame = index,
            labels = ?outcome.labels,
            cues = ?outcome.cues,
            phase = ?outcome.phase,
            "frame processed"
        );
    }

    let summary = serde_json::json!({
        "frames": frames.len(),
        "hits": total_hits,
        "phase": session.phase(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

/// Runs the decorative prop scatter and prints the placements.
fn run_scatter(
    count: Option<usize>,
    seed: u64,
    floor: f32,
    padding: f32,
    config: Option<&Path>,
) -> pigeon_smash_core::Result<()> {
    let config = load_config(config)?;
    tracing::info!(seed, floor, padding, "scattering props");

    let placer = NonOverlappingPlacer::with_config(config.placement);
    let region = PlacementRegion::floor_with_padding(floor, floor, padding);
    let mut scatter = config.scatter;
    if let Some(count) = count {
        scatter.count = count;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let batch = PropCatalog::demo_ruins().scatter(&placer, &region, &scatter, &mut rng)?;

    if batch.skipped > 0 {
        tracing::warn!(skipped = batch.skipped, "scatter came up short");
    }
    println!("{}", serde_json::to_string_pretty(&batch)?);
    Ok(())
}

fn load_config(path: Option<&Path>) -> pigeon_smash_core::Result<AppConfig> {
    match path {
        Some(path) => AppConfig::from_json(&std::fs::read_to_string(path)?),
        None => Ok(AppConfig::default()),
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Offline harness for the Pigeon Smash core", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay recorded landmark frames through the gesture classifier and
    /// game state machine.
    Classify {
        /// Path to a JSON file of recorded frames.
        input: PathBuf,
        /// Optional configuration file overriding the default thresholds.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Generate a non-overlapping decorative prop scatter.
    Scatter {
        /// Number of props to place (defaults to the configured count).
        #[arg(short = 'n', long)]
        count: Option<usize>,
        /// RNG seed; the same seed reproduces the same scatter.
        #[arg(short, long, default_value_t = 0)]
        seed: u64,
        /// Floor side length the region is derived from.
        #[arg(long, default_value_t = 20.0)]
        floor: f32,
        /// Edge padding subtracted from every side of the floor.
        #[arg(long, default_value_t = 2.0)]
        padding: f32,
        /// Optional configuration file overriding the default thresholds.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
