use std::io::Write;
use std::path::PathBuf;

use bingo::{DEFAULT_MAX_NUMBER, DEFAULT_NUMBER_RANGE, DEFAULT_SIZE};
use caller::{play_session, ConsoleObserver, GameSettings, Mode, Recorder, Replay};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// How many numbers are drawn per game at most
    #[arg(short, long, value_enum, default_value_t = Mode::Normal)]
    mode: Mode,

    /// How many games to play. In interactive mode, you are asked after every game instead
    #[arg(short, long = "games", default_value_t = 1)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Number of rows and columns of the card
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Card numbers are picked from 1 up to this number
    #[arg(long, default_value_t = DEFAULT_NUMBER_RANGE)]
    number_range: u32,

    /// Drawn numbers are picked from 1 up to this number
    #[arg(long, default_value_t = DEFAULT_MAX_NUMBER)]
    max_number: u32,

    /// Wait for Enter before every draw
    #[arg(short, long, default_value_t = false)]
    interactive: bool,

    /// Record every finished game as a JSON file into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let settings = GameSettings {
        mode: args.mode,
        size: args.size,
        number_range: args.number_range,
        max_number: args.max_number,
    };
    let mut console = ConsoleObserver::new(
        std::io::stdin().lock(),
        std::io::stdout().lock(),
        args.interactive,
    );

    writeln!(console.output(), "Welcome to Mini Bingo! Mode: {}", settings.mode)?;
    let replay = if args.interactive {
        Replay::Ask
    } else {
        Replay::Fixed {
            num_games: args.num_games,
        }
    };
    let history = play_session(settings, replay, &mut rng, &mut console, &mut recorder)?;

    writeln!(console.output(), "\n{}", history)?;
    if let Some(rec) = &recorder {
        let path = rec.write_history(&history)?;
        info!(path = %path.display(), "Wrote session history");
    }
    writeln!(
        console.output(),
        "\nThe game has finished. Thank you for playing!"
    )?;

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
