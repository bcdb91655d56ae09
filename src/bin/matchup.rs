use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::EnvFilter;

use matchup::attendance::AttendanceModel;
use matchup::io::{format_games, read_games, read_names, write_solution};
use matchup::sa::{AnnealingConfig, AnnealingRunner, Termination};
use matchup::score::duplicates;
use matchup::swap::SwapKind;
use matchup::validate::validate;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Pair up the attendees of every game with as few repeats as possible
    Solve(SolveArg),
    /// Write synthetic attendance data in the round-list format
    Generate(GenerateArg),
}

#[derive(Debug, Args)]
struct SolveArg {
    /// Round list: one game per line, names separated by commas
    #[arg(long, short)]
    input: PathBuf,
    /// Where to write the pairings (stdout if omitted)
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Neighbor move used by the search
    #[arg(long, value_enum, default_value_t = SwapKind::Uniform)]
    strategy: SwapKind,
    /// Random seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// Exponential temperature decay per step
    #[arg(long, default_value_t = 0.999)]
    decay: f64,
    /// Stop once the temperature falls to this value
    #[arg(long, default_value_t = 1e-10)]
    stopping_temperature: f64,
    /// Hard iteration budget (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    max_iterations: usize,
}

#[derive(Debug, Args)]
struct GenerateArg {
    /// Names list: one name per line
    #[arg(long, short)]
    names: PathBuf,
    /// Number of games to generate
    #[arg(long, short, default_value_t = 15)]
    games: usize,
    /// Where to write the round list (stdout if omitted)
    #[arg(long, short)]
    output: Option<PathBuf>,
    /// Random seed for reproducible data
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match Cli::parse().command {
        Command::Solve(arg) => solve(&arg),
        Command::Generate(arg) => generate(&arg),
    }
}

fn output_writer(path: Option<&PathBuf>) -> anyhow::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    })
}

fn solve(arg: &SolveArg) -> anyhow::Result<()> {
    let games = read_games(&arg.input)
        .with_context(|| format!("failed to read games from {}", arg.input.display()))?;
    info!(games = games.len(), strategy = %arg.strategy, "loaded round list");

    let mut config = AnnealingConfig::default()
        .with_decay(arg.decay)
        .with_stopping_temperature(arg.stopping_temperature)
        .with_max_iterations(arg.max_iterations);
    if let Some(seed) = arg.seed {
        config = config.with_seed(seed);
    }

    let result = AnnealingRunner::run(&games, &arg.strategy, &config)?;
    info!("random pairings give {} duplicate pairs", result.initial_score);
    info!(
        "simulated annealing pairings give {} duplicate pairs after {} iterations",
        result.score, result.iterations
    );
    if result.termination != Termination::Converged {
        for (pairing, count) in duplicates(&result.solution) {
            warn!("{pairing} meets {count} times");
        }
    }

    validate(&games, &result.solution).context("optimizer produced an illegal solution")?;

    let mut writer = output_writer(arg.output.as_ref())?;
    write_solution(&mut writer, &result.solution)?;
    writer.flush()?;
    Ok(())
}

fn generate(arg: &GenerateArg) -> anyhow::Result<()> {
    let names = read_names(&arg.names)
        .with_context(|| format!("failed to read names from {}", arg.names.display()))?;
    let mut rng = match arg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let model = AttendanceModel::random(names, &mut rng);
    let games = model.generate_games(arg.games, &mut rng);
    let text = format_games(&games);

    match &arg.output {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => io::stdout().lock().write_all(text.as_bytes())?,
    }
    info!(people = model.len(), games = games.len(), "generated attendance");
    Ok(())
}
