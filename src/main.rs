mod render;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use peerfuse::config::{AppConfig, SimulationConfig};
use peerfuse::error::AppError;
use peerfuse::matching::weights::catalog::{load_configurations, CatalogError};
use peerfuse::matching::weights::{presets, WeightConfiguration};
use peerfuse::matching::{
    generate_population, ConfigurationComparator, MatchFinder, MatchScorer, PopulationSimulator,
    Profile, ProfileId,
};
use peerfuse::telemetry;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "peerfuse-sim",
    about = "Tune study-partner match weights against a synthetic learner population",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare weight configurations on one population (default command)
    Compare(CompareArgs),
    /// Explain the score of two generated profiles
    ScorePair(ScorePairArgs),
    /// Rank the best partners for one generated profile
    TopMatches(TopMatchesArgs),
    /// Check whether mismatch penalties improve a preset
    NegativeMarking(NegativeMarkingArgs),
    /// List the built-in weight presets
    Presets,
}

#[derive(Args, Debug, Default, Clone)]
struct PopulationArgs {
    /// Number of synthetic profiles (overrides PEERFUSE_POPULATION_SIZE)
    #[arg(long)]
    population: Option<usize>,
    /// Generator seed (overrides PEERFUSE_SEED)
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug, Default)]
struct CompareArgs {
    #[command(flatten)]
    population: PopulationArgs,
    /// JSON or CSV weight catalog; defaults to the built-in presets
    #[arg(long)]
    configs: Option<PathBuf>,
    /// Worker threads (overrides PEERFUSE_WORKERS)
    #[arg(long)]
    workers: Option<usize>,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct ScorePairArgs {
    /// Preset name
    #[arg(long, default_value = presets::SKILLS_FIRST)]
    config: String,
    /// Id of the first profile (1-based)
    #[arg(long)]
    first: u32,
    /// Id of the second profile (1-based)
    #[arg(long)]
    second: u32,
    #[command(flatten)]
    population: PopulationArgs,
    /// Print the breakdown as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct TopMatchesArgs {
    /// Preset name
    #[arg(long, default_value = presets::SKILLS_FIRST)]
    config: String,
    /// Id of the profile to find partners for (1-based)
    #[arg(long)]
    profile: u32,
    /// Maximum number of partners to list
    #[arg(long, default_value_t = 10)]
    limit: usize,
    #[command(flatten)]
    population: PopulationArgs,
    /// Print the partners as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct NegativeMarkingArgs {
    /// Baseline preset name
    #[arg(long, default_value = presets::SKILLS_FIRST)]
    config: String,
    #[command(flatten)]
    population: PopulationArgs,
    /// Worker threads (overrides PEERFUSE_WORKERS)
    #[arg(long)]
    workers: Option<usize>,
    /// Print the assessment as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct JsonEnvelope<'a, T: Serialize> {
    generated_at: DateTime<Utc>,
    command: &'static str,
    result: &'a T,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Compare(CompareArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(?config.environment, "peerfuse simulation harness starting");

    match command {
        Command::Compare(args) => run_compare(config.simulation, args),
        Command::ScorePair(args) => run_score_pair(config.simulation, args),
        Command::TopMatches(args) => run_top_matches(config.simulation, args),
        Command::NegativeMarking(args) => run_negative_marking(config.simulation, args),
        Command::Presets => {
            render::render_presets(&presets::catalog()?);
            Ok(())
        }
    }
}

fn apply_overrides(
    mut simulation: SimulationConfig,
    population: &PopulationArgs,
    workers: Option<usize>,
) -> SimulationConfig {
    if let Some(size) = population.population {
        simulation.population_size = size;
    }
    if let Some(seed) = population.seed {
        simulation.seed = seed;
    }
    if workers.is_some() {
        simulation.workers = workers;
    }
    simulation
}

fn comparator_for(simulation: &SimulationConfig) -> Result<ConfigurationComparator, AppError> {
    Ok(ConfigurationComparator::new(
        PopulationSimulator::from_config(simulation)?,
    ))
}

fn resolve_preset(name: &str) -> Result<WeightConfiguration, AppError> {
    presets::find(name)?.ok_or_else(|| CatalogError::UnknownPreset(name.to_string()).into())
}

fn lookup_profile(population: &[Profile], id: u32) -> Result<&Profile, AppError> {
    population
        .iter()
        .find(|profile| profile.id() == ProfileId(id))
        .ok_or(AppError::UnknownProfile {
            id,
            population_size: population.len(),
        })
}

fn print_json<T: Serialize>(command: &'static str, result: &T) -> Result<(), AppError> {
    let envelope = JsonEnvelope {
        generated_at: Utc::now(),
        command,
        result,
    };
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

fn run_compare(simulation: SimulationConfig, args: CompareArgs) -> Result<(), AppError> {
    let simulation = apply_overrides(simulation, &args.population, args.workers);
    let configs = match &args.configs {
        Some(path) => load_configurations(path)?,
        None => presets::catalog()?,
    };

    let comparator = comparator_for(&simulation)?;
    let report =
        comparator.compare_seeded(simulation.seed, simulation.population_size, &configs)?;

    if args.json {
        print_json("compare", &report)
    } else {
        render::render_comparison(&report);
        Ok(())
    }
}

fn run_score_pair(simulation: SimulationConfig, args: ScorePairArgs) -> Result<(), AppError> {
    let simulation = apply_overrides(simulation, &args.population, None);
    let config = resolve_preset(&args.config)?;
    let population = generate_population(simulation.seed, simulation.population_size)?;
    let first = lookup_profile(&population, args.first)?;
    let second = lookup_profile(&population, args.second)?;

    let breakdown = MatchScorer::new(&config).explain(first, second);

    if args.json {
        print_json("score-pair", &breakdown)
    } else {
        render::render_breakdown(&config, first, second, &breakdown);
        Ok(())
    }
}

fn run_top_matches(simulation: SimulationConfig, args: TopMatchesArgs) -> Result<(), AppError> {
    let simulation = apply_overrides(simulation, &args.population, None);
    let config = resolve_preset(&args.config)?;
    let population = generate_population(simulation.seed, simulation.population_size)?;
    let target = lookup_profile(&population, args.profile)?;

    let matches = MatchFinder::new(&config).top(target, &population, args.limit);

    if args.json {
        print_json("top-matches", &matches)
    } else {
        render::render_top_matches(&config, target, &matches);
        Ok(())
    }
}

fn run_negative_marking(
    simulation: SimulationConfig,
    args: NegativeMarkingArgs,
) -> Result<(), AppError> {
    let simulation = apply_overrides(simulation, &args.population, args.workers);
    let baseline = resolve_preset(&args.config)?;
    let population = generate_population(simulation.seed, simulation.population_size)?;

    let assessment =
        comparator_for(&simulation)?.assess_negative_marking(&population, &baseline)?;

    if args.json {
        print_json("negative-marking", &assessment)
    } else {
        render::render_assessment(&assessment);
        Ok(())
    }
}
