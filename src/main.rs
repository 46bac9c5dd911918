use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::{Path, PathBuf};

use dfs_lineups::config::load_config;
use dfs_lineups::export::{read_lineup_sheet, write_lineup_sheet};
use dfs_lineups::output::{format_lineup_summary, should_use_colors};
use dfs_lineups::sampler::{sample_lineups, DEFAULT_MAX_ATTEMPTS};
use dfs_lineups::scoring::{
    filter_eligible, score_slate, validate_scoring, ScoringConfig, DEFAULT_MIN_TOP5_PCT,
};
use dfs_lineups::slate::{latest_slate_in, load_slate};
use dfs_lineups::upload::{load_roster, translate_lineups, write_upload_csv};

const EXIT_SUCCESS: i32 = 0;
const EXIT_CONFIG: i32 = 1;
const EXIT_DATA: i32 = 2;
const EXIT_SAMPLING: i32 = 3;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate salary-cap-valid lineups from a driver slate
    Generate {
        /// Path to the slate CSV (Name, Position, Salary, Projection,
        /// Ceiling, Ceiling-Laps, Top5%)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Directory to scan for the newest slate CSV
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Number of lineups to generate
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..))]
        lineups: u32,

        /// Race length in laps
        #[arg(short, long)]
        laps: u32,

        /// RNG seed for a reproducible run (default: fresh entropy)
        #[arg(long)]
        seed: Option<u64>,

        /// Cap on sampling draws before giving up
        #[arg(long)]
        max_attempts: Option<u64>,

        /// Output CSV path
        #[arg(short, long, default_value = "generated_lineups.csv")]
        out: PathBuf,
    },
    /// Translate a generated lineup sheet into a FanDuel upload CSV
    Upload {
        /// Path to a generated lineups CSV
        #[arg(long)]
        lineups: PathBuf,

        /// Path to the FanDuel player list CSV
        #[arg(long)]
        players: PathBuf,

        /// Output CSV path
        #[arg(short, long, default_value = "fanduel_lineup.csv")]
        out: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[command(name = "dfs-lineups")]
#[command(about = "FanDuel NASCAR lineup generator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/dfs-lineups/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let scoring = config.scoring.clone().unwrap_or_default();
    if let Err(errors) = validate_scoring(&scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let sampler_config = config.sampler.clone().unwrap_or_default();

    let code = match cli.command {
        Commands::Generate {
            data,
            data_dir,
            lineups,
            laps,
            seed,
            max_attempts,
            out,
        } => run_generate(GenerateArgs {
            data,
            data_dir,
            count: lineups,
            laps,
            seed: seed.or(sampler_config.seed),
            max_attempts: max_attempts
                .or(sampler_config.max_attempts)
                .unwrap_or(DEFAULT_MAX_ATTEMPTS),
            out,
            scoring,
            verbose: cli.verbose,
        }),
        Commands::Upload {
            lineups,
            players,
            out,
        } => run_upload(&lineups, &players, &out, cli.verbose),
    };

    std::process::exit(code);
}

struct GenerateArgs {
    data: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    count: u32,
    laps: u32,
    seed: Option<u64>,
    max_attempts: u64,
    out: PathBuf,
    scoring: ScoringConfig,
    verbose: bool,
}

fn run_generate(args: GenerateArgs) -> i32 {
    if args.max_attempts == 0 {
        eprintln!("sampler.max_attempts must be positive");
        return EXIT_CONFIG;
    }

    // Resolve the slate file: an explicit path wins, otherwise the newest
    // CSV in the data directory.
    let slate_path = match (args.data, args.data_dir) {
        (Some(path), _) => path,
        (None, Some(dir)) => match latest_slate_in(&dir) {
            Ok(path) => path,
            Err(e) => {
                eprintln!("Data error: {}", e);
                return EXIT_DATA;
            }
        },
        (None, None) => {
            eprintln!("Select a slate with --data <FILE> or --data-dir <DIR>.");
            return EXIT_CONFIG;
        }
    };

    if args.verbose {
        eprintln!("Slate file: {}", slate_path.display());
    }

    let drivers = match load_slate(&slate_path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Data error: {}", e);
            return EXIT_DATA;
        }
    };

    if args.verbose {
        eprintln!("Loaded {} drivers", drivers.len());
    }

    let min_top5_pct = args.scoring.min_top5_pct.unwrap_or(DEFAULT_MIN_TOP5_PCT);
    let scored = score_slate(drivers, args.laps, &args.scoring);
    let eligible = filter_eligible(scored, min_top5_pct);

    if args.verbose {
        eprintln!(
            "{} drivers eligible (Top5% >= {})",
            eligible.len(),
            min_top5_pct
        );
        if let Some(seed) = args.seed {
            eprintln!("Seed: {}", seed);
        }
    }

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let lineups = match sample_lineups(&eligible, args.count, args.max_attempts, &mut rng) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Sampling failed: {}", e);
            return EXIT_SAMPLING;
        }
    };

    println!("{}", format_lineup_summary(&lineups, should_use_colors()));

    if let Err(e) = write_lineup_sheet(&args.out, &lineups) {
        eprintln!("Export failed: {}", e);
        return EXIT_DATA;
    }
    println!();
    println!("Lineups written to {}", args.out.display());

    EXIT_SUCCESS
}

fn run_upload(lineups_path: &Path, players_path: &Path, out: &Path, verbose: bool) -> i32 {
    let sheet = match read_lineup_sheet(lineups_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Data error: {}", e);
            return EXIT_DATA;
        }
    };
    if sheet.is_empty() {
        eprintln!("No lineups found in {}", lineups_path.display());
        return EXIT_DATA;
    }

    let roster = match load_roster(players_path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Data error: {}", e);
            return EXIT_DATA;
        }
    };

    if verbose {
        eprintln!(
            "Read {} lineups, {} roster entries",
            sheet.len(),
            roster.len()
        );
    }

    let translation = translate_lineups(&sheet, &roster);
    for miss in &translation.misses {
        eprintln!("Driver not found in player list: {}", miss);
    }

    if let Err(e) = write_upload_csv(out, &translation) {
        eprintln!("Export failed: {}", e);
        return EXIT_DATA;
    }
    println!("FanDuel upload file written to {}", out.display());

    EXIT_SUCCESS
}
