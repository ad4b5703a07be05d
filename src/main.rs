use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use style_signals::{charts, generate, report, score};

#[derive(Parser)]
#[command(name = "style-signals")]
#[command(about = "Synthetic style-trend tracker comparing viral hype to real adoption", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: generate data, render charts, export CSVs
    Run {
        /// Fix the random source for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value = "charts")]
        charts_dir: PathBuf,
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        /// Skip chart rendering
        #[arg(long)]
        no_charts: bool,
    },
    /// Generate data and print the ranked score table without writing files
    Score {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 10)]
        limit: usize,
        /// Emit the ranked records as JSON instead of a text table
        #[arg(long)]
        json: bool,
    },
    /// Print the top trends from a previously exported scores file
    Top {
        #[arg(long, default_value = report::SCORES_CSV)]
        csv: PathBuf,
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            seed,
            charts_dir,
            out_dir,
            no_charts,
        } => run(seed, &charts_dir, &out_dir, no_charts),
        Commands::Score { seed, limit, json } => {
            let mut rng = rng_for(seed);
            let observations = generate::viral_observations(&mut rng);
            let adoption = generate::adoption_by_trend(&mut rng);
            let records = score::score_trends(&observations, &adoption);

            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                print!("{}", report::render_ranking(&records, limit));
            }
            Ok(())
        }
        Commands::Top { csv, limit } => {
            let records = report::read_scores_csv(&csv)?;
            print!("{}", report::render_ranking(&records, limit));
            Ok(())
        }
    }
}

fn run(seed: Option<u64>, charts_dir: &Path, out_dir: &Path, no_charts: bool) -> anyhow::Result<()> {
    let mut rng = rng_for(seed);

    let observations = generate::viral_observations(&mut rng);
    tracing::info!(observations = observations.len(), "viral activity generated");

    let adoption = generate::adoption_by_trend(&mut rng);
    tracing::info!(trends = adoption.len(), "adoption signals generated");

    if !no_charts {
        let rendered = charts::render_all(charts_dir, &observations, &adoption)?;
        println!("Charts saved in {} ({rendered} files).", charts_dir.display());
    }

    let records = score::score_trends(&observations, &adoption);
    print!("{}", report::render_ranking(&records, records.len()));

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;
    let weekly_path = out_dir.join(report::WEEKLY_CSV);
    let scores_path = out_dir.join(report::SCORES_CSV);
    report::write_weekly_csv(&weekly_path, &observations)?;
    report::write_scores_csv(&scores_path, &records)?;

    println!("CSVs saved");
    println!("- {}", weekly_path.display());
    println!("- {}", scores_path.display());
    Ok(())
}

fn rng_for(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn setup_tracing(verbose: bool) {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("style_signals=debug,info")
    } else {
        tracing_subscriber::EnvFilter::new("style_signals=info,warn")
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
