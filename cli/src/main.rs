//! Life simulator command line driver
//!
//! ```text
//! life-sim run --height 20 --width 20 --seed 12345 --p-live 0.33 --generations 2 --out readme_example
//! life-sim run --config run.json
//! life-sim compare --generations 100 --height 100 --width 100 --p-live 0.2
//! life-sim images input_images/*.png --rules experimental --generations 200
//! ```

mod driver;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use life_simulator_core_rs::Ruleset;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "life-sim")]
#[command(about = "Seeded Game of Life simulator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one simulation from flags or a JSON config
    Run {
        /// Path to a run config (JSON); overrides every other flag
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long, default_value_t = 20)]
        height: usize,

        #[arg(long, default_value_t = 20)]
        width: usize,

        /// RNG seed; omit for a non-reproducible run
        #[arg(long)]
        seed: Option<i64>,

        /// Probability of a cell starting alive
        #[arg(long, default_value_t = 0.33)]
        p_live: f64,

        /// Probability of re-rolling a cell after randomization
        #[arg(long)]
        noise: Option<f64>,

        /// Probability that a re-rolled cell is alive
        #[arg(long, default_value_t = 0.5)]
        noise_live: f64,

        #[arg(long, default_value_t = 2)]
        generations: usize,

        #[arg(long, default_value = "basic")]
        rules: Ruleset,

        /// Directory for PNG snapshots and the population chart
        #[arg(long)]
        out: Option<PathBuf>,

        /// Export a snapshot every N generations (0 = initial only)
        #[arg(long, default_value_t = 1)]
        every: usize,

        /// Pixels per cell in PNG snapshots
        #[arg(long, default_value_t = 8)]
        scale: u32,

        /// Print every generation to the console
        #[arg(long)]
        print: bool,

        /// Hide the progress bar
        #[arg(long)]
        quiet: bool,
    },
    /// Run Basic and Experimental rules from the same initial grid and chart both
    Compare {
        #[arg(long, default_value_t = 100)]
        height: usize,

        #[arg(long, default_value_t = 100)]
        width: usize,

        #[arg(long, default_value_t = 12345)]
        seed: i64,

        #[arg(long, default_value_t = 0.2)]
        p_live: f64,

        #[arg(long, default_value_t = 100)]
        generations: usize,

        #[arg(long, default_value = "readme_example")]
        out: PathBuf,
    },
    /// Seed one simulation per image and chart their populations
    Images {
        /// Input images; only pure white pixels start dead
        #[arg(required = true)]
        images: Vec<PathBuf>,

        #[arg(long, default_value = "experimental")]
        rules: Ruleset,

        #[arg(long, default_value_t = 200)]
        generations: usize,

        #[arg(long)]
        seed: Option<i64>,

        #[arg(long, default_value = "output")]
        out: PathBuf,

        /// Skip per-generation PNG snapshots
        #[arg(long)]
        no_snapshots: bool,

        /// Plot alive counts on a linear instead of a log axis
        #[arg(long)]
        linear: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            height,
            width,
            seed,
            p_live,
            noise,
            noise_live,
            generations,
            rules,
            out,
            every,
            scale,
            print,
            quiet,
        } => {
            let run = match config {
                Some(path) => driver::RunConfig::from_file(&path)?,
                None => driver::RunConfig::from_flags(driver::RunFlags {
                    height,
                    width,
                    seed,
                    p_live,
                    noise,
                    noise_live,
                    generations,
                    rules,
                    out,
                    every,
                    scale,
                }),
            };
            driver::run(&run, print, !quiet)
        }
        Commands::Compare {
            height,
            width,
            seed,
            p_live,
            generations,
            out,
        } => driver::compare_rules(height, width, seed, p_live, generations, &out),
        Commands::Images {
            images,
            rules,
            generations,
            seed,
            out,
            no_snapshots,
            linear,
        } => driver::run_images(&images, rules, generations, seed, &out, !no_snapshots, linear),
    }
}
