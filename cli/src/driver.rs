//! Driver runs: compose an engine with exporters, console and progress output

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use life_simulator_core_rs::engine::{InitialCondition, NoiseConfig, SimulationConfig};
use life_simulator_core_rs::io::{
    ChartExporter, ChartScale, ChartSeries, ConsoleRenderer, GridSink, ProgressBar, RasterExporter,
};
use life_simulator_core_rs::{Engine, Ruleset};
use serde::Deserialize;
use tracing::info;

fn default_every() -> usize {
    1
}

fn default_scale() -> u32 {
    8
}

/// Everything a `run` needs: engine config plus run-level choices
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    #[serde(flatten)]
    pub simulation: SimulationConfig,

    #[serde(default)]
    pub ruleset: Ruleset,

    pub generations: usize,

    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    #[serde(default = "default_every")]
    pub snapshot_every: usize,

    #[serde(default = "default_scale")]
    pub pixel_scale: u32,
}

/// Flag values of the `run` subcommand
pub struct RunFlags {
    pub height: usize,
    pub width: usize,
    pub seed: Option<i64>,
    pub p_live: f64,
    pub noise: Option<f64>,
    pub noise_live: f64,
    pub generations: usize,
    pub rules: Ruleset,
    pub out: Option<PathBuf>,
    pub every: usize,
    pub scale: u32,
}

impl RunConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading run config {}", path.display()))?;
        serde_json::from_str(&json).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_flags(flags: RunFlags) -> Self {
        Self {
            simulation: SimulationConfig {
                height: flags.height,
                width: flags.width,
                rng_seed: flags.seed,
                initial_condition: InitialCondition::Random {
                    p_live: flags.p_live,
                },
                noise: flags.noise.map(|p_noise| NoiseConfig {
                    p_noise,
                    p_live: flags.noise_live,
                }),
                record_initial: true,
            },
            ruleset: flags.rules,
            generations: flags.generations,
            output_dir: flags.out,
            snapshot_every: flags.every,
            pixel_scale: flags.scale,
        }
    }
}

/// Advance `engine` `generations` times, exporting and printing along the way
fn drive(
    engine: &mut Engine,
    ruleset: Ruleset,
    generations: usize,
    every: usize,
    mut sink: Option<&mut RasterExporter>,
    console: Option<&ConsoleRenderer>,
    progress: Option<&ProgressBar>,
) -> Result<()> {
    let mut emit = |engine: &Engine| -> Result<()> {
        if let Some(sink) = sink.as_deref_mut() {
            if engine.clock().is_due(every) {
                sink.write_grid(engine.grid(), engine.generation_count())?;
            }
        }
        if let Some(console) = console {
            console.print(engine.grid(), engine.generation_count())?;
        }
        Ok(())
    };

    emit(&*engine)?;
    if let Some(bar) = progress {
        bar.print(0);
    }

    for i in 1..=generations {
        engine.advance(ruleset)?;
        emit(&*engine)?;
        if let Some(bar) = progress {
            bar.print(i);
        }
    }
    Ok(())
}

pub fn run(config: &RunConfig, print: bool, show_progress: bool) -> Result<()> {
    let mut engine = Engine::from_config(&config.simulation).context("building engine")?;
    info!(
        ruleset = %config.ruleset,
        generations = config.generations,
        population = engine.alive_count(),
        "starting run"
    );

    let mut exporter = config
        .output_dir
        .as_ref()
        .map(|dir| RasterExporter::new(dir).with_scale(config.pixel_scale));
    let console = print.then(ConsoleRenderer::new);
    let bar = (show_progress && !print).then(|| ProgressBar::new(config.generations));

    drive(
        &mut engine,
        config.ruleset,
        config.generations,
        config.snapshot_every,
        exporter.as_mut(),
        console.as_ref(),
        bar.as_ref(),
    )?;

    if let Some(dir) = &config.output_dir {
        ChartExporter::new().export(
            &[ChartSeries::raw(
                config.ruleset.as_str(),
                engine.population_history(),
            )],
            dir.join("population.png"),
        )?;
    }

    info!(
        generation = engine.generation_count(),
        population = engine.alive_count(),
        history = ?engine.population_history().as_slice(),
        "run finished"
    );
    Ok(())
}

/// Basic vs Experimental from identical initial grids, normalized chart
pub fn compare_rules(
    height: usize,
    width: usize,
    seed: i64,
    p_live: f64,
    generations: usize,
    out: &Path,
) -> Result<()> {
    let config = SimulationConfig {
        height,
        width,
        rng_seed: Some(seed),
        initial_condition: InitialCondition::Random { p_live },
        noise: None,
        record_initial: true,
    };

    let mut series = Vec::with_capacity(Ruleset::ALL.len());
    for ruleset in Ruleset::ALL {
        let mut engine = Engine::from_config(&config)?;
        let bar = ProgressBar::new(generations).with_prefix(format!("{:>12}:", ruleset));
        drive(&mut engine, ruleset, generations, 0, None, None, Some(&bar))?;

        info!(
            %ruleset,
            initial = ?engine.population_history().initial(),
            last = ?engine.population_history().last(),
            "ruleset finished"
        );
        series.push(
            ChartSeries::normalized(ruleset.as_str(), engine.population_history())
                .context("initial grid has no alive cells; raise --p-live")?,
        );
    }

    ChartExporter::new().export(&series, out.join("compare_rules.png"))?;
    Ok(())
}

/// One engine per image, snapshots per image, one chart for all
pub fn run_images(
    images: &[PathBuf],
    ruleset: Ruleset,
    generations: usize,
    seed: Option<i64>,
    out: &Path,
    snapshots: bool,
    linear: bool,
) -> Result<()> {
    if images.is_empty() {
        bail!("no input images given");
    }

    let mut series = Vec::with_capacity(images.len());
    for path in images {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        info!(%name, "simulating image");

        let config = SimulationConfig {
            rng_seed: seed,
            initial_condition: InitialCondition::Image { path: path.clone() },
            ..SimulationConfig::default()
        };
        let mut engine = Engine::from_config(&config)
            .with_context(|| format!("initializing from {}", path.display()))?;

        let mut exporter = snapshots.then(|| RasterExporter::new(out.join(&name)).with_scale(4));
        let bar = ProgressBar::new(generations).with_prefix(format!("{}:", name));
        drive(
            &mut engine,
            ruleset,
            generations,
            1,
            exporter.as_mut(),
            None,
            Some(&bar),
        )?;

        series.push(ChartSeries::raw(name, engine.population_history()));
    }

    let scale = if linear {
        ChartScale::Linear
    } else {
        ChartScale::Log
    };
    ChartExporter::new()
        .with_scale(scale)
        .export(&series, out.join("cellcount.png"))?;
    Ok(())
}
