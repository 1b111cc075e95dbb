//! Collaborator tests: image sources, PNG and chart exporters, console and
//! progress rendering

use image::{GrayImage, Luma};
use life_simulator_core_rs::io::{
    snapshot_file_name, ChartExporter, ChartScale, ChartSeries, ConsoleRenderer, GridSink,
    ImageBytesSource, ImageFileSource, LuminanceSource, ProgressBar, RasterExporter,
};
use life_simulator_core_rs::{Engine, Grid, PopulationHistory, Ruleset, SimulationError};

// ============================================================================
// Image sources
// ============================================================================

#[test]
fn test_png_file_to_grid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pattern.png");

    // 3 wide, 2 tall; only pure white becomes dead
    let img = GrayImage::from_fn(3, 2, |x, y| match (x, y) {
        (0, 0) => Luma([0]),
        (1, 0) => Luma([255]),
        (2, 0) => Luma([200]),
        (0, 1) => Luma([255]),
        (1, 1) => Luma([254]),
        _ => Luma([255]),
    });
    img.save(&path).unwrap();

    let mut engine = Engine::with_seed(10, 10, 1).unwrap();
    engine
        .initialize_from_image(&ImageFileSource::new(&path))
        .unwrap();

    assert_eq!(engine.grid().dimensions(), (2, 3));
    assert_eq!(engine.grid().to_rows(), vec![vec![1, 0, 1], vec![0, 1, 0]]);
}

#[test]
fn test_missing_file_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let source = ImageFileSource::new(dir.path().join("nope.png"));
    assert!(matches!(
        source.luminance(),
        Err(SimulationError::UnreadableSource(_))
    ));
}

#[test]
fn test_garbage_file_is_unreadable_and_grid_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"definitely not a png").unwrap();

    let mut engine = Engine::with_seed(4, 4, 9).unwrap();
    engine.randomize(0.5).unwrap();
    let before = engine.grid().clone();

    let err = engine
        .initialize_from_image(&ImageFileSource::new(&path))
        .unwrap_err();
    assert!(matches!(err, SimulationError::UnreadableSource(_)));
    assert_eq!(engine.grid(), &before);
}

#[test]
fn test_in_memory_bytes() {
    assert!(ImageBytesSource::new(vec![1, 2, 3]).luminance().is_err());
}

// ============================================================================
// Raster export
// ============================================================================

#[test]
fn test_snapshot_names_are_zero_padded() {
    assert_eq!(snapshot_file_name(0), "timestep_000000.png");
    assert_eq!(snapshot_file_name(123), "timestep_000123.png");
}

#[test]
fn test_raster_export_creates_directory_and_files() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("run");
    let mut exporter = RasterExporter::new(&out);

    let mut engine = Engine::with_seed(6, 8, 5).unwrap();
    engine.randomize(0.4).unwrap();
    exporter.write_grid(engine.grid(), 0).unwrap();
    engine.advance(Ruleset::Basic).unwrap();
    exporter.write_grid(engine.grid(), 1).unwrap();

    assert!(out.join("timestep_000000.png").is_file());
    assert!(out.join("timestep_000001.png").is_file());
}

#[test]
fn test_exported_snapshot_reloads_as_same_grid() {
    let dir = tempfile::tempdir().unwrap();
    let mut exporter = RasterExporter::new(dir.path());

    let mut engine = Engine::with_seed(7, 9, 31).unwrap();
    engine.randomize(0.5).unwrap();
    exporter.write_grid(engine.grid(), 0).unwrap();

    let reloaded = ImageFileSource::new(exporter.path_for(0)).luminance().unwrap();
    assert_eq!(&Grid::from_luminance(&reloaded).unwrap(), engine.grid());
}

#[test]
fn test_raster_export_into_a_file_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("occupied");
    std::fs::write(&blocker, b"").unwrap();

    let mut exporter = RasterExporter::new(&blocker);
    let grid = Grid::new_empty(2, 2).unwrap();
    assert!(matches!(
        exporter.write_grid(&grid, 0),
        Err(SimulationError::Export(_))
    ));
}

// ============================================================================
// Charts
// ============================================================================

#[test]
fn test_chart_export_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("charts").join("population.png");

    let basic = PopulationHistory::from(vec![40, 30, 25, 20]);
    let experimental = PopulationHistory::from(vec![40, 44, 39, 41]);
    let series = vec![
        ChartSeries::normalized("basic", &basic).unwrap(),
        ChartSeries::normalized("experimental", &experimental).unwrap(),
    ];

    ChartExporter::new()
        .with_size(320, 240)
        .export(&series, &path)
        .unwrap();

    let written = image::open(&path).unwrap();
    assert_eq!((written.width(), written.height()), (320, 240));
}

#[test]
fn test_normalized_series_starts_at_one() {
    let history = PopulationHistory::from(vec![50, 25, 100]);
    let series = ChartSeries::normalized("x", &history).unwrap();
    assert_eq!(series.values, vec![1.0, 0.5, 2.0]);
}

#[test]
fn test_normalizing_zero_start_fails() {
    let history = PopulationHistory::from(vec![0, 4]);
    assert!(ChartSeries::normalized("dead start", &history).is_err());
}

#[test]
fn test_log_chart_with_only_zero_counts_has_nothing_to_plot() {
    let history = PopulationHistory::from(vec![0, 0, 0]);
    let series = [ChartSeries::raw("extinct", &history)];

    let err = ChartExporter::new()
        .with_scale(ChartScale::Log)
        .render(&series)
        .unwrap_err();
    assert!(matches!(err, SimulationError::Export(_)));

    assert!(ChartExporter::new().render(&series).is_ok());
}

// ============================================================================
// Console and progress
// ============================================================================

#[test]
fn test_console_rendering() {
    let grid = Grid::from_rows(&[[1u8, 0], [0, 1]]).unwrap();
    let text = ConsoleRenderer::new().render(&grid, 0);
    assert_eq!(text, "timestep 0\n\u{25A9} \u{25A1} \n\u{25A1} \u{25A9} \n");
}

#[test]
fn test_console_without_header() {
    let grid = Grid::from_rows(&[[0u8, 1]]).unwrap();
    let mut out = Vec::new();
    ConsoleRenderer::new()
        .with_glyphs('X', '.')
        .show_generation(false)
        .write_to(&mut out, &grid, 7)
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), ". X \n");
}

#[test]
fn test_progress_bar_default_format() {
    let bar = ProgressBar::new(10);
    let line = bar.line(5);
    assert!(line.starts_with("Progress: |"));
    assert!(line.ends_with("| 50.0% "));
    assert_eq!(line.chars().filter(|&c| c == '█').count(), 15);
}

#[test]
fn test_progress_bar_draws_newline_only_at_end() {
    let bar = ProgressBar::new(2).with_length(4).with_suffix("done");

    let mut partial = Vec::new();
    bar.draw(&mut partial, 1).unwrap();
    let partial = String::from_utf8(partial).unwrap();
    assert_eq!(partial, "\rProgress: |██--| 50.0% done");

    let mut complete = Vec::new();
    bar.draw(&mut complete, 2).unwrap();
    assert!(String::from_utf8(complete).unwrap().ends_with("100.0% done\n"));
}
