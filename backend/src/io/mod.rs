//! Peripheral collaborators
//!
//! The engine itself never touches files or terminals. Drivers connect it to
//! these sinks and sources:
//!
//! - **image_source**: luminance matrices decoded from image files or bytes
//! - **raster**: two-tone PNG snapshot per generation
//! - **chart**: population-history line chart
//! - **console**: two-glyph text rendering
//! - **progress**: textual progress bar
//!
//! All of them are pure sinks (or a pure source): nothing they do feeds back
//! into engine state.

pub mod chart;
pub mod console;
pub mod image_source;
pub mod progress;
pub mod raster;

pub use chart::{ChartExporter, ChartScale, ChartSeries};
pub use console::ConsoleRenderer;
pub use image_source::{ImageBytesSource, ImageFileSource, LuminanceMatrix, LuminanceSource};
pub use progress::ProgressBar;
pub use raster::{snapshot_file_name, GridSink, RasterExporter};
