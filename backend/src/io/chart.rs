//! Population chart export
//!
//! Draws one polyline per population history onto a PNG canvas. The x axis
//! is the history index (generation), the y axis the alive count, either
//! raw or normalized to the first entry, on a linear or log scale.
//!
//! There is no text rendering: series are distinguished by color, in the
//! order they were passed, and the legend order is logged.

use std::path::Path;

use image::{Rgb, RgbImage};
use tracing::info;

use crate::core::{SimulationError, SimulationResult};
use crate::models::PopulationHistory;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const AXIS: Rgb<u8> = Rgb([0, 0, 0]);
const PALETTE: [Rgb<u8>; 6] = [
    Rgb([31, 119, 180]),
    Rgb([255, 127, 14]),
    Rgb([44, 160, 44]),
    Rgb([214, 39, 40]),
    Rgb([148, 103, 189]),
    Rgb([140, 86, 75]),
];
const MARGIN: u32 = 32;
const SWATCH: u32 = 10;

/// Y-axis scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartScale {
    #[default]
    Linear,
    /// Natural log; non-positive values are left out of the line
    Log,
}

/// One labelled line of the chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: String,
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// Raw alive counts
    pub fn raw(label: impl Into<String>, history: &PopulationHistory) -> Self {
        Self {
            label: label.into(),
            values: history.as_f64(),
        }
    }

    /// Alive counts divided by the first entry
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if the history is empty or starts at zero.
    pub fn normalized(
        label: impl Into<String>,
        history: &PopulationHistory,
    ) -> SimulationResult<Self> {
        let label = label.into();
        let values = history
            .normalized()
            .ok_or_else(|| SimulationError::InvalidParameter {
                name: label.clone(),
                reason: "cannot normalize a history that is empty or starts at zero"
                    .to_string(),
            })?;
        Ok(Self { label, values })
    }
}

/// Renders population histories as a line chart
#[derive(Debug, Clone)]
pub struct ChartExporter {
    width: u32,
    height: u32,
    scale: ChartScale,
}

impl Default for ChartExporter {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            scale: ChartScale::Linear,
        }
    }
}

impl ChartExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Canvas size in pixels; each side is at least large enough for margins
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width.max(MARGIN * 2 + 1);
        self.height = height.max(MARGIN * 2 + 1);
        self
    }

    pub fn with_scale(mut self, scale: ChartScale) -> Self {
        self.scale = scale;
        self
    }

    /// Draw `series` to an in-memory image
    ///
    /// # Errors
    ///
    /// `Export` if there is no plottable point at all.
    pub fn render(&self, series: &[ChartSeries]) -> SimulationResult<RgbImage> {
        let transformed: Vec<Vec<Option<f64>>> = series
            .iter()
            .map(|s| s.values.iter().map(|&v| self.transform(v)).collect())
            .collect();

        let max_len = series.iter().map(|s| s.values.len()).max().unwrap_or(0);
        let (y_min, y_max) = transformed
            .iter()
            .flatten()
            .flatten()
            .fold(None, |acc: Option<(f64, f64)>, &v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .ok_or_else(|| SimulationError::Export("nothing to plot".to_string()))?;

        let y_min = match self.scale {
            ChartScale::Linear => y_min.min(0.0),
            ChartScale::Log => y_min,
        };
        let y_span = if y_max > y_min { y_max - y_min } else { 1.0 };
        let x_span = max_len.saturating_sub(1).max(1) as f64;

        let plot_w = (self.width - 2 * MARGIN) as f64;
        let plot_h = (self.height - 2 * MARGIN) as f64;
        let to_px = |i: usize, v: f64| -> (i64, i64) {
            let x = MARGIN as f64 + i as f64 / x_span * plot_w;
            let y = (self.height - MARGIN) as f64 - (v - y_min) / y_span * plot_h;
            (x.round() as i64, y.round() as i64)
        };

        let mut img = RgbImage::from_pixel(self.width, self.height, BACKGROUND);
        self.draw_axes(&mut img);

        for (idx, points) in transformed.iter().enumerate() {
            let color = PALETTE[idx % PALETTE.len()];
            let mut previous: Option<(i64, i64)> = None;
            for (i, point) in points.iter().enumerate() {
                match point {
                    Some(v) => {
                        let current = to_px(i, *v);
                        match previous {
                            Some(from) => draw_line(&mut img, from, current, color),
                            None => put(&mut img, current.0, current.1, color),
                        }
                        previous = Some(current);
                    }
                    None => previous = None,
                }
            }
            self.draw_swatch(&mut img, idx, color);
        }

        Ok(img)
    }

    /// Draw `series` and save as PNG at `path`
    pub fn export(&self, series: &[ChartSeries], path: impl AsRef<Path>) -> SimulationResult<()> {
        let path = path.as_ref();
        let img = self.render(series)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                SimulationError::Export(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }
        img.save(path)
            .map_err(|e| SimulationError::Export(format!("{}: {}", path.display(), e)))?;

        let legend: Vec<&str> = series.iter().map(|s| s.label.as_str()).collect();
        info!(path = %path.display(), ?legend, "wrote population chart");
        Ok(())
    }

    fn transform(&self, value: f64) -> Option<f64> {
        match self.scale {
            ChartScale::Linear if value.is_finite() => Some(value),
            ChartScale::Log if value > 0.0 && value.is_finite() => Some(value.ln()),
            _ => None,
        }
    }

    fn draw_axes(&self, img: &mut RgbImage) {
        let left = MARGIN as i64;
        let bottom = (self.height - MARGIN) as i64;
        let right = (self.width - MARGIN) as i64;
        let top = MARGIN as i64;
        draw_line(img, (left, bottom), (right, bottom), AXIS);
        draw_line(img, (left, bottom), (left, top), AXIS);
    }

    /// Legend swatches stack down the top-right corner in series order
    fn draw_swatch(&self, img: &mut RgbImage, idx: usize, color: Rgb<u8>) {
        let x0 = self.width.saturating_sub(MARGIN / 2 + SWATCH);
        let y0 = MARGIN / 2 + idx as u32 * (SWATCH + 4);
        for y in y0..(y0 + SWATCH).min(self.height) {
            for x in x0..(x0 + SWATCH).min(self.width) {
                img.put_pixel(x, y, color);
            }
        }
    }
}

fn put(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}

/// Bresenham line, clipped to the canvas
fn draw_line(img: &mut RgbImage, (x0, y0): (i64, i64), (x1, y1): (i64, i64), color: Rgb<u8>) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let (mut x, mut y) = (x0, y0);
    let mut err = dx + dy;

    loop {
        put(img, x, y, color);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
