use super::{Color, Surface};
use crate::error::{PointsError, Result};
use image::{ImageError, Rgb, RgbImage};
use std::path::PathBuf;
use tracing::{debug, info};

/// Settings for an offscreen canvas
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// PNG written when the canvas is dismissed
    pub output: PathBuf,
    pub background: Color,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            output: PathBuf::from("points.png"),
            background: Color::White,
        }
    }
}

/// A dot waiting for the next flush
#[derive(Debug, Clone, Copy)]
struct Dot {
    x: f64,
    y: f64,
    size: f64,
    color: Color,
}

/// Software raster surface that snapshots itself to a PNG on dismissal
pub struct CanvasSurface {
    image: RgbImage,
    background: Color,
    output: PathBuf,
    color: Color,
    cursor: (f64, f64),
    pending: Vec<Dot>,
}

impl CanvasSurface {
    pub fn new(config: CanvasConfig) -> Result<Self> {
        if config.width == 0 || config.height == 0 {
            return Err(PointsError::Config(format!(
                "canvas dimensions must be positive, got {}x{}",
                config.width, config.height
            )));
        }

        Ok(Self {
            image: RgbImage::from_pixel(config.width, config.height, Rgb(config.background.rgb())),
            background: config.background,
            output: config.output,
            color: Color::Black,
            cursor: (0.0, 0.0),
            pending: Vec::new(),
        })
    }

    /// Rasterized pixels as of the last flush
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Current pen position
    pub fn cursor(&self) -> (f64, f64) {
        self.cursor
    }

    /// Number of dots queued since the last flush
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Fill the pixels whose centers lie inside the dot
    fn rasterize(&mut self, dot: Dot) {
        let (width, height) = self.image.dimensions();

        // Surface origin is the center with y up; pixel origin is top-left with y down
        let cx = dot.x + width as f64 / 2.0;
        let cy = height as f64 / 2.0 - dot.y;
        let radius = (dot.size / 2.0).max(0.5);

        let min_x = (cx - radius).floor().max(0.0) as i64;
        let max_x = (cx + radius).ceil().min(width as f64) as i64;
        let min_y = (cy - radius).floor().max(0.0) as i64;
        let max_y = (cy + radius).ceil().min(height as f64) as i64;

        let pixel = Rgb(dot.color.rgb());
        for py in min_y..max_y {
            for px in min_x..max_x {
                let dx = px as f64 + 0.5 - cx;
                let dy = py as f64 + 0.5 - cy;
                if dx * dx + dy * dy <= radius * radius {
                    self.image.put_pixel(px as u32, py as u32, pixel);
                }
            }
        }
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn clear_batch(&mut self) {
        self.pending.clear();
        let background = Rgb(self.background.rgb());
        for pixel in self.image.pixels_mut() {
            *pixel = background;
        }
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.cursor = (x, y);
    }

    fn draw_dot(&mut self, x: f64, y: f64, size: f64) {
        self.pending.push(Dot {
            x,
            y,
            size,
            color: self.color,
        });
    }

    fn flush(&mut self) -> Result<()> {
        let dots = std::mem::take(&mut self.pending);
        debug!("Rasterizing {} dots", dots.len());

        for dot in dots {
            self.rasterize(dot);
        }
        Ok(())
    }

    /// Writes the PNG snapshot and returns; the canvas has no viewer to wait on
    fn wait_for_dismiss(&mut self) -> Result<()> {
        self.image.save(&self.output).map_err(|e| match e {
            ImageError::IoError(source) => PointsError::io(&self.output, source),
            other => PointsError::Image(other),
        })?;

        info!("Saved canvas to {}", self.output.display());
        Ok(())
    }
}
