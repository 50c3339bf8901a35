mod canvas;
mod palette;


pub use canvas::{CanvasConfig, CanvasSurface};
pub use palette::{Color, PALETTE, color_for};

use crate::cloud::PointCloud;
use crate::error::Result;
use tracing::info;

/// Diameter of each rendered point, in surface units
pub const DOT_SIZE: f64 = 2.0;

/// Minimal drawing device the renderer targets
///
/// Coordinates are surface units with the origin at the geometric center,
/// x growing right and y growing up.
pub trait Surface {
    /// Current width and height
    fn size(&self) -> (u32, u32);

    /// Start a new batch, discarding anything drawn before
    fn clear_batch(&mut self);

    fn set_color(&mut self, color: Color);

    /// Move the pen without drawing
    fn move_to(&mut self, x: f64, y: f64);

    /// Queue a filled dot of diameter `size` centered at `(x, y)`
    fn draw_dot(&mut self, x: f64, y: f64, size: f64);

    /// Make every queued draw visible
    fn flush(&mut self) -> Result<()>;

    /// Block until the viewer is done with the surface
    fn wait_for_dismiss(&mut self) -> Result<()>;
}

/// Map a normalized coordinate to surface units centered on the origin
pub fn screen_position(x: f64, y: f64, width: u32, height: u32) -> (f64, f64) {
    let width = width as f64;
    let height = height as f64;
    (x * width - width / 2.0, y * height - height / 2.0)
}

/// Draw every point of `cloud` on `surface` and wait for it to be dismissed
///
/// All dots are queued in cloud order and made visible with a single flush.
pub fn render<S: Surface + ?Sized>(cloud: &PointCloud, surface: &mut S) -> Result<()> {
    let (width, height) = surface.size();
    surface.clear_batch();

    for point in cloud {
        let (x, y) = screen_position(point.x, point.y, width, height);
        surface.set_color(color_for(point.cluster));
        surface.move_to(x, y);
        surface.draw_dot(x, y, DOT_SIZE);
    }

    surface.flush()?;
    info!("Rendered {} points on a {}x{} surface", cloud.len(), width, height);

    surface.wait_for_dismiss()
}
