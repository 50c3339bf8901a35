// Public API exports
pub mod cloud;
pub mod error;
pub mod generator;
pub mod loader;
pub mod renderer;

// Re-export main types for convenience
pub use cloud::{Point, PointCloud};
pub use error::{PointsError, Result};

pub use generator::{
    ClusterLabels, GenerationReport, GeneratorConfig, generate, generate_seeded,
    generate_with_report,
};

pub use loader::{
    load_collection, load_plain, parse_collection, parse_plain, save_plain, write_plain,
};

pub use renderer::{
    CanvasConfig, CanvasSurface, Color, Surface, color_for, render, screen_position,
};
