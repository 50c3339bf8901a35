mod config;
mod sampler;


pub use config::{ClusterLabels, GeneratorConfig};
pub use sampler::{ClusterReport, GenerationReport, generate, generate_seeded, generate_with_report};

/// Per-point standard deviations are drawn uniformly from [0, MAX_STDDEV)
pub const MAX_STDDEV: f64 = 0.1;
