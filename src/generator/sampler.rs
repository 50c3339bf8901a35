use crate::cloud::{Point, PointCloud};
use crate::error::Result;
use crate::generator::{GeneratorConfig, MAX_STDDEV};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;
use tracing::{debug, info};

/// Generator-internal description of one cluster
#[derive(Debug, Clone, Copy)]
struct ClusterSpec {
    center_x: f64,
    center_y: f64,
    target_size: usize,
}

/// What happened to one cluster during generation
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterReport {
    pub center: (f64, f64),
    /// Samples drawn, equal to the cluster's target size
    pub attempted: usize,
    /// Samples that landed inside the unit square
    pub accepted: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationReport {
    pub clusters: Vec<ClusterReport>,
}

impl GenerationReport {
    pub fn attempted(&self) -> usize {
        self.clusters.iter().map(|c| c.attempted).sum()
    }

    pub fn accepted(&self) -> usize {
        self.clusters.iter().map(|c| c.accepted).sum()
    }
}

/// Synthesize a clustered point cloud from `rng`
pub fn generate<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Result<PointCloud> {
    generate_with_report(config, rng).map(|(cloud, _)| cloud)
}

/// Generate with a ChaCha source seeded from `seed`, or from OS entropy when absent
pub fn generate_seeded(config: &GeneratorConfig, seed: Option<u64>) -> Result<PointCloud> {
    let mut rng = seed.map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
    generate(config, &mut rng)
}

/// Generate and also report per-cluster attempted/accepted counts
pub fn generate_with_report<R: Rng>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<(PointCloud, GenerationReport)> {
    config.validate()?;

    let mut cloud = PointCloud::new();
    let mut report = GenerationReport::default();

    for index in 0..config.clusters {
        // 1. Center and target size
        let spec = ClusterSpec {
            center_x: rng.gen::<f64>(),
            center_y: rng.gen::<f64>(),
            target_size: rng.gen_range(config.min_size..=config.max_size),
        };
        let label = config.label_for(index);

        // 2. Scatter around the center, discarding samples outside the unit square
        let before = cloud.len();
        for _ in 0..spec.target_size {
            let stddev = rng.gen::<f64>() * MAX_STDDEV;
            let dx: f64 = rng.sample(StandardNormal);
            let dy: f64 = rng.sample(StandardNormal);
            let point = Point::new(spec.center_x + dx * stddev, spec.center_y + dy * stddev, label);

            if point.in_unit_square() {
                cloud.push(point);
            }
        }
        let accepted = cloud.len() - before;

        debug!(
            "cluster {} centered at ({:.3}, {:.3}): {}/{} samples accepted",
            index, spec.center_x, spec.center_y, accepted, spec.target_size
        );

        report.clusters.push(ClusterReport {
            center: (spec.center_x, spec.center_y),
            attempted: spec.target_size,
            accepted,
        });
    }

    info!(
        "Generated {} points across {} clusters ({} samples rejected)",
        cloud.len(),
        config.clusters,
        report.attempted() - report.accepted()
    );

    Ok((cloud, report))
}
