use crate::error::{PointsError, Result};

/// How generated points are labelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClusterLabels {
    /// Each point carries the index of the cluster it was sampled from
    #[default]
    Sampled,
    /// Every point is labelled 0, matching files written by older tooling
    Zero,
}

/// Parameters for synthesizing a point cloud
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Number of clusters to sample
    pub clusters: usize,
    /// Smallest number of samples attempted per cluster
    pub min_size: usize,
    /// Largest number of samples attempted per cluster (inclusive)
    pub max_size: usize,
    pub labels: ClusterLabels,
}

impl GeneratorConfig {
    pub fn new(clusters: usize, min_size: usize, max_size: usize) -> Self {
        Self {
            clusters,
            min_size,
            max_size,
            labels: ClusterLabels::default(),
        }
    }

    pub fn labels(mut self, labels: ClusterLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Reject size ranges that cannot be sampled
    pub fn validate(&self) -> Result<()> {
        if self.min_size > self.max_size {
            return Err(PointsError::Config(format!(
                "minimum cluster size {} exceeds maximum cluster size {}",
                self.min_size, self.max_size
            )));
        }
        Ok(())
    }

    /// Label assigned to points of the cluster at `index`
    pub(crate) fn label_for(&self, index: usize) -> u64 {
        match self.labels {
            ClusterLabels::Sampled => index as u64,
            ClusterLabels::Zero => 0,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(7, 500, 5000)
    }
}
