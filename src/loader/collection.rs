use super::{parse_cluster, parse_coordinate, read_source};
use crate::cloud::{Point, PointCloud};
use crate::error::{PointsError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// One JSON line of a collected key/value output file
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionRecord {
    /// Cluster index as text
    #[serde(rename = "Key")]
    pub key: String,
    /// Two whitespace-separated coordinates
    #[serde(rename = "Value")]
    pub value: String,
}

impl CollectionRecord {
    fn into_point(self, source: &str, line: usize) -> Result<Point> {
        let cluster = parse_cluster(&self.key, source, line)?;

        let tokens: Vec<&str> = self.value.split_whitespace().collect();
        let [x, y] = tokens.as_slice() else {
            return Err(PointsError::format(
                source,
                line,
                format!(
                    "expected 2 coordinates in Value, found {} in '{}'",
                    tokens.len(),
                    self.value
                ),
            ));
        };

        let x = parse_coordinate(x, "x", source, line)?;
        let y = parse_coordinate(y, "y", source, line)?;
        Ok(Point::new(x, y, cluster))
    }
}

/// Parse newline-delimited `{"Key": ..., "Value": ...}` records
pub fn parse_collection(text: &str, source: &str) -> Result<PointCloud> {
    let mut cloud = PointCloud::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let record: CollectionRecord = serde_json::from_str(raw)
            .map_err(|e| PointsError::format(source, line, format!("invalid record: {}", e)))?;

        cloud.push(record.into_point(source, line)?);
    }

    Ok(cloud)
}

/// Load and concatenate collection files in the order given
#[tracing::instrument(skip_all, fields(files = paths.len()))]
pub fn load_collection<P: AsRef<Path>>(paths: &[P]) -> Result<PointCloud> {
    let mut cloud = PointCloud::new();

    for path in paths {
        let path = path.as_ref();
        debug!("Loading collection file: {}", path.display());

        let text = read_source(path)?;
        let part = parse_collection(&text, &path.display().to_string())?;

        debug!("{} records from {}", part.len(), path.display());
        cloud.extend(part);
    }

    info!("Collected {} points from {} files", cloud.len(), paths.len());
    Ok(cloud)
}
