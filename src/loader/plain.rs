use super::{parse_cluster, parse_coordinate, read_source};
use crate::cloud::{Point, PointCloud};
use crate::error::{PointsError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Parse plain `x y cluster` lines into a point cloud
///
/// # Arguments
/// * `text` - File contents, one point per line
/// * `source` - Name used in error messages (usually the file path)
///
/// Every line must hold exactly three tokens; a blank line is malformed.
pub fn parse_plain(text: &str, source: &str) -> Result<PointCloud> {
    let mut cloud = PointCloud::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let tokens: Vec<&str> = raw.split_whitespace().collect();

        match tokens.as_slice() {
            [x, y, cluster] => {
                let x = parse_coordinate(x, "x", source, line)?;
                let y = parse_coordinate(y, "y", source, line)?;
                let cluster = parse_cluster(cluster, source, line)?;
                cloud.push(Point::new(x, y, cluster));
            }
            other => {
                return Err(PointsError::format(
                    source,
                    line,
                    format!("expected 3 fields (x y cluster), found {}", other.len()),
                ));
            }
        }
    }

    Ok(cloud)
}

/// Load a plain-format point file from disk
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_plain(path: impl AsRef<Path>) -> Result<PointCloud> {
    let path = path.as_ref();
    debug!("Loading plain points from: {}", path.display());

    let text = read_source(path)?;
    let cloud = parse_plain(&text, &path.display().to_string())?;

    info!("Loaded {} points from {}", cloud.len(), path.display());
    Ok(cloud)
}

/// Write one `x y cluster` line per point
///
/// Coordinates use the shortest representation that parses back to the same value.
pub fn write_plain<W: Write>(cloud: &PointCloud, mut writer: W) -> std::io::Result<()> {
    for point in cloud {
        writeln!(writer, "{} {} {}", point.x, point.y, point.cluster)?;
    }
    writer.flush()
}

/// Persist a cloud in plain format, replacing any existing file
pub fn save_plain(cloud: &PointCloud, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| PointsError::io(path, e))?;

    write_plain(cloud, BufWriter::new(file)).map_err(|e| PointsError::io(path, e))?;

    info!("Wrote {} points to {}", cloud.len(), path.display());
    Ok(())
}
