mod collection;
mod plain;

#[cfg(test)]
mod tests;

pub use collection::{CollectionRecord, load_collection, parse_collection};
pub use plain::{load_plain, parse_plain, save_plain, write_plain};

use crate::error::{PointsError, Result};
use std::path::Path;

/// Read a whole input file, tagging failures with its path
fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| PointsError::io(path, e))
}

/// Parse a finite coordinate, rejecting NaN and infinities
fn parse_coordinate(token: &str, axis: &str, source: &str, line: usize) -> Result<f64> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(PointsError::format(
            source,
            line,
            format!("invalid {} coordinate '{}'", axis, token),
        )),
    }
}

fn parse_cluster(token: &str, source: &str, line: usize) -> Result<u64> {
    token.trim().parse::<u64>().map_err(|_| {
        PointsError::format(source, line, format!("invalid cluster index '{}'", token))
    })
}
