use std::collections::BTreeMap;

/// A single 2D sample tagged with the cluster it belongs to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate, normally in [0, 1)
    pub x: f64,
    /// Vertical coordinate, normally in [0, 1)
    pub y: f64,
    /// Cluster index, only used to pick a display color
    pub cluster: u64,
}

impl Point {
    pub fn new(x: f64, y: f64, cluster: u64) -> Self {
        Self { x, y, cluster }
    }

    /// Whether both coordinates fall in the half-open unit square
    pub fn in_unit_square(&self) -> bool {
        (0.0..1.0).contains(&self.x) && (0.0..1.0).contains(&self.y)
    }
}

/// Ordered collection of points, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    points: Vec<Point>,
}

impl PointCloud {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Append every point of `other` after the existing ones
    pub fn extend(&mut self, other: PointCloud) {
        self.points.extend(other.points);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Number of points per cluster index, ordered by index
    pub fn cluster_sizes(&self) -> BTreeMap<u64, usize> {
        let mut sizes = BTreeMap::new();
        for point in &self.points {
            *sizes.entry(point.cluster).or_insert(0) += 1;
        }
        sizes
    }
}

impl From<Vec<Point>> for PointCloud {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for PointCloud {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for PointCloud {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a PointCloud {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
