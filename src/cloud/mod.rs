mod types;


pub use types::{Point, PointCloud};
