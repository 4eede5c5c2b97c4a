/// Geometry primitives and the cube edge point cloud
use crate::error::ConfigError;

/// A cube has 12 edges
pub const CUBE_EDGES: usize = 12;

/// A point in object space, origin at the cube center
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point3D {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point3D {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// A point on the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point2D {
    pub x: i32,
    pub y: i32,
}

impl Point2D {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// One cube edge: the axis it runs along and the signs of the two fixed
/// coordinates, in x, y, z order with the varying axis skipped.
#[derive(Debug, Clone, Copy)]
struct EdgeSpec {
    axis: Axis,
    fixed: [i32; 2],
}

impl EdgeSpec {
    const fn new(axis: Axis, a: i32, b: i32) -> Self {
        Self { axis, fixed: [a, b] }
    }

    fn point(&self, along: i32, half: i32) -> Point3D {
        let (a, b) = (self.fixed[0] * half, self.fixed[1] * half);
        match self.axis {
            Axis::X => Point3D::new(along, a, b),
            Axis::Y => Point3D::new(a, along, b),
            Axis::Z => Point3D::new(a, b, along),
        }
    }
}

/// Canonical edge order: the four front edges (z = +h), the four back edges
/// (z = -h), then the four edges running along z.
const EDGES: [EdgeSpec; CUBE_EDGES] = [
    EdgeSpec::new(Axis::X, -1, 1),
    EdgeSpec::new(Axis::X, 1, 1),
    EdgeSpec::new(Axis::Y, -1, 1),
    EdgeSpec::new(Axis::Y, 1, 1),
    EdgeSpec::new(Axis::X, -1, -1),
    EdgeSpec::new(Axis::X, 1, -1),
    EdgeSpec::new(Axis::Y, -1, -1),
    EdgeSpec::new(Axis::Y, 1, -1),
    EdgeSpec::new(Axis::Z, -1, -1),
    EdgeSpec::new(Axis::Z, 1, -1),
    EdgeSpec::new(Axis::Z, 1, 1),
    EdgeSpec::new(Axis::Z, -1, 1),
];

/// Sample points along the 12 edges of a cube, one contiguous block per edge
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    points: Vec<Point3D>,
    points_per_edge: usize,
    step_size: i32,
}

impl PointCloud {
    pub fn points(&self) -> &[Point3D] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points_per_edge(&self) -> usize {
        self.points_per_edge
    }

    pub fn step_size(&self) -> i32 {
        self.step_size
    }

    /// The block of points sampled along edge `index` (0..12)
    pub fn edge(&self, index: usize) -> &[Point3D] {
        let start = index * self.points_per_edge;
        &self.points[start..start + self.points_per_edge]
    }

    /// The axis edge `index` runs along
    pub fn edge_axis(index: usize) -> Axis {
        EDGES[index].axis
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point3D> {
        self.points.iter()
    }
}

/// Check the generator preconditions and return `(points_per_edge, step_size)`
pub fn edge_sampling(edge_length: i32, total_points: usize) -> Result<(usize, i32), ConfigError> {
    if edge_length <= 0 {
        return Err(ConfigError::InvalidConfiguration(format!(
            "edge length must be positive, got {edge_length}"
        )));
    }
    if total_points == 0 || total_points % CUBE_EDGES != 0 {
        return Err(ConfigError::InvalidConfiguration(format!(
            "point count must be a positive multiple of {CUBE_EDGES}, got {total_points}"
        )));
    }

    let points_per_edge = total_points / CUBE_EDGES;
    // Fewer than one unit per point would collapse an edge onto itself
    let step_size = i32::try_from(points_per_edge)
        .ok()
        .filter(|&per_edge| per_edge <= edge_length)
        .map(|per_edge| edge_length / per_edge)
        .ok_or_else(|| {
            ConfigError::InvalidConfiguration(format!(
                "{points_per_edge} points per edge do not fit on an edge of length {edge_length}"
            ))
        })?;

    Ok((points_per_edge, step_size))
}

/// Build the canonical (unrotated) point cloud of a cube's edges.
///
/// Each edge holds `total_points / 12` points starting at `-edge_length / 2`
/// and spaced `edge_length / points_per_edge` apart, with the two other
/// coordinates fixed at `±edge_length / 2`.
pub fn generate(edge_length: i32, total_points: usize) -> Result<PointCloud, ConfigError> {
    let (points_per_edge, step_size) = edge_sampling(edge_length, total_points)?;
    let half = edge_length / 2;

    let mut points = Vec::with_capacity(total_points);
    for edge in &EDGES {
        let mut along = -half;
        for _ in 0..points_per_edge {
            points.push(edge.point(along, half));
            along += step_size;
        }
    }

    Ok(PointCloud {
        points,
        points_per_edge,
        step_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinate(point: &Point3D, axis: Axis) -> i32 {
        match axis {
            Axis::X => point.x,
            Axis::Y => point.y,
            Axis::Z => point.z,
        }
    }

    #[test]
    fn test_reference_cube() {
        let cloud = generate(300, 1200).unwrap();
        assert_eq!(cloud.len(), 1200);
        assert_eq!(cloud.points_per_edge(), 100);
        assert_eq!(cloud.step_size(), 3);
        assert_eq!(cloud.points()[0], Point3D::new(-150, -150, 150));
        assert_eq!(cloud.points()[99], Point3D::new(147, -150, 150));
        // Last edge runs along z at x = -h, y = +h
        assert_eq!(cloud.edge(11)[0], Point3D::new(-150, 150, -150));
    }

    #[test]
    fn test_edges_strictly_increasing() {
        for &(length, count) in &[(300, 1200), (301, 120), (12, 144), (1, 12), (100, 36)] {
            let cloud = generate(length, count).unwrap();
            let half = length / 2;
            assert_eq!(cloud.len(), count);

            for index in 0..CUBE_EDGES {
                let axis = PointCloud::edge_axis(index);
                let edge = cloud.edge(index);
                assert_eq!(coordinate(&edge[0], axis), -half);
                for pair in edge.windows(2) {
                    let delta = coordinate(&pair[1], axis) - coordinate(&pair[0], axis);
                    assert_eq!(delta, cloud.step_size());
                }
            }

            for point in cloud.iter() {
                for value in [point.x, point.y, point.z] {
                    assert!((-half..=half).contains(&value), "{point:?} outside cube {length}");
                }
            }
        }
    }

    #[test]
    fn test_fixed_coordinates_on_corners() {
        let cloud = generate(300, 1200).unwrap();
        for index in 0..CUBE_EDGES {
            let axis = PointCloud::edge_axis(index);
            for point in cloud.edge(index) {
                for other in [Axis::X, Axis::Y, Axis::Z] {
                    if other != axis {
                        assert_eq!(coordinate(point, other).abs(), 150);
                    }
                }
            }
        }
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(generate(300, 1200).unwrap(), generate(300, 1200).unwrap());
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(generate(300, 1201).is_err());
        assert!(generate(300, 0).is_err());
        assert!(generate(0, 1200).is_err());
        assert!(generate(-300, 1200).is_err());
        // 100 points per edge cannot fit on an edge of length 99
        assert!(generate(99, 1200).is_err());
    }
}
