/// Orthographic projection onto the drawing surface
use crate::geometry::{Point2D, Point3D};

/// Maps object-space points to surface coordinates by shifting the origin to
/// the surface center. Depth is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projector {
    offset_x: i32,
    offset_y: i32,
}

impl Projector {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            offset_x: (width / 2) as i32,
            offset_y: (height / 2) as i32,
        }
    }

    pub fn project(&self, point: Point3D) -> Point2D {
        Point2D::new(point.x + self.offset_x, point.y + self.offset_y)
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::new(900, 600)
    }
}
