/// Euler-angle rotation of integer points
use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::geometry::Point3D;

/// Rotation angles in radians: yaw about Z, pitch about Y, roll about X
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerAngles {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl EulerAngles {
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self { alpha, beta, gamma }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

/// Transform builder for point rotation
pub struct Transform;

impl Transform {
    /// Combined intrinsic Z-Y-X rotation matrix for the given angles
    pub fn rotation_matrix(angles: &EulerAngles) -> Matrix3<f64> {
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), angles.alpha);
        let ry = Rotation3::from_axis_angle(&Vector3::y_axis(), angles.beta);
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), angles.gamma);

        // Apply rotations in order: Z, Y, X
        (rz * ry * rx).into_inner()
    }

    /// Multiply `point` by `matrix`, truncating each component toward zero
    pub fn apply(matrix: &Matrix3<f64>, point: Point3D) -> Point3D {
        let v = matrix * Vector3::new(point.x as f64, point.y as f64, point.z as f64);
        Point3D::new(v.x as i32, v.y as i32, v.z as i32)
    }
}

/// Rotate a single point by yaw `alpha`, pitch `beta` and roll `gamma`
pub fn rotate(point: Point3D, alpha: f64, beta: f64, gamma: f64) -> Point3D {
    let matrix = Transform::rotation_matrix(&EulerAngles::new(alpha, beta, gamma));
    Transform::apply(&matrix, point)
}
