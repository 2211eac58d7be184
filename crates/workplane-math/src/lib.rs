#![warn(missing_docs)]

//! Math types for workplane frames.
//!
//! Thin wrappers around nalgebra: points, vectors, directions, the 4x4
//! affine [`Transform`] used to move between local and global coordinates,
//! and the [`Tolerance`] constants shared by the rest of the workspace.

mod vector;

pub use vector::{angle_between, try_normalize};

use nalgebra::{Matrix4, Unit, Vector3, Vector4};
use thiserror::Error;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// A point in 2D plane coordinates.
pub type Point2 = nalgebra::Point2<f64>;

/// Errors from vector algebra.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    /// A zero-length vector was given where a direction is required.
    #[error("cannot normalize a zero-length vector")]
    DegenerateVector,
}

/// A 4x4 affine transformation matrix.
///
/// Indexed as `matrix[(row, col)]`; the upper-left 3x3 block holds the
/// rotation/scale and column 3 the translation.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Translation by `(dx, dy, dz)`.
    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 3)] = dx;
        m[(1, 3)] = dy;
        m[(2, 3)] = dz;
        Self { matrix: m }
    }

    /// Non-uniform scale by `(sx, sy, sz)`.
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 0)] = sx;
        m[(1, 1)] = sy;
        m[(2, 2)] = sz;
        Self { matrix: m }
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(1, 1)] = c;
        m[(1, 2)] = -s;
        m[(2, 1)] = s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 2)] = s;
        m[(2, 0)] = -s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 1)] = -s;
        m[(1, 0)] = s;
        m[(1, 1)] = c;
        Self { matrix: m }
    }

    /// Rotation about X, then Y, then Z (angles in radians).
    ///
    /// The result is `Rz * Ry * Rx`, so a vector is rotated about X first.
    pub fn rotation_xyz(ax: f64, ay: f64, az: f64) -> Self {
        Self::rotation_z(az)
            .then(&Self::rotation_y(ay))
            .then(&Self::rotation_x(ax))
    }

    /// Compose: `self * other`, i.e. `other` is applied first.
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Transform a point.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        let v = self.matrix * Vector4::new(p.x, p.y, p.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }

    /// Transform a direction vector (ignores translation).
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        let r = self.matrix * Vector4::new(v.x, v.y, v.z, 0.0);
        Vec3::new(r.x, r.y, r.z)
    }

    /// The translation column.
    pub fn translation_part(&self) -> Vec3 {
        Vec3::new(self.matrix[(0, 3)], self.matrix[(1, 3)], self.matrix[(2, 3)])
    }

    /// Inverse of this transform, if it exists.
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Linear distance tolerance.
    pub linear: f64,
    /// Largest `|n · v|` of a unit normal `n` and an in-plane direction `v`
    /// still accepted as orthogonal.
    pub orthogonal: f64,
}

impl Tolerance {
    /// Default tolerances (1e-6 linear, 1e-5 orthogonality).
    pub const DEFAULT: Self = Self {
        linear: 1e-6,
        orthogonal: 1e-5,
    };

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }

    /// Check if two vectors are equal within tolerance.
    ///
    /// Absolute for short vectors, relative to the longer one otherwise.
    pub fn vectors_equal(&self, a: &Vec3, b: &Vec3) -> bool {
        let scale = a.norm().max(b.norm()).max(1.0);
        (a - b).norm() < self.linear * scale
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
