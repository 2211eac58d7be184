//! The work-plane coordinate frame.

use workplane_bbox::{find_outside_box_2d, Aabb2, Outside};
use workplane_math::{try_normalize, Dir3, Point2, Point3, Tolerance, Transform, Vec3};

use crate::kernel::GeometryKernel;
use crate::preset::PlaneName;
use crate::{FrameError, Result};

/// A 2D coordinate system in 3D space.
///
/// The local X and Y axes lie on the plane, Z is the plane normal, and the
/// origin is a global point. Local 2D coordinates are mapped to global 3D
/// coordinates through the reverse transform and back through the forward
/// transform.
///
/// Frames are values. Every operation that changes the origin or the axes
/// returns a new frame with freshly computed transforms.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisFrame {
    origin: Point3,
    x_dir: Dir3,
    y_dir: Dir3,
    z_dir: Dir3,
    /// Global to local.
    forward: Transform,
    /// Local to global.
    reverse: Transform,
}

impl AxisFrame {
    /// Create a frame from an origin, an in-plane X direction and a normal.
    ///
    /// Neither vector needs to be normalized. The Y direction is derived as
    /// `normal × x_dir`, so the frame is always right-handed.
    ///
    /// # Errors
    ///
    /// - [`FrameError::DegenerateVector`] if `x_dir` or `normal` is zero.
    /// - [`FrameError::NonOrthogonalAxis`] if `x_dir` does not lie in the
    ///   plane, i.e. `|unit normal · x_dir|` is not below
    ///   [`Tolerance::orthogonal`]. `x_dir` is tested as given, so a long
    ///   x direction must lie proportionally closer to the plane.
    pub fn new(origin: Point3, x_dir: Vec3, normal: Vec3) -> Result<Self> {
        let z_dir =
            try_normalize(&normal).map_err(|_| FrameError::DegenerateVector { what: "normal" })?;
        Self::from_axes(origin, x_dir, z_dir)
    }

    fn from_axes(origin: Point3, x_dir: Vec3, z_dir: Dir3) -> Result<Self> {
        let x_unit =
            try_normalize(&x_dir).map_err(|_| FrameError::DegenerateVector { what: "x_dir" })?;
        // Only the normal is unit here; x_dir is normalized after the check.
        let dot = z_dir.as_ref().dot(&x_dir);
        // Written negated so a NaN dot product is rejected too.
        if !(dot.abs() < Tolerance::DEFAULT.orthogonal) {
            return Err(FrameError::NonOrthogonalAxis { dot });
        }
        let x_dir = x_unit;
        let y_dir = try_normalize(&z_dir.as_ref().cross(x_dir.as_ref()))?;
        let (forward, reverse) = frame_transforms(&origin, &x_dir, &y_dir, &z_dir)?;

        log::trace!(
            "frame at ({:.3}, {:.3}, {:.3}) normal ({:.3}, {:.3}, {:.3})",
            origin.x,
            origin.y,
            origin.z,
            z_dir.as_ref().x,
            z_dir.as_ref().y,
            z_dir.as_ref().z
        );

        Ok(Self {
            origin,
            x_dir,
            y_dir,
            z_dir,
            forward,
            reverse,
        })
    }

    /// Create a preset frame by its conventional name.
    ///
    /// # Errors
    ///
    /// [`FrameError::UnknownPresetName`] if `name` is not one of the twelve
    /// presets listed on [`PlaneName`].
    pub fn named(name: &str, origin: Point3) -> Result<Self> {
        Ok(Self::preset(name.parse()?, origin))
    }

    /// Create a preset frame at `origin`.
    pub fn preset(name: PlaneName, origin: Point3) -> Self {
        let (x_dir, normal) = name.axes();
        // Preset axes are unit, axis-aligned and orthogonal
        Self::new(origin, x_dir, normal).expect("preset axes form a valid frame")
    }

    /// The global XY plane at `origin`.
    pub fn xy(origin: Point3) -> Self {
        Self::preset(PlaneName::Xy, origin)
    }

    /// Origin in global coordinates.
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// Local X axis in global coordinates.
    pub fn x_dir(&self) -> Dir3 {
        self.x_dir
    }

    /// Local Y axis in global coordinates.
    pub fn y_dir(&self) -> Dir3 {
        self.y_dir
    }

    /// Plane normal in global coordinates.
    pub fn z_dir(&self) -> Dir3 {
        self.z_dir
    }

    /// The reversed normal.
    pub fn inv_z_dir(&self) -> Dir3 {
        -self.z_dir
    }

    /// Global to local transform.
    pub fn forward(&self) -> &Transform {
        &self.forward
    }

    /// Local to global transform.
    pub fn reverse(&self) -> &Transform {
        &self.reverse
    }

    /// A frame with the same axes and a new global origin.
    pub fn with_origin(&self, origin: Point3) -> Result<Self> {
        Self::from_axes(origin, self.x_dir.into_inner(), self.z_dir)
    }

    /// Move the origin within the plane.
    ///
    /// `(x, y)` is measured in this frame's local coordinates, so offsets
    /// accumulate along the frame's own axes: two calls with `(2, 2)` on the
    /// XY plane put the origin at global `(4, 4, 0)`.
    pub fn with_origin_2d(&self, x: f64, y: f64) -> Result<Self> {
        self.with_origin(self.to_world(&Point2::new(x, y)))
    }

    /// A frame with the same origin and normal and a new X direction.
    pub fn with_x_dir(&self, x_dir: Vec3) -> Result<Self> {
        Self::from_axes(self.origin, x_dir, self.z_dir)
    }

    /// A copy of this frame rotated about its axes by `[x, y, z]` degrees.
    ///
    /// Rotations are applied about X, then Y, then Z. The origin does not
    /// move. Rotating about Z alone keeps the plane parallel to itself.
    pub fn rotated(&self, degrees: [f64; 3]) -> Result<Self> {
        let [rx, ry, rz] = degrees.map(f64::to_radians);
        let m = Transform::rotation_xyz(rx, ry, rz);
        let x_dir = m.apply_vec(self.x_dir.as_ref());
        let z_dir = m.apply_vec(self.z_dir.as_ref());
        Self::new(self.origin, x_dir, z_dir)
    }

    /// Convert a global point to local coordinates.
    ///
    /// Points on the plane come back with a zero Z component.
    pub fn to_local(&self, p: &Point3) -> Point3 {
        self.forward.apply_point(p)
    }

    /// Convert a wire to local coordinates through the kernel.
    pub fn to_local_wire<K: GeometryKernel>(&self, kernel: &K, wire: &K::Wire) -> K::Wire {
        kernel.transform_wire(wire, &self.forward)
    }

    /// Convert a local 2D point on the plane to global coordinates.
    pub fn to_world(&self, p: &Point2) -> Point3 {
        self.to_world_3d(&Point3::new(p.x, p.y, 0.0))
    }

    /// Convert a local 3D point to global coordinates.
    pub fn to_world_3d(&self, p: &Point3) -> Point3 {
        self.reverse.apply_point(p)
    }

    /// Convert local coordinates given as a 2- or 3-element slice.
    ///
    /// A missing third component is taken as zero.
    ///
    /// # Errors
    ///
    /// [`FrameError::UnsupportedCoordinateConversion`] for any other length.
    pub fn to_world_coords(&self, coords: &[f64]) -> Result<Point3> {
        match *coords {
            [x, y] => Ok(self.to_world(&Point2::new(x, y))),
            [x, y, z] => Ok(self.to_world_3d(&Point3::new(x, y, z))),
            _ => Err(FrameError::UnsupportedCoordinateConversion { len: coords.len() }),
        }
    }

    /// The in-plane equivalent of a global transform: `forward * t * reverse`.
    pub fn compute_transform(&self, t: &Transform) -> Transform {
        self.forward.then(t).then(&self.reverse)
    }

    /// 2D bounds of `wire` after projecting it into this frame.
    pub fn projected_bounds<K: GeometryKernel>(&self, kernel: &K, wire: &K::Wire) -> Aabb2 {
        kernel.bounding_box(&self.to_local_wire(kernel, wire)).to_2d()
    }

    /// Is `candidate` inside `outer` once both are projected into this frame?
    ///
    /// Only the 2D bounding boxes are compared, and containment must be
    /// strict. Two crossing wires whose boxes happen to nest are reported as
    /// nested; callers rely on this cheap test, so it stays a box test.
    pub fn is_wire_inside<K: GeometryKernel>(
        &self,
        kernel: &K,
        outer: &K::Wire,
        candidate: &K::Wire,
    ) -> bool {
        let outer_box = self.projected_bounds(kernel, outer);
        let candidate_box = self.projected_bounds(kernel, candidate);
        find_outside_box_2d(&outer_box, &candidate_box) == Some(Outside::First)
    }
}

/// Compute `(forward, reverse)` for a frame.
///
/// The rotation rows are the frame axes. Its inverse gets the origin as
/// translation and becomes the local-to-global transform; inverting that
/// gives global-to-local. Both stored matrices come out of this one path.
fn frame_transforms(
    origin: &Point3,
    x_dir: &Dir3,
    y_dir: &Dir3,
    z_dir: &Dir3,
) -> Result<(Transform, Transform)> {
    let mut r = Transform::identity();
    for (row, axis) in [x_dir, y_dir, z_dir].into_iter().enumerate() {
        let a = axis.as_ref();
        r.matrix[(row, 0)] = a.x;
        r.matrix[(row, 1)] = a.y;
        r.matrix[(row, 2)] = a.z;
    }

    let mut inv_r = r.inverse().ok_or(FrameError::SingularTransform)?;
    inv_r.matrix[(0, 3)] = origin.x;
    inv_r.matrix[(1, 3)] = origin.y;
    inv_r.matrix[(2, 3)] = origin.z;

    let forward = inv_r.inverse().ok_or(FrameError::SingularTransform)?;
    Ok((forward, inv_r))
}
