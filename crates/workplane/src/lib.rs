#![warn(missing_docs)]

//! Work-plane frames and wire nesting.
//!
//! Re-exports the workplane crates behind one dependency:
//!
//! - [`math`]: points, vectors, [`Transform`], [`Tolerance`]
//! - [`bbox`]: [`Aabb2`], [`Aabb3`] and the 2D containment test
//! - [`frame`]: [`AxisFrame`], named presets, the [`GeometryKernel`] seam
//! - [`polyline`]: a closed-polyline kernel
//! - [`nesting`]: grouping wires into outer boundaries and holes
//!
//! # Example
//!
//! ```
//! use workplane::prelude::*;
//!
//! let frame = AxisFrame::named("front", Point3::new(0.0, 0.0, 5.0)).unwrap();
//! let kernel = PolylineKernel::new();
//!
//! let plate = Polyline::rectangle(&frame, Point2::new(0.0, 0.0), Point2::new(40.0, 20.0));
//! let hole_a = Polyline::rectangle(&frame, Point2::new(5.0, 5.0), Point2::new(10.0, 10.0));
//! let hole_b = Polyline::rectangle(&frame, Point2::new(25.0, 5.0), Point2::new(30.0, 10.0));
//! let wires = [plate, hole_a, hole_b];
//!
//! let faces = group_indices_by_build_order(&kernel, &wires, &frame);
//! assert_eq!(faces, vec![vec![0, 1, 2]]);
//! ```

pub use workplane_bbox as bbox;
pub use workplane_frame as frame;
pub use workplane_math as math;
pub use workplane_nesting as nesting;
pub use workplane_polyline as polyline;

pub use workplane_bbox::{find_outside_box_2d, Aabb2, Aabb3, Outside};
pub use workplane_frame::{
    rotate_wires, AxisFrame, FrameError, GeometryKernel, PlaneName, PlaneSpec,
};
pub use workplane_math::{
    angle_between, try_normalize, Dir3, MathError, Point2, Point3, Tolerance, Transform, Vec3,
};
pub use workplane_nesting::{
    group_indices_by_build_order, group_wires_by_build_order, par_group_indices_by_build_order,
};
pub use workplane_polyline::{LineEdge, Polyline, PolylineKernel};

/// Everything needed to build frames and group wires.
pub mod prelude {
    pub use crate::{
        group_indices_by_build_order, group_wires_by_build_order, AxisFrame, FrameError,
        GeometryKernel, PlaneName, PlaneSpec, Point2, Point3, Polyline, PolylineKernel,
        Transform, Vec3,
    };
}
