#![warn(missing_docs)]

//! Work-plane coordinate frames.
//!
//! An [`AxisFrame`] is a 2D coordinate system embedded in 3D space: an
//! origin, an in-plane X direction and a normal. It owns the forward
//! (global to local) and reverse (local to global) transforms and answers
//! whether one wire lies inside another once both are projected into it.
//!
//! Curve math is delegated to a [`GeometryKernel`] implementation.
//!
//! # Example
//!
//! ```
//! use workplane_frame::{AxisFrame, PlaneName};
//! use workplane_math::{Point2, Point3};
//!
//! let frame = AxisFrame::preset(PlaneName::Xy, Point3::new(10.0, 10.0, 0.0));
//! let world = frame.to_world(&Point2::new(1.0, 1.0));
//! assert!((world - Point3::new(11.0, 11.0, 0.0)).norm() < 1e-12);
//! ```

mod frame;
mod kernel;
mod preset;
mod spec;

pub use frame::AxisFrame;
pub use kernel::{rotate_wires, GeometryKernel};
pub use preset::PlaneName;
pub use spec::PlaneSpec;

use thiserror::Error;
use workplane_math::MathError;

/// Errors from frame construction and coordinate conversion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameError {
    /// A zero-length vector was given where a direction is required.
    #[error("{what} must be a non-zero vector")]
    DegenerateVector {
        /// Which input was degenerate.
        what: &'static str,
    },

    /// The X direction is not orthogonal to the plane normal.
    #[error("x direction must lie in the plane (normal · x_dir = {dot:.3e})")]
    NonOrthogonalAxis {
        /// Dot product of the unit normal and the unit X direction.
        dot: f64,
    },

    /// Lookup of a named plane failed.
    #[error("unknown plane name {name:?}; supported names are {}", PlaneName::supported_names())]
    UnknownPresetName {
        /// The name that was requested.
        name: String,
    },

    /// A coordinate input had neither 2 nor 3 components.
    #[error("cannot convert {len} coordinates; expected 2 or 3")]
    UnsupportedCoordinateConversion {
        /// Number of components supplied.
        len: usize,
    },

    /// The frame axes produced a non-invertible transform.
    #[error("frame transform is singular")]
    SingularTransform,
}

impl From<MathError> for FrameError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::DegenerateVector => FrameError::DegenerateVector { what: "vector" },
        }
    }
}

/// Result type for frame operations.
pub type Result<T> = std::result::Result<T, FrameError>;
