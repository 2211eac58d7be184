//! Serializable frame descriptions.

use serde::{Deserialize, Serialize};
use workplane_math::{Point3, Vec3};

use crate::frame::AxisFrame;
use crate::preset::PlaneName;
use crate::Result;

/// A frame as written in a config file.
///
/// ```json
/// { "preset": "front", "origin": [0.0, 0.0, 5.0] }
/// { "origin": [0.0, 0.0, 0.0], "x_dir": [0.0, 1.0, 0.0], "normal": [1.0, 0.0, 0.0] }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlaneSpec {
    /// One of the named presets. `origin` defaults to the global origin.
    Preset {
        /// Preset name.
        preset: PlaneName,
        /// Origin in global coordinates.
        #[serde(default)]
        origin: [f64; 3],
    },
    /// An arbitrary frame.
    Custom {
        /// Origin in global coordinates.
        origin: [f64; 3],
        /// In-plane X direction.
        x_dir: [f64; 3],
        /// Plane normal.
        normal: [f64; 3],
    },
}

impl PlaneSpec {
    /// Build the described frame.
    pub fn build(&self) -> Result<AxisFrame> {
        match self {
            PlaneSpec::Preset { preset, origin } => {
                Ok(AxisFrame::preset(*preset, Point3::from(*origin)))
            }
            PlaneSpec::Custom {
                origin,
                x_dir,
                normal,
            } => AxisFrame::new(
                Point3::from(*origin),
                Vec3::from(*x_dir),
                Vec3::from(*normal),
            ),
        }
    }
}
