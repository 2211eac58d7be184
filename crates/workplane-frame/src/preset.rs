//! Conventionally named plane orientations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use workplane_math::Vec3;

use crate::FrameError;

/// One of the twelve conventional plane orientations.
///
/// Directions refer to the global axes:
///
/// | name   | x dir | y dir | normal |
/// |--------|-------|-------|--------|
/// | XY     | +x    | +y    | +z     |
/// | YZ     | +y    | +z    | +x     |
/// | ZX     | +z    | +x    | +y     |
/// | XZ     | +x    | +z    | -y     |
/// | YX     | +y    | +x    | -z     |
/// | ZY     | +z    | +y    | -x     |
/// | front  | +x    | +y    | +z     |
/// | back   | -x    | +y    | -z     |
/// | left   | +z    | +y    | -x     |
/// | right  | -z    | +y    | +x     |
/// | top    | +x    | -z    | +y     |
/// | bottom | +x    | +z    | -y     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaneName {
    /// `XY`
    #[serde(rename = "XY")]
    Xy,
    /// `YZ`
    #[serde(rename = "YZ")]
    Yz,
    /// `ZX`
    #[serde(rename = "ZX")]
    Zx,
    /// `XZ`
    #[serde(rename = "XZ")]
    Xz,
    /// `YX`
    #[serde(rename = "YX")]
    Yx,
    /// `ZY`
    #[serde(rename = "ZY")]
    Zy,
    /// `front`
    #[serde(rename = "front")]
    Front,
    /// `back`
    #[serde(rename = "back")]
    Back,
    /// `left`
    #[serde(rename = "left")]
    Left,
    /// `right`
    #[serde(rename = "right")]
    Right,
    /// `top`
    #[serde(rename = "top")]
    Top,
    /// `bottom`
    #[serde(rename = "bottom")]
    Bottom,
}

impl PlaneName {
    /// Every preset, in table order.
    pub const ALL: [PlaneName; 12] = [
        PlaneName::Xy,
        PlaneName::Yz,
        PlaneName::Zx,
        PlaneName::Xz,
        PlaneName::Yx,
        PlaneName::Zy,
        PlaneName::Front,
        PlaneName::Back,
        PlaneName::Left,
        PlaneName::Right,
        PlaneName::Top,
        PlaneName::Bottom,
    ];

    /// The conventional name.
    pub fn as_str(self) -> &'static str {
        match self {
            PlaneName::Xy => "XY",
            PlaneName::Yz => "YZ",
            PlaneName::Zx => "ZX",
            PlaneName::Xz => "XZ",
            PlaneName::Yx => "YX",
            PlaneName::Zy => "ZY",
            PlaneName::Front => "front",
            PlaneName::Back => "back",
            PlaneName::Left => "left",
            PlaneName::Right => "right",
            PlaneName::Top => "top",
            PlaneName::Bottom => "bottom",
        }
    }

    /// `(x_dir, normal)` of this preset in global coordinates.
    pub fn axes(self) -> (Vec3, Vec3) {
        let x = Vec3::x();
        let y = Vec3::y();
        let z = Vec3::z();
        match self {
            PlaneName::Xy => (x, z),
            PlaneName::Yz => (y, x),
            PlaneName::Zx => (z, y),
            PlaneName::Xz => (x, -y),
            PlaneName::Yx => (y, -z),
            PlaneName::Zy => (z, -x),
            PlaneName::Front => (x, z),
            PlaneName::Back => (-x, -z),
            PlaneName::Left => (z, -x),
            PlaneName::Right => (-z, x),
            PlaneName::Top => (x, y),
            PlaneName::Bottom => (x, -y),
        }
    }

    pub(crate) fn supported_names() -> String {
        Self::ALL.map(Self::as_str).join(", ")
    }
}

impl fmt::Display for PlaneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlaneName {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| FrameError::UnknownPresetName {
                name: s.to_string(),
            })
    }
}
