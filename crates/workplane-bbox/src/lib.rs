#![warn(missing_docs)]

//! Axis-aligned bounding boxes.
//!
//! Boxes are values: they are computed from a point set (or by a geometry
//! kernel) and only ever grown by methods that return a new box. The 2D
//! containment test [`find_outside_box_2d`] drives wire nesting.

use workplane_math::{Point2, Point3, Vec3};

/// Axis-aligned bounding box in 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb3 {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Aabb3 {
    /// Create an AABB from min and max corners.
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Create an empty (inverted) AABB suitable for expansion.
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Smallest box enclosing all `points`. Empty if there are none.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point3>) -> Self {
        let mut aabb = Self::empty();
        for p in points {
            aabb.include_point(p);
        }
        aabb
    }

    fn include_point(&mut self, p: &Point3) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    /// True if no point has been included.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Extent along X.
    pub fn x_len(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along Y.
    pub fn y_len(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Extent along Z.
    pub fn z_len(&self) -> f64 {
        self.max.z - self.min.z
    }

    /// Center of the box.
    pub fn center(&self) -> Point3 {
        Point3::from((self.min.coords + self.max.coords) * 0.5)
    }

    /// Length of the min-to-max diagonal.
    pub fn diagonal_length(&self) -> f64 {
        (self.max - self.min).norm()
    }

    /// A new box that also encloses `p`.
    pub fn with_point(&self, p: &Point3) -> Self {
        let mut out = *self;
        out.include_point(p);
        out
    }

    /// A new box that also encloses the point with coordinates `v`.
    pub fn with_vec(&self, v: &Vec3) -> Self {
        self.with_point(&Point3::from(*v))
    }

    /// A new box enclosing both `self` and `other`.
    pub fn union(&self, other: &Aabb3) -> Self {
        if other.is_empty() {
            return *self;
        }
        self.with_point(&other.min).with_point(&other.max)
    }

    /// Is `other` inside this box? Touching bounds count as inside.
    ///
    /// Full 3D test on all six bounds; wire nesting uses
    /// [`find_outside_box_2d`] instead.
    pub fn is_inside(&self, other: &Aabb3) -> bool {
        self.min.x <= other.min.x
            && self.max.x >= other.max.x
            && self.min.y <= other.min.y
            && self.max.y >= other.max.y
            && self.min.z <= other.min.z
            && self.max.z >= other.max.z
    }

    /// Drop the Z extent.
    pub fn to_2d(&self) -> Aabb2 {
        Aabb2 {
            min: Point2::new(self.min.x, self.min.y),
            max: Point2::new(self.max.x, self.max.y),
        }
    }
}

/// Axis-aligned bounding box in 2D plane coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Minimum corner.
    pub min: Point2,
    /// Maximum corner.
    pub max: Point2,
}

impl Aabb2 {
    /// Create an AABB from min and max corners.
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// Smallest box enclosing all `points`, or `None` if there are none.
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut aabb = Self::new(*first, *first);
        for p in rest {
            aabb.min.x = aabb.min.x.min(p.x);
            aabb.min.y = aabb.min.y.min(p.y);
            aabb.max.x = aabb.max.x.max(p.x);
            aabb.max.y = aabb.max.y.max(p.y);
        }
        Some(aabb)
    }

    /// Extent along X.
    pub fn x_len(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along Y.
    pub fn y_len(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Center of the box.
    pub fn center(&self) -> Point2 {
        Point2::from((self.min.coords + self.max.coords) * 0.5)
    }

    /// Inclusive point test.
    pub fn contains_point(&self, p: &Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Does this box strictly enclose `other` on both axes?
    pub fn strictly_encloses(&self, other: &Aabb2) -> bool {
        self.min.x < other.min.x
            && self.max.x > other.max.x
            && self.min.y < other.min.y
            && self.max.y > other.max.y
    }
}

/// Which of two boxes is the outer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outside {
    /// The first argument encloses the second.
    First,
    /// The second argument encloses the first.
    Second,
}

/// Compare two boxes in 2D and report which one, if any, encloses the other.
///
/// Comparisons are strict with no tolerance: equal boxes, boxes sharing an
/// edge, overlapping boxes and disjoint boxes all give `None`.
pub fn find_outside_box_2d(a: &Aabb2, b: &Aabb2) -> Option<Outside> {
    if a.strictly_encloses(b) {
        Some(Outside::First)
    } else if b.strictly_encloses(a) {
        Some(Outside::Second)
    } else {
        None
    }
}
