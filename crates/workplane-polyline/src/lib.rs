#![warn(missing_docs)]

//! A closed-polyline [`GeometryKernel`].
//!
//! Wires are closed loops of straight edges. Bounding boxes are exact, and
//! loose edges are reconnected by chaining coincident endpoints. Good
//! enough for sketch profiles made of lines, and for testing frame logic
//! without a B-rep kernel.

use workplane_bbox::Aabb3;
use workplane_frame::{AxisFrame, GeometryKernel};
use workplane_math::{Point2, Point3, Tolerance, Transform};

/// A closed loop of straight edges through `points`.
///
/// The closing edge from the last point back to the first is implied.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Point3>,
}

impl Polyline {
    /// Create a polyline from its vertices in order.
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// Create a polyline from 2D points in `frame`'s local coordinates.
    pub fn on_frame(frame: &AxisFrame, points: &[Point2]) -> Self {
        Self::new(points.iter().map(|p| frame.to_world(p)).collect())
    }

    /// An axis-aligned rectangle in `frame`'s local coordinates.
    ///
    /// Corners run counter-clockwise from `min` when viewed from +normal.
    pub fn rectangle(frame: &AxisFrame, min: Point2, max: Point2) -> Self {
        Self::on_frame(
            frame,
            &[
                min,
                Point2::new(max.x, min.y),
                max,
                Point2::new(min.x, max.y),
            ],
        )
    }

    /// Vertices in order.
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Number of vertices (and edges).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the polyline has no vertices.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Edges in order, including the closing edge.
    pub fn edges(&self) -> Vec<LineEdge> {
        let n = self.points.len();
        (0..n)
            .map(|i| LineEdge {
                start: self.points[i],
                end: self.points[(i + 1) % n],
            })
            .collect()
    }
}

/// A straight edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineEdge {
    /// Start point.
    pub start: Point3,
    /// End point.
    pub end: Point3,
}

/// Geometry kernel over [`Polyline`] wires.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolylineKernel {
    /// Endpoint coincidence tolerance for edge reconnection.
    pub tolerance: Tolerance,
}

impl PolylineKernel {
    /// A kernel with default tolerances.
    pub fn new() -> Self {
        Self::default()
    }
}

impl GeometryKernel for PolylineKernel {
    type Wire = Polyline;
    type Edge = LineEdge;

    fn transform_wire(&self, wire: &Polyline, t: &Transform) -> Polyline {
        Polyline::new(wire.points.iter().map(|p| t.apply_point(p)).collect())
    }

    fn bounding_box(&self, wire: &Polyline) -> Aabb3 {
        Aabb3::from_points(&wire.points)
    }

    fn vertices(&self, wire: &Polyline) -> Vec<Point3> {
        wire.points.clone()
    }

    fn edges(&self, wire: &Polyline) -> Vec<LineEdge> {
        wire.edges()
    }

    fn connect_edges_to_wires(&self, edges: Vec<LineEdge>) -> Vec<Polyline> {
        chain_edges(edges, &self.tolerance)
    }
}

/// Chain edges into closed polylines by matching endpoints within `tol`.
///
/// Edges may appear in any order and either orientation. Chains that do
/// not close, or have fewer than three vertices, are dropped.
fn chain_edges(edges: Vec<LineEdge>, tol: &Tolerance) -> Vec<Polyline> {
    let mut remaining = edges;
    let mut wires = Vec::new();

    while !remaining.is_empty() {
        let first = remaining.remove(0);
        let mut chain = vec![first.start, first.end];

        let mut changed = true;
        while changed {
            changed = false;
            let chain_start = chain[0];
            let chain_end = chain[chain.len() - 1];

            let mut i = 0;
            while i < remaining.len() {
                let LineEdge { start, end } = remaining[i];
                if tol.points_equal(&start, &chain_end) {
                    chain.push(end);
                } else if tol.points_equal(&end, &chain_end) {
                    chain.push(start);
                } else if tol.points_equal(&end, &chain_start) {
                    chain.insert(0, start);
                } else if tol.points_equal(&start, &chain_start) {
                    chain.insert(0, end);
                } else {
                    i += 1;
                    continue;
                }
                remaining.remove(i);
                changed = true;
                // The chain ends moved; rescan from the new ends.
                break;
            }
        }

        let closed = chain.len() >= 4 && tol.points_equal(&chain[0], &chain[chain.len() - 1]);
        if closed {
            chain.pop();
            wires.push(Polyline::new(chain));
        } else {
            log::debug!("dropping open chain of {} vertices", chain.len());
        }
    }

    wires
}
