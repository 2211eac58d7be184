//! The geometry kernel seam.

use workplane_bbox::Aabb3;
use workplane_math::{Point3, Transform};

/// The curve operations frames need from a B-rep or polyline kernel.
///
/// Wires are opaque to this crate: they are transformed, bounded and
/// compared by the kernel only.
pub trait GeometryKernel {
    /// A closed loop of connected edges.
    type Wire: Clone;

    /// A single curve segment of a wire.
    type Edge: Clone;

    /// Apply an affine transform to every curve of `wire`.
    fn transform_wire(&self, wire: &Self::Wire, t: &Transform) -> Self::Wire;

    /// Exact axis-aligned bounds of `wire` in its current coordinates.
    fn bounding_box(&self, wire: &Self::Wire) -> Aabb3;

    /// Vertices of `wire` in order.
    fn vertices(&self, wire: &Self::Wire) -> Vec<Point3>;

    /// Edges of `wire` in order.
    fn edges(&self, wire: &Self::Wire) -> Vec<Self::Edge>;

    /// Reassemble a bag of edges into closed, ordered wires.
    fn connect_edges_to_wires(&self, edges: Vec<Self::Edge>) -> Vec<Self::Wire>;
}

/// Apply `rotation` to each wire, repairing the ones that no longer close.
///
/// A transformed wire is kept as-is when its first vertex lands exactly on
/// the first or last vertex of its source. Otherwise the source and
/// transformed edges are merged and reconnected by the kernel, and the
/// first reconnected wire is kept.
pub fn rotate_wires<K: GeometryKernel>(
    kernel: &K,
    wires: &[K::Wire],
    rotation: &Transform,
) -> Vec<K::Wire> {
    let mut result = Vec::with_capacity(wires.len());
    for (i, wire) in wires.iter().enumerate() {
        let moved = kernel.transform_wire(wire, rotation);

        let source = kernel.vertices(wire);
        let moved_start = kernel.vertices(&moved).first().copied();
        let meets_source = match (moved_start, source.first(), source.last()) {
            (Some(start), Some(first), Some(last)) => start == *first || start == *last,
            _ => false,
        };
        if meets_source {
            result.push(moved);
            continue;
        }

        let mut edges = kernel.edges(wire);
        edges.extend(kernel.edges(&moved));
        match kernel.connect_edges_to_wires(edges).into_iter().next() {
            Some(joined) => result.push(joined),
            None => log::warn!("wire {i}: edges did not reconnect after rotation, dropped"),
        }
    }
    result
}
