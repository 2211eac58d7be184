#![warn(missing_docs)]

//! Face build order for planar wires.
//!
//! Given the closed wires of one or more planar faces, work out which wire
//! is an outer boundary and which are holes inside it. Wires are compared
//! by their 2D bounding boxes in a work-plane frame.
//!
//! The input is assumed to be ordered so that every outer wire comes before
//! the holes it contains, to have no islands (wires inside holes), and to
//! contain no construction geometry. None of this is checked; input that
//! breaks these rules is grouped wrongly rather than rejected.

use rayon::prelude::*;
use workplane_bbox::{find_outside_box_2d, Aabb2, Outside};
use workplane_frame::{AxisFrame, GeometryKernel};

/// Group wires into faces: `[outer, hole, hole, ...]` per face.
///
/// The first remaining wire opens a group; every other remaining wire that
/// `frame` reports inside it joins the group, in input order. Repeats until
/// all wires are used.
pub fn group_wires_by_build_order<'a, K: GeometryKernel>(
    kernel: &K,
    wires: &'a [K::Wire],
    frame: &AxisFrame,
) -> Vec<Vec<&'a K::Wire>> {
    group_indices_by_build_order(kernel, wires, frame)
        .into_iter()
        .map(|group| group.into_iter().map(|i| &wires[i]).collect())
        .collect()
}

/// Like [`group_wires_by_build_order`], returning indices into `wires`.
pub fn group_indices_by_build_order<K: GeometryKernel>(
    kernel: &K,
    wires: &[K::Wire],
    frame: &AxisFrame,
) -> Vec<Vec<usize>> {
    let bounds: Vec<Aabb2> = wires
        .iter()
        .map(|w| frame.projected_bounds(kernel, w))
        .collect();
    group_by_bounds(&bounds)
}

/// Like [`group_indices_by_build_order`], projecting the wires in parallel.
///
/// Only the projection runs on the rayon pool; grouping is sequential and
/// the result is identical to the sequential version.
pub fn par_group_indices_by_build_order<K>(
    kernel: &K,
    wires: &[K::Wire],
    frame: &AxisFrame,
) -> Vec<Vec<usize>>
where
    K: GeometryKernel + Sync,
    K::Wire: Sync,
{
    let bounds: Vec<Aabb2> = wires
        .par_iter()
        .map(|w| frame.projected_bounds(kernel, w))
        .collect();
    group_by_bounds(&bounds)
}

/// Group by 2D bounds. Same test as [`AxisFrame::is_wire_inside`], with
/// each wire projected once instead of once per pair.
fn group_by_bounds(bounds: &[Aabb2]) -> Vec<Vec<usize>> {
    let mut remaining: Vec<usize> = (0..bounds.len()).collect();
    let mut groups = Vec::new();

    while !remaining.is_empty() {
        let outer = remaining.remove(0);
        let mut group = vec![outer];
        remaining.retain(|&i| {
            let inside = find_outside_box_2d(&bounds[outer], &bounds[i]) == Some(Outside::First);
            if inside {
                log::trace!("wire {i} is inside wire {outer}");
                group.push(i);
            } else {
                log::trace!("wire {i} is not inside wire {outer}");
            }
            !inside
        });
        groups.push(group);
    }

    log::debug!(
        "grouped {} wires into {} faces",
        bounds.len(),
        groups.len()
    );
    groups
}
