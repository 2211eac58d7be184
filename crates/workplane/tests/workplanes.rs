//! End-to-end checks across frames, kernels and nesting.

use approx::assert_relative_eq;
use workplane::prelude::*;
use workplane::{find_outside_box_2d, Aabb3, Outside};

#[test]
fn offset_plane_numeric_case() {
    let p = AxisFrame::xy(Point3::new(10.0, 10.0, 0.0));
    assert_relative_eq!(
        p.to_world(&Point2::new(1.0, 1.0)),
        Point3::new(11.0, 11.0, 0.0),
        epsilon = 1e-9
    );
    let local = p.to_local(&Point3::new(12.0, 12.0, 0.0));
    assert_relative_eq!(local.xy(), Point2::new(2.0, 2.0), epsilon = 1e-9);
    assert!(local.z.abs() < 1e-9);
}

#[test]
fn every_preset_round_trips_points() {
    let origin = Point3::new(1.5, -2.0, 3.25);
    for name in PlaneName::ALL {
        let f = AxisFrame::preset(name, origin);
        assert_relative_eq!(f.to_local(&origin), Point3::origin(), epsilon = 1e-9);
        for p in [Point3::new(4.0, 5.0, 6.0), Point3::new(-7.0, 0.5, 2.0)] {
            assert_relative_eq!(f.to_world_3d(&f.to_local(&p)), p, epsilon = 1e-9);
        }
        let (x_dir, normal) = name.axes();
        assert_relative_eq!(*f.x_dir().as_ref(), x_dir, epsilon = 1e-12);
        assert_relative_eq!(*f.z_dir().as_ref(), normal, epsilon = 1e-12);
    }
}

#[test]
fn frames_from_config_group_wires() {
    let spec: PlaneSpec = serde_json::from_str(
        r#"{ "origin": [0.0, 0.0, 0.0], "x_dir": [1.0, 1.0, 0.0], "normal": [0.0, 0.0, 1.0] }"#,
    )
    .unwrap();
    let frame = spec.build().unwrap();
    let kernel = PolylineKernel::new();

    // A diamond in global XY is an axis-aligned square in this frame.
    let outer = Polyline::rectangle(&frame, Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));
    let hole = Polyline::rectangle(&frame, Point2::new(4.0, 4.0), Point2::new(6.0, 6.0));
    let other = Polyline::rectangle(&frame, Point2::new(20.0, 0.0), Point2::new(22.0, 2.0));
    let wires = [outer, hole, other];

    let groups = group_wires_by_build_order(&kernel, &wires, &frame);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0], vec![&wires[0], &wires[1]]);
    assert_eq!(groups[1], vec![&wires[2]]);
}

#[test]
fn rotated_frame_sees_different_nesting() {
    // Two wires drawn on XY: a thin bar and a wide slab around it.
    let xy = AxisFrame::xy(Point3::origin());
    let kernel = PolylineKernel::new();
    let slab = Polyline::rectangle(&xy, Point2::new(0.0, 0.0), Point2::new(10.0, 4.0));
    let bar = Polyline::rectangle(&xy, Point2::new(1.0, 1.0), Point2::new(9.0, 3.0));
    assert!(xy.is_wire_inside(&kernel, &slab, &bar));

    // Seen from the XZ plane both wires collapse onto a line: no nesting.
    let xz = AxisFrame::preset(PlaneName::Xz, Point3::origin());
    assert!(!xz.is_wire_inside(&kernel, &slab, &bar));
}

#[test]
fn in_plane_rotation_about_frame_origin() {
    let frame = AxisFrame::preset(PlaneName::Left, Point3::new(0.0, 2.0, 0.0));
    let kernel = PolylineKernel::new();
    let sq = Polyline::rectangle(&frame, Point2::new(0.0, 0.0), Point2::new(2.0, 2.0));

    // Half a turn about the plane normal through the frame origin.
    let half_turn = Transform::rotation_z(std::f64::consts::PI);
    let global = frame.reverse().then(&half_turn).then(frame.forward());
    let moved = kernel.transform_wire(&sq, &global);

    let local = frame.projected_bounds(&kernel, &moved);
    assert_relative_eq!(local.min, Point2::new(-2.0, -2.0), epsilon = 1e-9);
    assert_relative_eq!(local.max, Point2::new(0.0, 0.0), epsilon = 1e-9);
}

#[test]
fn strict_box_containment_cases() {
    let a = Aabb3::new(Point3::origin(), Point3::new(4.0, 4.0, 0.0)).to_2d();
    let b = Aabb3::new(Point3::new(1.0, 1.0, 0.0), Point3::new(3.0, 3.0, 0.0)).to_2d();
    assert_eq!(find_outside_box_2d(&a, &b), Some(Outside::First));
    assert_eq!(find_outside_box_2d(&b, &a), Some(Outside::Second));
    assert_eq!(find_outside_box_2d(&a, &a), None);
}

#[test]
fn non_orthogonal_frame_is_rejected() {
    let err = AxisFrame::new(Point3::origin(), Vec3::x(), Vec3::x()).unwrap_err();
    assert!(matches!(err, FrameError::NonOrthogonalAxis { .. }));
    assert!(err.to_string().contains("x direction must lie in the plane"));
}
