use criterion::{black_box, criterion_group, criterion_main, Criterion};
use workplane_frame::{AxisFrame, PlaneName};
use workplane_math::{Point2, Point3};
use workplane_nesting::{group_indices_by_build_order, par_group_indices_by_build_order};
use workplane_polyline::{Polyline, PolylineKernel};

/// `faces` plates in a row, each with a grid of `holes_per_side`² holes.
fn perforated_plates(frame: &AxisFrame, faces: usize, holes_per_side: usize) -> Vec<Polyline> {
    let mut wires = Vec::new();
    for f in 0..faces {
        let x0 = f as f64 * 120.0;
        wires.push(Polyline::rectangle(
            frame,
            Point2::new(x0, 0.0),
            Point2::new(x0 + 100.0, 100.0),
        ));
    }
    for f in 0..faces {
        let x0 = f as f64 * 120.0;
        let pitch = 100.0 / (holes_per_side as f64 + 1.0);
        for i in 1..=holes_per_side {
            for j in 1..=holes_per_side {
                let cx = x0 + i as f64 * pitch;
                let cy = j as f64 * pitch;
                wires.push(Polyline::rectangle(
                    frame,
                    Point2::new(cx - 1.0, cy - 1.0),
                    Point2::new(cx + 1.0, cy + 1.0),
                ));
            }
        }
    }
    wires
}

fn bench_nesting(c: &mut Criterion) {
    let frame = AxisFrame::preset(PlaneName::Top, Point3::new(0.0, 5.0, 0.0));
    let kernel = PolylineKernel::new();
    let wires = perforated_plates(&frame, 4, 5);

    c.bench_function("group_wires_4x25", |b| {
        b.iter(|| group_indices_by_build_order(&kernel, black_box(&wires), &frame))
    });
    c.bench_function("par_group_wires_4x25", |b| {
        b.iter(|| par_group_indices_by_build_order(&kernel, black_box(&wires), &frame))
    });
}

criterion_group!(benches, bench_nesting);
criterion_main!(benches);
