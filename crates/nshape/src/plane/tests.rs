use super::*;
use crate::point;

fn viewport() -> Parallelogram {
    Parallelogram::from_point_and_vectors(&point![4, 4, 4], &point![-1, -1, 2], &point![1, -1, 0])
        .unwrap()
}

#[test]
fn params_round_trip_2d() {
    let pgm = Parallelogram::new(point![1, 1], point![2, 4], point![5, 2]).unwrap();
    let p = point![3, 3];
    let (a, b) = pgm.params_for_point(&p).unwrap();
    assert!(p.distance(&pgm.point_for_params(a, b)) < 1e-12);
}

#[test]
fn params_round_trip_3d() {
    let pgm = viewport();
    let p = point![4, 4, 4];
    let (a, b) = pgm.params_for_point(&p).unwrap();
    assert!(p.distance(&pgm.point_for_params(a, b)) < 1e-12);
    assert!((a - 0.5).abs() < 1e-12 && (b - 0.5).abs() < 1e-12);
}

#[test]
fn derived_corner_and_outline() {
    let pgm = Parallelogram::new(point![1, 1], point![2, 4], point![5, 2]).unwrap();
    assert_eq!(*pgm.p4(), [6.0, 5.0]);
    assert_eq!(*pgm.p3(), [5.0, 2.0]);
    let outline: Vec<_> = Parallelogram::edges().collect();
    assert_eq!(outline, vec![(0, 1), (1, 2), (2, 3), (3, 0)]);
    // consecutive corners differ by v1 or v2
    let c = pgm.corners();
    assert_eq!(&c[1] - &c[0], &c[2] - &c[3]);
}

#[test]
fn circumference_and_area() {
    let square = Parallelogram::new(point![0, 0], point![2, 0], point![0, 2]).unwrap();
    assert!((square.circumference() - 8.0).abs() < 1e-12);
    assert!((square.surface_area() - 4.0).abs() < 1e-12);

    let slanted = Parallelogram::new(point![1, 1], point![2, 4], point![5, 2]).unwrap();
    // |det(v1, v2)| = |1*1 - 3*4| = 11
    assert!((slanted.surface_area() - 11.0).abs() < 1e-9);

    let flat = Parallelogram::new(point![0, 0], point![1, 1], point![2, 2]).unwrap();
    assert!(flat.surface_area().abs() < 1e-6);
}

#[test]
fn degenerate_params_are_singular() {
    let flat = Parallelogram::new(point![0, 0, 0], point![1, 1, 1], point![2, 2, 2]).unwrap();
    assert_eq!(
        flat.params_for_point(&point![1, 0, 0]),
        Err(GeomError::SingularSystem {
            op: "params_for_point"
        })
    );
}

#[test]
fn small_parallelograms_are_not_singular() {
    let tiny = Parallelogram::new(point![0, 0], point![1e-3, 0], point![0, 1e-3]).unwrap();
    assert!(!tiny.is_degenerate());
    let (a, b) = tiny.params_for_point(&point![5e-4, 5e-4]).unwrap();
    assert!((a - 0.5).abs() < 1e-9 && (b - 0.5).abs() < 1e-9);

    let square = Parallelogram::new(point![0, 0, 0], point![1e-3, 0, 0], point![0, 1e-3, 0]).unwrap();
    let line = Line::new(point![5e-4, 5e-4, -1], point![5e-4, 5e-4, 1]).unwrap();
    match square.intersect_with_line(&line).unwrap() {
        Intersection::Point { a, b } => {
            assert!((a - 0.5).abs() < 1e-9 && (b - 0.5).abs() < 1e-9);
        }
        other => panic!("expected a point, got {other:?}"),
    }
}

#[test]
fn flat_parallelogram_is_degenerate() {
    let flat = Parallelogram::new(point![0, 0, 0], point![1, 1, 1], point![2, 2, 2]).unwrap();
    assert!(flat.is_degenerate());
    let line = Line::new(point![0, 0, -1], point![0, 0, 1]).unwrap();
    assert_eq!(flat.intersect_with_line(&line).unwrap(), Intersection::Degenerate);
}

#[test]
fn perpendicular_is_normal() {
    let pgm = viewport();
    let n = pgm.perpendicular().unwrap();
    assert_eq!(n, [2.0, 2.0, 2.0]);
    let flat2d = Parallelogram::new(point![0, 0], point![1, 0], point![0, 1]).unwrap();
    assert!(matches!(
        flat2d.perpendicular(),
        Err(GeomError::CrossProductDimension { dim: 2 })
    ));
}

#[test]
fn line_through_viewpoint_hits_center() {
    let pgm = viewport();
    let line = Line::new(point![0, 0, 0], point![8, 8, 8]).unwrap();
    let hit = pgm.intersection_params(&line).unwrap();
    let (a, b) = hit.params().unwrap();
    assert!((a - 0.5).abs() < 1e-12 && (b - 0.5).abs() < 1e-12);
    assert!(pgm.point_for_params(a, b).distance(&point![4, 4, 4]) < 1e-12);
}

#[test]
fn orthogonal_projection_of_points() {
    let pgm = viewport();
    let (a, b) = pgm.projection_params(&point![0, 1, 1]).unwrap().params().unwrap();
    assert!((a - 2.0 / 3.0).abs() < 1e-12);
    assert!(b.abs() < 1e-12);
    let foot = pgm.point_for_params(a, b);
    assert!(foot.distance(&point![10.0 / 3.0, 13.0 / 3.0, 13.0 / 3.0]) < 1e-12);

    let (a0, b0) = pgm.projection_params(&point![0, 0, 0]).unwrap().params().unwrap();
    assert!((a0 - 0.5).abs() < 1e-12 && (b0 - 0.5).abs() < 1e-12);
}

#[test]
fn parallel_and_degenerate_lines() {
    let pgm = viewport();
    // direction v2 lies in the plane, offset off-plane
    let off = Line::new(point![0, 0, 0], point![1, -1, 0]).unwrap();
    assert_eq!(
        pgm.intersect_with_line(&off).unwrap(),
        Intersection::Parallel { in_plane: false }
    );
    let inside = Line::new(point![4, 4, 4], point![5, 3, 4]).unwrap();
    assert_eq!(
        pgm.intersect_with_line(&inside).unwrap(),
        Intersection::Parallel { in_plane: true }
    );
    let dot = Line::new(point![1, 2, 3], point![1, 2, 3]).unwrap();
    let res = pgm.intersect_with_line(&dot).unwrap();
    assert_eq!(res, Intersection::Degenerate);
    assert_eq!(res.params_or_origin(), (0.0, 0.0));
    assert!(!res.is_unique());
}

#[test]
fn unsupported_combinations() {
    let pgm2 = Parallelogram::new(point![0, 0], point![1, 0], point![0, 1]).unwrap();
    let l2 = Line::new(point![0, 0], point![1, 1]).unwrap();
    assert!(matches!(
        pgm2.intersection_params(&l2),
        Err(GeomError::Unsupported { dim: 2, .. })
    ));

    let e = |i: usize| Point::from_iter((0..4).map(|j| if i == j { 1.0 } else { 0.0 }));
    let pgm4 = Parallelogram::new(Point::zeros(4), e(0), e(1)).unwrap();
    let other4 = Parallelogram::new(Point::zeros(4), e(2), e(3)).unwrap();
    assert!(matches!(
        pgm4.intersection_params(&other4),
        Err(GeomError::Unsupported { dim: 4, .. })
    ));

    let pgm = viewport();
    let line = Line::new(point![0, 0, 0], point![1, 1, 1]).unwrap();
    assert!(matches!(
        pgm.projection_params(&line),
        Err(GeomError::Unsupported { .. })
    ));
    assert!(matches!(
        pgm.intersection_params(&point![1, 1, 1]),
        Err(GeomError::Unsupported { .. })
    ));
}

#[test]
fn corners_must_share_dimension() {
    assert!(matches!(
        Parallelogram::new(point![0, 0], point![1, 0], point![0, 1, 0]),
        Err(GeomError::DimensionMismatch { .. })
    ));
}
