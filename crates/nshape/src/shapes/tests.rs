use super::*;
use crate::point;
use proptest::prelude::*;

/// Point count, edge count, and every edge at the expected length.
fn check(kind: ShapeKind, dim: usize, npoints: usize, nedges: usize) {
    let shape = Shape::new(kind, &Point::zeros(dim)).unwrap();
    assert_eq!(shape.points.len(), npoints, "{} in {dim}-d points", kind.name());
    assert_eq!(shape.edges.len(), nedges, "{} in {dim}-d edges", kind.name());
    for len in shape.edge_lengths() {
        assert!(
            (len - kind.edge_length()).abs() < 1e-9,
            "{} edge of length {len}",
            kind.name()
        );
    }
}

#[test]
fn three_dimensional_counts() {
    check(ShapeKind::Simplex, 3, 4, 6);
    check(ShapeKind::Cube, 3, 8, 12);
    check(ShapeKind::CrossPolytope, 3, 6, 12);
    check(ShapeKind::Dodecahedron, 3, 20, 30);
    check(ShapeKind::Icosahedron, 3, 12, 30);
}

#[test]
fn family_counts_in_other_dimensions() {
    check(ShapeKind::Simplex, 1, 2, 1);
    check(ShapeKind::Simplex, 2, 3, 3);
    check(ShapeKind::Simplex, 4, 5, 10);
    check(ShapeKind::Cube, 1, 2, 1);
    check(ShapeKind::Cube, 2, 4, 4);
    check(ShapeKind::Cube, 4, 16, 32);
    check(ShapeKind::CrossPolytope, 2, 4, 4);
    check(ShapeKind::CrossPolytope, 4, 8, 24);
}

#[test]
fn four_dimensional_cells() {
    check(ShapeKind::Cell24, 4, 24, 96);
    check(ShapeKind::Cell600, 4, 120, 720);
}

#[test]
fn cell120_counts() {
    check(ShapeKind::Cell120, 4, 600, 1200);
}

#[test]
fn fixed_dimension_shapes_reject_other_dims() {
    let err = Shape::new(ShapeKind::Dodecahedron, &Point::zeros(4)).unwrap_err();
    assert_eq!(
        err,
        GeomError::Unsupported {
            op: "dodecahedron",
            dim: 4
        }
    );
    assert!(Shape::new(ShapeKind::Cell24, &Point::zeros(3)).is_err());
    assert!(Shape::new(ShapeKind::Simplex, &Point::zeros(0)).is_err());
    assert!(Shape::new(ShapeKind::Cube, &Point::zeros(MAX_CUBE_DIM + 1)).is_err());
}

#[test]
fn simplex_is_centred_on_origin() {
    for dim in 1..8 {
        let c = Shape::new(ShapeKind::Simplex, &Point::zeros(dim))
            .unwrap()
            .centroid()
            .unwrap();
        assert!(c.length() < 1e-12, "dim {dim}: {c}");
    }
}

#[test]
fn translation_moves_every_point() {
    let origin = point![0, 0, 1];
    let cube = Shape::new(ShapeKind::Cube, &origin).unwrap();
    assert_eq!(cube.points[0], [0.5, 0.5, 1.5]);
    assert_eq!(cube.points[7], [-0.5, -0.5, 0.5]);
    assert_eq!(cube.centroid().unwrap(), origin);

    let back = cube.translated(&-&origin).unwrap();
    assert_eq!(back, Shape::new(ShapeKind::Cube, &Point::zeros(3)).unwrap());
    assert!(cube.translated(&point![1, 1]).is_err());
}

#[test]
fn cross_polytope_pairs_share_axes() {
    let s = Shape::new(ShapeKind::CrossPolytope, &Point::zeros(3)).unwrap();
    assert_eq!(s.points[2], [0.0, 1.0, 0.0]);
    assert_eq!(s.points[3], [0.0, -1.0, 0.0]);
    assert!(!s.edges.contains(&(2, 3)));
    assert!(s.edges.contains(&(0, 2)));
}

#[test]
fn axes_span_extent() {
    let axes = Shape::axes(3, 10.0);
    assert_eq!(axes.points.len(), 6);
    assert_eq!(axes.edges, vec![(0, 1), (2, 3), (4, 5)]);
    assert_eq!(axes.points[4], [0.0, 0.0, -10.0]);
    assert!(axes.edge_lengths().all(|l| l == 20.0));
    assert_eq!(axes.label, "axes");
}

#[test]
fn empty_shape_has_no_centroid() {
    let s = Shape {
        label: "empty",
        points: vec![],
        edges: vec![],
    };
    assert_eq!(s.dim(), 0);
    assert!(s.centroid().is_none());
}

proptest! {
    #[test]
    fn cube_edges_have_unit_length(dim in 1usize..7) {
        let cube = Shape::new(ShapeKind::Cube, &Point::zeros(dim)).unwrap();
        prop_assert_eq!(cube.edges.len(), dim << (dim - 1));
        for len in cube.edge_lengths() {
            prop_assert!((len - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn simplex_is_complete_graph(dim in 1usize..12) {
        let s = Shape::new(ShapeKind::Simplex, &Point::zeros(dim)).unwrap();
        prop_assert_eq!(s.edges.len(), (dim + 1) * dim / 2);
        for len in s.edge_lengths() {
            prop_assert!((len - 2f64.sqrt()).abs() < 1e-9);
        }
    }
}
