//! Closed-form vertex generators. Each returns points around the shape's
//! own reference point; translation happens in `Shape::new`.

use crate::point::Point;

/// Even permutations of four indices.
const EVEN_PERMS: [[usize; 4]; 12] = [
    [0, 1, 2, 3],
    [0, 2, 3, 1],
    [0, 3, 1, 2],
    [1, 0, 3, 2],
    [1, 2, 0, 3],
    [1, 3, 2, 0],
    [2, 0, 1, 3],
    [2, 1, 3, 0],
    [2, 3, 0, 1],
    [3, 0, 2, 1],
    [3, 1, 0, 2],
    [3, 2, 1, 0],
];

fn phi() -> f64 {
    (1.0 + 5f64.sqrt()) / 2.0
}

/// `-1` when bit `i` of `x` is set, else `1`.
#[inline]
fn sign(x: usize, i: usize) -> f64 {
    if x & (1 << i) != 0 {
        -1.0
    } else {
        1.0
    }
}

fn unit(dim: usize, i: usize, v: f64) -> Point {
    (0..dim).map(|j| if i == j { v } else { 0.0 }).collect()
}

fn permuted(p: [f64; 4], perm: [usize; 4]) -> Point {
    perm.iter().map(|&k| p[k]).collect()
}

/// Unit axis points plus one point equidistant from them, shifted so the
/// centroid sits at the origin.
pub(super) fn simplex(dim: usize) -> Vec<Point> {
    let d = dim as f64;
    let center = Point::splat(dim, (1.0 + d + (1.0 + d).sqrt()) / ((1.0 + d) * d));
    let apex = Point::splat(dim, (1.0 + (d + 1.0).sqrt()) / d);
    (0..dim)
        .map(|i| unit(dim, i, 1.0))
        .chain(std::iter::once(apex))
        .map(|p| p - &center)
        .collect()
}

/// Point `i` has coordinate `j` equal to `-0.5` when bit `j` of `i` is set.
pub(super) fn cube(dim: usize) -> Vec<Point> {
    (0..1usize << dim)
        .map(|i| (0..dim).map(|j| sign(i, j) * 0.5).collect())
        .collect()
}

/// `+e_i` at index `2i`, `-e_i` at `2i + 1`.
pub(super) fn cross_polytope(dim: usize) -> Vec<Point> {
    (0..dim)
        .flat_map(|i| [unit(dim, i, 1.0), unit(dim, i, -1.0)])
        .collect()
}

/// Cyclic permutations of `(0, ±a, ±b)`, four sign choices each.
fn cyclic_golden(pm: [f64; 2], mags: [f64; 3]) -> impl Iterator<Item = Point> {
    (0..3).flat_map(move |j| {
        (0..4usize).map(move |i| {
            (0..3)
                .map(|k| pm[(i >> ((k + j + 2) % 3)) & 1] * mags[(k + j) % 3])
                .collect()
        })
    })
}

pub(super) fn dodecahedron() -> Vec<Point> {
    let pm = [-1.0, 1.0];
    let corners = (0..8usize).map(move |i| {
        (0..3).map(|j| pm[(i >> j) & 1]).collect::<Point>()
    });
    corners
        .chain(cyclic_golden(pm, [0.0, 1.0 / phi(), phi()]))
        .collect()
}

pub(super) fn icosahedron() -> Vec<Point> {
    cyclic_golden([-0.5, 0.5], [0.0, 1.0, phi()]).collect()
}

/// Permutations of `(±1, ±1, 0, 0) / √2`.
pub(super) fn cell24() -> Vec<Point> {
    let s = 1.0 / 2f64.sqrt();
    let mut out = Vec::with_capacity(24);
    for a in 1..4 {
        for b in 0..a {
            for i in 0..4 {
                let mut p = [0.0; 4];
                p[a] = sign(i, 0) * s;
                p[b] = sign(i, 1) * s;
                out.push(Point::from(p));
            }
        }
    }
    out
}

pub(super) fn cell120() -> Vec<Point> {
    let sq5 = 5f64.sqrt();
    let phi = phi();
    let mut out = Vec::with_capacity(600);

    // permutations of (0, 0, ±2, ±2)
    for a in 1..4 {
        for b in 0..a {
            for i in 0..4 {
                let mut p = [0.0; 4];
                p[a] = 2.0 * sign(i, 0);
                p[b] = 2.0 * sign(i, 1);
                out.push(Point::from(p));
            }
        }
    }

    // one odd coordinate out, all sign choices
    for a in 0..16 {
        for i in 0..4 {
            let pick = |odd: f64, rest: f64| -> Point {
                (0..4)
                    .map(|j| sign(a, j) * if i == j { odd } else { rest })
                    .collect()
            };
            out.push(pick(sq5, 1.0));
            out.push(pick(phi.powi(-2), phi));
            out.push(pick(phi.powi(2), 1.0 / phi));
        }
    }

    // even permutations; the first two bases have a zero so half the signs repeat
    for a in 0..16 {
        let p0 = [0.0, sign(a, 2) * phi.powi(-2), sign(a, 1), sign(a, 0) * phi.powi(2)];
        let p1 = [0.0, sign(a, 2) / phi, sign(a, 1) * phi, sign(a, 0) * sq5];
        let p2 = [sign(a, 3) / phi, sign(a, 2), sign(a, 1) * phi, sign(a, 0) * 2.0];
        for perm in EVEN_PERMS {
            if a < 8 {
                out.push(permuted(p0, perm));
                out.push(permuted(p1, perm));
            }
            out.push(permuted(p2, perm));
        }
    }
    out
}

pub(super) fn cell600() -> Vec<Point> {
    let phi = phi();
    let mut out = Vec::with_capacity(120);
    for i in 0..16 {
        out.push((0..4).map(|j| 0.5 * sign(i, j)).collect());
    }
    for i in 0..4 {
        for b in 0..2 {
            out.push(unit(4, i, sign(b, 0)));
        }
    }
    for a in 0..8 {
        let p = [0.0, sign(a, 2) * phi / 2.0, sign(a, 1) / 2.0, sign(a, 0) / 2.0 / phi];
        for perm in EVEN_PERMS {
            out.push(permuted(p, perm));
        }
    }
    out
}
