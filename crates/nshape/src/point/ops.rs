//! Operator impls for `Point`: element-wise `+`/`-`, scalar `*`/`/`, negation.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::Point;

#[inline]
#[track_caller]
pub(super) fn assert_same_dim(left: usize, right: usize) {
    assert!(
        left == right,
        "dimension mismatch: {left}-dimensional vs {right}-dimensional point"
    );
}

macro_rules! impl_elementwise {
    ($Trait:ident, $method:ident, $AssignTrait:ident, $assign:ident, $f:expr) => {
        impl<'a, 'b> $Trait<&'b Point> for &'a Point {
            type Output = Point;
            #[inline]
            #[track_caller]
            fn $method(self, rhs: &'b Point) -> Point {
                assert_same_dim(self.dim(), rhs.dim());
                Point {
                    coord: self.coord.zip_map(&rhs.coord, $f),
                }
            }
        }
        impl $Trait<Point> for Point {
            type Output = Point;
            #[inline]
            #[track_caller]
            fn $method(self, rhs: Point) -> Point {
                (&self).$method(&rhs)
            }
        }
        impl<'b> $Trait<&'b Point> for Point {
            type Output = Point;
            #[inline]
            #[track_caller]
            fn $method(self, rhs: &'b Point) -> Point {
                (&self).$method(rhs)
            }
        }
        impl<'a> $Trait<Point> for &'a Point {
            type Output = Point;
            #[inline]
            #[track_caller]
            fn $method(self, rhs: Point) -> Point {
                self.$method(&rhs)
            }
        }
        impl<'b> $AssignTrait<&'b Point> for Point {
            #[inline]
            #[track_caller]
            fn $assign(&mut self, rhs: &'b Point) {
                *self = (&*self).$method(rhs);
            }
        }
        impl $AssignTrait<Point> for Point {
            #[inline]
            #[track_caller]
            fn $assign(&mut self, rhs: Point) {
                *self = (&*self).$method(&rhs);
            }
        }
    };
}

impl_elementwise!(Add, add, AddAssign, add_assign, |a, b| a + b);
impl_elementwise!(Sub, sub, SubAssign, sub_assign, |a, b| a - b);

impl Mul<f64> for &Point {
    type Output = Point;
    #[inline]
    fn mul(self, s: f64) -> Point {
        Point {
            coord: self.coord.map(|x| x * s),
        }
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, s: f64) -> Point {
        &self * s
    }
}

impl Mul<&Point> for f64 {
    type Output = Point;
    #[inline]
    fn mul(self, p: &Point) -> Point {
        p * self
    }
}

impl Mul<Point> for f64 {
    type Output = Point;
    #[inline]
    fn mul(self, p: Point) -> Point {
        &p * self
    }
}

impl MulAssign<f64> for Point {
    #[inline]
    fn mul_assign(&mut self, s: f64) {
        self.coord.apply(|x| *x *= s);
    }
}

impl Div<f64> for &Point {
    type Output = Point;
    #[inline]
    fn div(self, s: f64) -> Point {
        Point {
            coord: self.coord.map(|x| x / s),
        }
    }
}

impl Div<f64> for Point {
    type Output = Point;
    #[inline]
    fn div(self, s: f64) -> Point {
        &self / s
    }
}

impl DivAssign<f64> for Point {
    #[inline]
    fn div_assign(&mut self, s: f64) {
        self.coord.apply(|x| *x /= s);
    }
}

impl Neg for &Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point {
            coord: self.coord.map(|x| -x),
        }
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        -&self
    }
}
