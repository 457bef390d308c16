//! Guessing closed-form names for floats.
//!
//! Purpose
//! - Print coordinates of the regular polytopes (and their n-spherical angles)
//!   as exact expressions like `(sqrt(5)+1)/2` or `atan(sqrt(2))`.
//!
//! Conventions
//! - Candidates are tried in a fixed order and the first one within
//!   `NAME_EPS` wins, so simpler forms shadow more complex ones with the same
//!   value (`sqrt(4)` never shows, `2` comes first).
//! - The sign is split off before searching; anything unmatched prints as the
//!   signed decimal.
//! - This is a heuristic: a match says the value is close, not that it is the
//!   expression.

use std::f64::consts::PI;
use std::fmt;

use crate::cfg::NAME_EPS;

/// Arguments of the arctangent forms.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Arg {
    Int(u32),
    Recip(u32),
    Sqrt(u32),
    RecipSqrt(u32),
    /// `m / d`
    Ratio(u32, u32),
    /// `m / sqrt(d)`
    OverSqrt(u32, u32),
    GoldenPlus,
    GoldenMinus,
}

impl Arg {
    fn value(self) -> f64 {
        let sq5 = 5f64.sqrt();
        match self {
            Arg::Int(d) => d as f64,
            Arg::Recip(d) => 1.0 / d as f64,
            Arg::Sqrt(d) => (d as f64).sqrt(),
            Arg::RecipSqrt(d) => 1.0 / (d as f64).sqrt(),
            Arg::Ratio(m, d) => m as f64 / d as f64,
            Arg::OverSqrt(m, d) => m as f64 / (d as f64).sqrt(),
            Arg::GoldenPlus => (sq5 + 1.0) / 2.0,
            Arg::GoldenMinus => (sq5 - 1.0) / 2.0,
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Arg::Int(d) => write!(f, "{d}"),
            Arg::Recip(d) => write!(f, "1/{d}"),
            Arg::Sqrt(d) => write!(f, "sqrt({d})"),
            Arg::RecipSqrt(d) => write!(f, "1/sqrt({d})"),
            Arg::Ratio(m, d) => write!(f, "{m}/{d}"),
            Arg::OverSqrt(m, d) => write!(f, "{m}/sqrt({d})"),
            Arg::GoldenPlus => f.write_str("(sqrt(5)+1)/2"),
            Arg::GoldenMinus => f.write_str("(sqrt(5)-1)/2"),
        }
    }
}

/// What is done with `t = atan(arg)`.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Angle {
    Atan,
    PiMinus,
    Half,
    HalfPiMinus,
    PiMinusHalf,
    HalfPiPlus,
}

impl Angle {
    const PAIR: [Angle; 2] = [Angle::Atan, Angle::PiMinus];
    const ALL: [Angle; 6] = [
        Angle::Atan,
        Angle::PiMinus,
        Angle::Half,
        Angle::HalfPiMinus,
        Angle::PiMinusHalf,
        Angle::HalfPiPlus,
    ];

    fn apply(self, t: f64) -> f64 {
        match self {
            Angle::Atan => t,
            Angle::PiMinus => PI - t,
            Angle::Half => t / 2.0,
            Angle::HalfPiMinus => (PI - t) / 2.0,
            Angle::PiMinusHalf => PI - t / 2.0,
            Angle::HalfPiPlus => (PI + t) / 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Form {
    Literal(f64, &'static str),
    Int(u32),
    Recip(u32),
    Sqrt(u32),
    RecipSqrt(u32),
    PiOver(u32),
    Angle(Angle, Arg),
    /// `d / m`
    Ratio(u32, u32),
    /// `sqrt(d) / m`
    SqrtOver(u32, u32),
    /// `m * pi / d`
    PiTimes(u32, u32),
}

impl Form {
    fn value(self) -> f64 {
        match self {
            Form::Literal(v, _) => v,
            Form::Int(d) => d as f64,
            Form::Recip(d) => 1.0 / d as f64,
            Form::Sqrt(d) => (d as f64).sqrt(),
            Form::RecipSqrt(d) => 1.0 / (d as f64).sqrt(),
            Form::PiOver(d) => PI / d as f64,
            Form::Angle(k, arg) => k.apply(arg.value().atan()),
            Form::Ratio(d, m) => d as f64 / m as f64,
            Form::SqrtOver(d, m) => (d as f64).sqrt() / m as f64,
            Form::PiTimes(m, d) => m as f64 * PI / d as f64,
        }
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Form::Literal(_, s) => f.write_str(s),
            Form::Int(d) => write!(f, "{d}"),
            Form::Recip(d) => write!(f, "1/{d}"),
            Form::Sqrt(d) => write!(f, "sqrt({d})"),
            Form::RecipSqrt(d) => write!(f, "1/sqrt({d})"),
            Form::PiOver(d) => write!(f, "pi/{d}"),
            Form::Angle(k, a) => match k {
                Angle::Atan => write!(f, "atan({a})"),
                Angle::PiMinus => write!(f, "(pi-atan({a}))"),
                Angle::Half => write!(f, "atan({a})/2"),
                Angle::HalfPiMinus => write!(f, "(pi-atan({a}))/2"),
                Angle::PiMinusHalf => write!(f, "(pi-atan({a})/2)"),
                Angle::HalfPiPlus => write!(f, "(pi+atan({a}))/2"),
            },
            Form::Ratio(d, m) => write!(f, "{d}/{m}"),
            Form::SqrtOver(d, m) => write!(f, "sqrt({d})/{m}"),
            Form::PiTimes(m, d) => write!(f, "{m}*pi/{d}"),
        }
    }
}

/// Every candidate, in search order.
fn forms() -> impl Iterator<Item = Form> {
    let sq2 = 2f64.sqrt();
    let sq5 = 5f64.sqrt();
    let sq6 = 6f64.sqrt();
    let literals = [
        Form::Literal(1.0, "1"),
        Form::Literal(PI, "pi"),
        Form::Literal((sq6 + sq2) / 4.0, "(sqrt(6)+sqrt(2))/4"),
        Form::Literal((sq6 - sq2) / 4.0, "(sqrt(6)-sqrt(2))/4"),
        Form::Literal((sq5 + 1.0) / 2.0, "(sqrt(5)+1)/2"),
        Form::Literal((sq5 - 1.0) / 2.0, "(sqrt(5)-1)/2"),
        Form::Literal(((sq5 + 5.0) / 2.0).sqrt(), "sqrt((sqrt(5)+5)/2)"),
    ];
    let golden = Angle::PAIR.into_iter().flat_map(|k| {
        [Arg::GoldenPlus, Arg::GoldenMinus].map(move |a| Form::Angle(k, a))
    });
    let singles = (2..20u32).flat_map(|d| {
        let mut v = vec![
            Form::Int(d),
            Form::Recip(d),
            Form::Sqrt(d),
            Form::RecipSqrt(d),
            Form::PiOver(d),
        ];
        v.extend(Angle::PAIR.map(|k| Form::Angle(k, Arg::Int(d))));
        v.extend(Angle::ALL.map(|k| Form::Angle(k, Arg::Recip(d))));
        v.extend(Angle::PAIR.map(|k| Form::Angle(k, Arg::Sqrt(d))));
        v.extend(Angle::ALL.map(|k| Form::Angle(k, Arg::RecipSqrt(d))));
        v
    });
    let pairs = || {
        (2..20u32).flat_map(|d| (2..19u32).filter(move |&m| m != d).map(move |m| (d, m)))
    };
    let fractions =
        pairs().flat_map(|(d, m)| [Form::Ratio(d, m), Form::SqrtOver(d, m), Form::PiTimes(m, d)]);
    let arctans = pairs().flat_map(|(d, m)| {
        Angle::ALL
            .map(|k| Form::Angle(k, Arg::Ratio(m, d)))
            .into_iter()
            .chain(Angle::ALL.map(|k| Form::Angle(k, Arg::OverSqrt(m, d))))
    });
    literals
        .into_iter()
        .chain(golden)
        .chain(singles)
        .chain(fractions)
        .chain(arctans)
}

/// Closed-form name for `x`, or its decimal text when nothing is close.
///
/// ```
/// use nshape::names::named_number;
/// assert_eq!(named_number(-0.5), "-1/2");
/// assert_eq!(named_number(1.6180339887), "(sqrt(5)+1)/2");
/// ```
pub fn named_number(x: f64) -> String {
    if x.abs() < NAME_EPS {
        return "0".to_string();
    }
    let (sign, mag) = if x < 0.0 { ("-", -x) } else { ("", x) };
    match forms().find(|f| (mag - f.value()).abs() < NAME_EPS) {
        Some(form) => format!("{sign}{form}"),
        None => format!("{x}"),
    }
}

/// `named_number` for each coordinate.
pub fn named_point(p: impl AsRef<[f64]>) -> Vec<String> {
    p.as_ref().iter().map(|&x| named_number(x)).collect()
}
