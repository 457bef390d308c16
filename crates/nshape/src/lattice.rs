//! Face lattices of the n-cube, n-simplex and n-cross-polytope.
//!
//! Purpose
//! - Enumerate the m-dimensional parts (points, lines, faces, ...) of each
//!   polytope family and which m-part contains which (m-1)-part.
//! - Emit the containment graph as Graphviz `graph` text, one rank per m.
//!
//! Conventions
//! - Parts are bitmasks over the n axes (cube, cross polytope) or the n+1
//!   vertices (simplex), so `n` must stay below 64.
//! - Cube parts: `mask` marks the fixed coordinates, `value` their ±½ choice
//!   (bit set means +). Cross-polytope parts: `mask` marks the axes spanned,
//!   `value` the sign per axis; the full polytope is the single part `(0, 0)`.
//!
//! Counts of m-parts in dimension n
//! - cube: 2^(n-m) · C(n, m); simplex: C(n+1, m+1);
//!   cross polytope: 2^(m+1) · C(n, m+1) for m < n, 1 for m = n.

use std::io;

/// One part of a lattice; simplex parts leave `value` at 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Part {
    pub mask: u64,
    pub value: u64,
}

impl Part {
    const fn new(mask: u64, value: u64) -> Self {
        Self { mask, value }
    }
}

/// `point`, `line`, `face`, `shape`, then `_m_`.
pub fn item_name(m: usize) -> String {
    match m {
        0 => "point".into(),
        1 => "line".into(),
        2 => "face".into(),
        3 => "shape".into(),
        _ => format!("_{m}_"),
    }
}

pub trait FaceLattice {
    /// Graph name in the dot output.
    fn name(&self) -> &'static str;
    fn dim(&self) -> usize;
    fn parts(&self, m: usize) -> Vec<Part>;
    fn part_name(&self, m: usize, part: Part) -> String;
    /// Whether the m-part `part` contains the (m-1)-part `sub`.
    fn contains(&self, part: Part, sub: Part) -> bool;

    /// The (m-1)-parts of `part`.
    fn facets(&self, m: usize, part: Part) -> Vec<Part> {
        if m == 0 {
            return Vec::new();
        }
        self.parts(m - 1)
            .into_iter()
            .filter(|&sub| self.contains(part, sub))
            .collect()
    }

    fn write_dot(&self, w: &mut dyn io::Write) -> io::Result<()> {
        let n = self.dim();
        writeln!(w, "graph {} {{", self.name())?;
        writeln!(w, "{{ node[shape=plaintext];")?;
        let ranks: Vec<String> = (0..=n).map(|m| item_name(m) + "s").collect();
        writeln!(w, "{};", ranks.join("--"))?;
        writeln!(w, "}}")?;
        writeln!(w, "node[shape=box];")?;

        for (m, rank) in ranks.iter().enumerate() {
            writeln!(w, "{{ rank=same; {rank};")?;
            for part in self.parts(m) {
                write!(w, "{};", self.part_name(m, part))?;
            }
            writeln!(w, "}}")?;
        }

        for m in 1..=n {
            for part in self.parts(m) {
                let deps: Vec<String> = self
                    .facets(m, part)
                    .into_iter()
                    .map(|sub| self.part_name(m - 1, sub))
                    .collect();
                writeln!(w, "{} -- {{ {} }};", self.part_name(m, part), deps.join(" "))?;
            }
        }
        writeln!(w, "}}")
    }
}

/// k-subsets of `0..n` in lexicographic order; `k == 0` yields one empty set.
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    fn rec(n: usize, k: usize, start: usize, cur: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if cur.len() == k {
            out.push(cur.clone());
            return;
        }
        for i in start..n {
            cur.push(i);
            rec(n, k, i + 1, cur, out);
            cur.pop();
        }
    }
    let mut out = Vec::new();
    if k <= n {
        rec(n, k, 0, &mut Vec::with_capacity(k), &mut out);
    }
    out
}

/// Deposit the low bits of `i` into the set bits of `mask`, lowest first.
fn spread(mut i: u64, mask: u64) -> u64 {
    let mut value = 0;
    for j in 0..64 {
        if mask & (1 << j) != 0 {
            if i & 1 != 0 {
                value |= 1 << j;
            }
            i >>= 1;
        }
    }
    value
}

fn bits(set: &[usize]) -> u64 {
    set.iter().fold(0, |acc, &x| acc | 1 << x)
}

#[derive(Clone, Copy, Debug)]
pub struct CubeLattice {
    pub n: usize,
}

impl FaceLattice for CubeLattice {
    fn name(&self) -> &'static str {
        "Cube"
    }

    fn dim(&self) -> usize {
        self.n
    }

    fn parts(&self, m: usize) -> Vec<Part> {
        let all = (1u64 << self.n) - 1;
        let mut out = Vec::new();
        for free in combinations(self.n, m) {
            let mask = bits(&free) ^ all;
            for i in 0..1u64 << (self.n - m) {
                out.push(Part::new(mask, spread(i, mask)));
            }
        }
        out
    }

    /// Fixed coordinates as `0`/`1`, free ones as `x`, highest axis first.
    fn part_name(&self, m: usize, part: Part) -> String {
        let suffix: String = (0..self.n)
            .rev()
            .map(|i| match (part.mask >> i & 1, part.value >> i & 1) {
                (0, _) => 'x',
                (_, 0) => '0',
                _ => '1',
            })
            .collect();
        item_name(m) + &suffix
    }

    fn contains(&self, part: Part, sub: Part) -> bool {
        sub.mask & part.mask == part.mask && sub.value & part.mask == part.value
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SimplexLattice {
    pub n: usize,
}

/// `A-Z`, `a-z`, `0-9`, then `?`.
fn vertex_letter(x: usize) -> char {
    const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    LETTERS.get(x).map_or('?', |&b| b as char)
}

impl FaceLattice for SimplexLattice {
    fn name(&self) -> &'static str {
        "Simplex"
    }

    fn dim(&self) -> usize {
        self.n
    }

    fn parts(&self, m: usize) -> Vec<Part> {
        combinations(self.n + 1, m + 1)
            .iter()
            .map(|vs| Part::new(bits(vs), 0))
            .collect()
    }

    fn part_name(&self, m: usize, part: Part) -> String {
        let suffix: String = (0..=self.n)
            .filter(|&i| part.mask & (1 << i) != 0)
            .map(vertex_letter)
            .collect();
        item_name(m) + &suffix
    }

    fn contains(&self, part: Part, sub: Part) -> bool {
        part.mask & sub.mask == sub.mask
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CrossLattice {
    pub n: usize,
}

impl FaceLattice for CrossLattice {
    fn name(&self) -> &'static str {
        "CrossPolytope"
    }

    fn dim(&self) -> usize {
        self.n
    }

    fn parts(&self, m: usize) -> Vec<Part> {
        if m == self.n {
            return vec![Part::new(0, 0)];
        }
        let mut out = Vec::new();
        for axes in combinations(self.n, m + 1) {
            let mask = bits(&axes);
            for i in 0..1u64 << (m + 1) {
                out.push(Part::new(mask, spread(i, mask)));
            }
        }
        out
    }

    /// Uppercase letter for a positive axis, lowercase for a negative one.
    fn part_name(&self, m: usize, part: Part) -> String {
        let suffix: String = (0..self.n)
            .filter(|&i| part.mask & (1 << i) != 0)
            .map(|i| match (i < 26, part.value & (1 << i) != 0) {
                (false, _) => '?',
                (true, true) => (b'A' + i as u8) as char,
                (true, false) => (b'a' + i as u8) as char,
            })
            .collect();
        item_name(m) + &suffix
    }

    fn contains(&self, part: Part, sub: Part) -> bool {
        (part.mask == 0 && part.value == 0)
            || (sub.mask & part.mask == sub.mask && part.value & sub.mask == sub.value)
    }
}
