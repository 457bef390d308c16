use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use nshape::lattice::{CrossLattice, CubeLattice, FaceLattice, SimplexLattice};
use nshape::names::{named_number, named_point};
use nshape::polar::n_spherical_formula;
use nshape::view::{Camera, Projection, Scene};
use nshape::{Point, Shape, ShapeKind};
use serde::Serialize;
use serde_json::json;
use std::f64::consts::FRAC_PI_2;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "nshape")]
#[command(about = "Regular polytopes, face lattices and projections in n dimensions")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print vertices with named coordinates and n-spherical form
    Shapes {
        /// All shapes in 2..=4 dimensions when omitted
        #[arg(long, value_enum)]
        shape: Option<ShapeArg>,
        /// Defaults to the shape's own dimension, or 3
        #[arg(long)]
        dim: Option<usize>,
        /// Write the vertex table (.csv or .parquet)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Face lattice as a Graphviz graph
    Graph {
        #[arg(long, value_enum)]
        shape: LatticeArg,
        #[arg(long, default_value_t = 3)]
        dim: usize,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Render the demo scene to SVG
    Render {
        #[arg(long)]
        out: PathBuf,
        /// Project along the screen normal instead of through the viewpoint
        #[arg(long)]
        orthogonal: bool,
        /// Viewpoint distance slider, 0..1
        #[arg(long, default_value_t = 0.5)]
        distance: f64,
        /// Screen distance slider, 0..1
        #[arg(long, default_value_t = 0.5)]
        screen: f64,
        /// Orbit the viewpoint at this inclination (radians, default pi/2)
        #[arg(long, allow_negative_numbers = true)]
        inclination: Option<f64>,
        /// Orbit azimuth (radians); implies the orbit camera
        #[arg(long, allow_negative_numbers = true)]
        azimuth: Option<f64>,
        /// Add a wireframe sphere of radius 2 at (4, 0, 0)
        #[arg(long)]
        sphere: bool,
    },
    /// Closed-form name for a number
    Name {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Symbolic n-spherical to Cartesian formulas
    Formula {
        #[arg(long, default_value_t = 2)]
        angles: usize,
        /// Leave out the radius factor
        #[arg(long)]
        unit_radius: bool,
    },
    /// Print version, git rev and shape counts as JSON
    Report,
}

#[derive(Clone, Copy, ValueEnum)]
enum ShapeArg {
    Simplex,
    Cube,
    Cross,
    Dodecahedron,
    Icosahedron,
    Cell24,
    Cell120,
    Cell600,
}

impl From<ShapeArg> for ShapeKind {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::Simplex => ShapeKind::Simplex,
            ShapeArg::Cube => ShapeKind::Cube,
            ShapeArg::Cross => ShapeKind::CrossPolytope,
            ShapeArg::Dodecahedron => ShapeKind::Dodecahedron,
            ShapeArg::Icosahedron => ShapeKind::Icosahedron,
            ShapeArg::Cell24 => ShapeKind::Cell24,
            ShapeArg::Cell120 => ShapeKind::Cell120,
            ShapeArg::Cell600 => ShapeKind::Cell600,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum LatticeArg {
    Cube,
    Simplex,
    Cross,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Shapes { shape, dim, out } => shapes(shape.map(ShapeKind::from), dim, out),
        Action::Graph { shape, dim, out } => graph(shape, dim, out),
        Action::Render {
            out,
            orthogonal,
            distance,
            screen,
            inclination,
            azimuth,
            sphere,
        } => {
            let projection = if orthogonal {
                Projection::Orthogonal
            } else {
                Projection::Perspective
            };
            let camera = match (inclination, azimuth) {
                (None, None) => Camera::diagonal(distance, screen)?,
                (i, a) => Camera::orbit(
                    distance,
                    screen,
                    i.unwrap_or(FRAC_PI_2),
                    a.unwrap_or(0.0),
                )?,
            };
            render(camera.with_projection(projection), sphere, &out)
        }
        Action::Name { value } => {
            println!("{}", named_number(value));
            Ok(())
        }
        Action::Formula {
            angles,
            unit_radius,
        } => {
            for (i, expr) in n_spherical_formula(unit_radius, angles).iter().enumerate() {
                println!("x{i} = {expr}");
            }
            Ok(())
        }
        Action::Report => report(),
    }
}

fn shapes(kind: Option<ShapeKind>, dim: Option<usize>, out: Option<PathBuf>) -> Result<()> {
    let Some(kind) = kind else {
        if out.is_some() {
            bail!("--out needs --shape");
        }
        for (kind, dim) in natural_dims() {
            dump(&Shape::new(kind, &Point::zeros(dim))?)?;
        }
        return Ok(());
    };
    let dim = dim.or(kind.fixed_dim()).unwrap_or(3);
    let shape = Shape::new(kind, &Point::zeros(dim))?;
    tracing::info!(
        shape = kind.name(),
        dim,
        points = shape.points.len(),
        edges = shape.edges.len(),
        "shapes"
    );
    let rows = dump(&shape)?;
    if let Some(out) = out {
        let mut df = table::vertex_frame(&rows, dim)?;
        table::write_frame(&mut df, &out)?;
        write_sidecar(
            &out,
            Payload::new("shapes", json!({ "shape": kind.name(), "dim": dim })),
        )?;
        tracing::info!(out = %out.display(), rows = df.height(), "vertex table written");
    }
    Ok(())
}

/// Each shape kind in the dimensions it is interesting in.
fn natural_dims() -> Vec<(ShapeKind, usize)> {
    ShapeKind::ALL
        .iter()
        .flat_map(|&kind| match kind.fixed_dim() {
            Some(d) => vec![(kind, d)],
            None => (2..=4).map(|d| (kind, d)).collect(),
        })
        .collect()
}

fn dump(shape: &Shape) -> Result<Vec<table::VertexRow>> {
    let rows = table::vertex_rows(shape)?;
    let center = shape.centroid().context("shape has no points")?;
    println!(
        "{} in {}-d, center = {:?}",
        shape.label,
        shape.dim(),
        named_point(&center)
    );
    for row in &rows {
        println!("{:<40} -- {:<40}", row.named(), row.named_polar());
    }
    Ok(rows)
}

fn graph(shape: LatticeArg, dim: usize, out: Option<PathBuf>) -> Result<()> {
    if !(1..64).contains(&dim) {
        bail!("dimension must be in 1..64, got {dim}");
    }
    let lattice: Box<dyn FaceLattice> = match shape {
        LatticeArg::Cube => Box::new(CubeLattice { n: dim }),
        LatticeArg::Simplex => Box::new(SimplexLattice { n: dim }),
        LatticeArg::Cross => Box::new(CrossLattice { n: dim }),
    };
    tracing::info!(lattice = lattice.name(), dim, "graph");
    match out {
        Some(out) => {
            create_parent(&out)?;
            let mut file =
                fs::File::create(&out).with_context(|| format!("creating {}", out.display()))?;
            lattice.write_dot(&mut file)?;
            write_sidecar(
                &out,
                Payload::new("graph", json!({ "lattice": lattice.name(), "dim": dim })),
            )?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            lattice.write_dot(&mut lock)?;
            lock.flush()?;
        }
    }
    Ok(())
}

fn render(camera: Camera, sphere: bool, out: &Path) -> Result<()> {
    let mut scene = Scene::demo()?;
    if sphere {
        scene.add_sphere(&Point::from([4.0, 0.0, 0.0]), 2.0, "black")?;
    }
    let strokes = scene.render(&camera)?;
    tracing::info!(
        items = scene.items.len(),
        strokes = strokes.len(),
        projection = ?camera.projection,
        "render"
    );
    create_parent(out)?;
    fs::write(out, nshape::view::svg(&strokes))
        .with_context(|| format!("writing {}", out.display()))?;
    write_sidecar(
        out,
        Payload::new(
            "render",
            json!({
                "viewpoint": camera.viewpoint.as_slice(),
                "projection": format!("{:?}", camera.projection),
                "sphere": sphere,
                "strokes": strokes.len(),
            }),
        ),
    )?;
    Ok(())
}

#[derive(Serialize)]
struct ShapeSummary {
    shape: &'static str,
    dim: usize,
    points: usize,
    edges: usize,
    edge_length: f64,
}

fn report() -> Result<()> {
    let shapes = natural_dims()
        .into_iter()
        .map(|(kind, dim)| {
            let s = Shape::new(kind, &Point::zeros(dim))?;
            Ok(ShapeSummary {
                shape: kind.name(),
                dim,
                points: s.points.len(),
                edges: s.edges.len(),
                edge_length: kind.edge_length(),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "nshape_version": nshape::VERSION,
        "shapes": shapes,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
