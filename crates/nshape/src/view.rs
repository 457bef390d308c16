//! Headless viewer: widget state, cameras, and SVG output.
//!
//! Purpose
//! - Project 3-D shapes onto a screen parallelogram, either through a
//!   viewpoint (perspective) or along the screen normal (orthogonal).
//! - Keep the slider/toggle state of an interactive viewer without any
//!   windowing, so the same parameters can drive a static render.
//!
//! Conventions
//! - Screen coordinates are the parallelogram parameters `(a, b)`; the SVG
//!   maps them to pixels as `(100 + 50 a, 400 - 50 b)` on a 640×480 canvas.
//! - Segments whose endpoints have no unique projection are skipped and
//!   logged at debug level; so are projections beyond `CLIP` in either axis.

use crate::cfg::{SLIDER_GRAB_RADIUS, TOGGLE_RADIUS};
use crate::error::{check_dim, GeomError, Result};
use crate::line::Line;
use crate::plane::Parallelogram;
use crate::point::Point;
use crate::polar::from_n_spherical;
use crate::shapes::{Shape, ShapeKind};

/// Projected parameters beyond this magnitude are not drawn.
const CLIP: f64 = 1e5;

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

/// A value in `line`'s parameter space, picked by dragging along it.
#[derive(Clone, Debug, PartialEq)]
pub struct Slider {
    pub line: Line,
    pub cur: f64,
}

impl Slider {
    pub fn new(p1: impl Into<Point>, p2: impl Into<Point>) -> Result<Self> {
        Ok(Self {
            line: Line::new(p1, p2)?,
            cur: 0.5,
        })
    }

    /// Position of the knob.
    pub fn current(&self) -> Point {
        self.line.point_for_params(self.cur)
    }

    /// Whether a press at `pt` grabs the knob.
    pub fn grabs(&self, pt: &Point) -> bool {
        self.current().distance(pt) < SLIDER_GRAB_RADIUS
    }

    /// Move the knob to `pt`; returns false (and keeps the value) when the
    /// parameter of `pt` is undefined.
    pub fn update(&mut self, pt: &Point) -> bool {
        match self.line.params_for_point(pt) {
            Some(a) => {
                self.cur = a;
                true
            }
            None => false,
        }
    }
}

/// On/off button centred on a 2-D point.
#[derive(Clone, Debug, PartialEq)]
pub struct Toggle {
    pub pt: Point,
    pub state: bool,
}

impl Toggle {
    pub fn new(pt: impl Into<Point>) -> Result<Self> {
        let pt = pt.into();
        check_dim(2, pt.dim())?;
        Ok(Self { pt, state: false })
    }

    pub fn contains(&self, pt: &Point) -> bool {
        self.pt.distance(pt) < TOGGLE_RADIUS
    }

    /// `[x, y, width, height]` of the drawn box.
    pub fn rect(&self) -> [f64; 4] {
        [self.pt[0] - 7.5, self.pt[1] - 7.5, 15.0, 15.0]
    }

    pub fn flip(&mut self) {
        self.state = !self.state;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Projection {
    #[default]
    Perspective,
    Orthogonal,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub viewpoint: Point,
    pub screen: Parallelogram,
    pub projection: Projection,
}

impl Camera {
    pub fn new(viewpoint: Point, screen: Parallelogram, projection: Projection) -> Result<Self> {
        check_dim(3, viewpoint.dim())?;
        check_dim(3, screen.dim())?;
        Ok(Self {
            viewpoint,
            screen,
            projection,
        })
    }

    /// Viewpoint at `5(1 + distance)` along `(inclination, azimuth)`; the
    /// screen sits at `screen_fraction` of the way out, facing the origin.
    ///
    /// The screen spans `(-y, x, 0)` and `(0, -z, y)`, which collapse when the
    /// viewpoint has `y = 0` (inclination 0 or azimuth ±π/2); such viewpoints
    /// are rejected with `SingularSystem`.
    pub fn orbit(distance: f64, screen_fraction: f64, inclination: f64, azimuth: f64) -> Result<Self> {
        let vp = from_n_spherical(5.0 * (1.0 + distance), &[inclination, azimuth])?;
        let (x, y, z) = (vp[0], vp[1], vp[2]);
        let v1 = Point::from([-y, x, 0.0]);
        let v2 = Point::from([0.0, -z, y]);
        let screen = Parallelogram::from_point_and_vectors(&(&vp * screen_fraction), &v1, &v2)?;
        if screen.is_degenerate() {
            tracing::debug!(inclination, azimuth, "orbit screen collapses");
            return Err(GeomError::SingularSystem { op: "orbit camera screen" });
        }
        Self::new(vp, screen, Projection::Perspective)
    }

    /// Viewpoint on the main diagonal at `5(1 + distance)`; the screen is
    /// centred at `4(1 + screen_offset)` on the same diagonal.
    pub fn diagonal(distance: f64, screen_offset: f64) -> Result<Self> {
        let vp = Point::splat(3, 5.0 * (1.0 + distance));
        let center = Point::splat(3, 4.0 * (1.0 + screen_offset));
        let screen = Parallelogram::from_point_and_vectors(
            &center,
            &Point::from([-1.0, -1.0, 1.0]),
            &Point::from([1.0, -1.0, -1.0]),
        )?;
        Self::new(vp, screen, Projection::Perspective)
    }

    pub fn with_projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    /// Screen parameters of `pt` as a 2-D point, `None` without a unique answer.
    pub fn project(&self, pt: &Point) -> Result<Option<Point>> {
        let hit = match self.projection {
            Projection::Perspective => self
                .screen
                .intersection_params(&Line::new(pt.clone(), self.viewpoint.clone())?)?,
            Projection::Orthogonal => self.screen.projection_params(pt)?,
        };
        Ok(hit.params().map(|(a, b)| Point::from([a, b])))
    }

    /// Projected edges of `shape`.
    pub fn project_shape(&self, shape: &Shape) -> Result<Vec<(Point, Point)>> {
        let mut out = Vec::with_capacity(shape.edges.len());
        for (p, q) in shape.segments() {
            match (self.project(p)?, self.project(q)?) {
                (Some(a), Some(b)) => out.push((a, b)),
                _ => tracing::debug!(shape = shape.label, %p, %q, "edge has no unique projection"),
            }
        }
        Ok(out)
    }
}

/// Meridians then parallels of a sphere, each a closed polyline
/// (first point repeated at the end), every `step_deg` degrees.
pub fn sphere_wireframe(origin: &Point, radius: f64, step_deg: usize) -> Result<Vec<Vec<Point>>> {
    check_dim(3, origin.dim())?;
    let step = step_deg.max(1);
    let rad = |deg: usize| (deg as f64).to_radians();
    let ring = |angles: &dyn Fn(usize) -> [f64; 2]| -> Result<Vec<Point>> {
        let mut pts = (0..360)
            .step_by(step)
            .map(|rho| Ok(origin + &from_n_spherical(radius, &angles(rho))?))
            .collect::<Result<Vec<_>>>()?;
        if let Some(first) = pts.first().cloned() {
            pts.push(first);
        }
        Ok(pts)
    };
    let mut lines = Vec::new();
    for phi in (0..180).step_by(step) {
        lines.push(ring(&|rho| [rad(rho), rad(phi)])?);
    }
    for phi in (0..180).step_by(step) {
        lines.push(ring(&|rho| [rad(phi), rad(rho)])?);
    }
    Ok(lines)
}

/// Closed polyline as a shape with consecutive edges.
fn polyline(label: &'static str, points: Vec<Point>) -> Shape {
    let edges = (1..points.len()).map(|i| (i - 1, i)).collect();
    Shape {
        label,
        points,
        edges,
    }
}

/// A projected segment in screen parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub from: Point,
    pub to: Point,
    pub color: &'static str,
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub items: Vec<(Shape, &'static str)>,
}

impl Scene {
    /// Axes plus the five 3-D solids stacked along z (icosahedron off to y).
    pub fn demo() -> Result<Self> {
        let solid = |kind, at: [f64; 3]| Shape::new(kind, &Point::from(at));
        Ok(Self {
            items: vec![
                (Shape::axes(3, 10.0), "gray"),
                (solid(ShapeKind::Cube, [0.0, 0.0, 1.0])?, "red"),
                (solid(ShapeKind::Simplex, [0.0, 0.0, 3.0])?, "green"),
                (solid(ShapeKind::CrossPolytope, [0.0, 0.0, 5.0])?, "blue"),
                (solid(ShapeKind::Dodecahedron, [0.0, 0.0, 8.0])?, "cyan"),
                (solid(ShapeKind::Icosahedron, [0.0, 4.0, 0.0])?, "cyan"),
            ],
        })
    }

    pub fn add(&mut self, shape: Shape, color: &'static str) {
        self.items.push((shape, color));
    }

    pub fn add_sphere(&mut self, origin: &Point, radius: f64, color: &'static str) -> Result<()> {
        for ring in sphere_wireframe(origin, radius, 15)? {
            self.add(polyline("sphere", ring), color);
        }
        Ok(())
    }

    pub fn render(&self, camera: &Camera) -> Result<Vec<Stroke>> {
        let mut out = Vec::new();
        for (shape, color) in &self.items {
            for (from, to) in camera.project_shape(shape)? {
                if from.iter().chain(to.iter()).any(|v| v.abs() >= CLIP) {
                    tracing::debug!(shape = shape.label, %from, %to, "stroke clipped");
                    continue;
                }
                out.push(Stroke { from, to, color });
            }
        }
        Ok(out)
    }

    pub fn to_svg(&self, camera: &Camera) -> Result<String> {
        Ok(svg(&self.render(camera)?))
    }
}

fn pixel(p: &Point) -> (f64, f64) {
    (100.0 + p[0] * 50.0, 400.0 - p[1] * 50.0)
}

/// SVG document with one `<line>` per stroke.
pub fn svg(strokes: &[Stroke]) -> String {
    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{WIDTH}\" height=\"{HEIGHT}\" viewBox=\"0 0 {WIDTH} {HEIGHT}\">\n"
    );
    out.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");
    for s in strokes {
        let ((x1, y1), (x2, y2)) = (pixel(&s.from), pixel(&s.to));
        out.push_str(&format!(
            "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
            s.color
        ));
    }
    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point;
    use std::f64::consts::FRAC_PI_2;

    fn close(p: &Point, expected: [f64; 2]) -> bool {
        p.distance(&Point::from(expected)) < 1e-9
    }

    #[test]
    fn slider_follows_the_pointer() {
        let mut s = Slider::new(point![100, 10], point![200, 10]).unwrap();
        assert_eq!(s.current(), [150.0, 10.0]);
        assert!(s.grabs(&point![151, 12]));
        assert!(!s.grabs(&point![160, 10]));
        assert!(s.update(&point![175, 40]));
        assert_eq!(s.cur, 0.75);
        assert_eq!(s.current(), [175.0, 10.0]);
    }

    #[test]
    fn slider_ignores_undefined_parameters() {
        let mut s = Slider::new(point![3, 3], point![3, 3]).unwrap();
        assert!(!s.update(&point![10, 10]));
        assert_eq!(s.cur, 0.5);
    }

    #[test]
    fn toggle_hit_box() {
        let mut t = Toggle::new(point![100, 100]).unwrap();
        assert!(t.contains(&point![105, 105]));
        assert!(!t.contains(&point![106, 106]));
        assert_eq!(t.rect(), [92.5, 92.5, 15.0, 15.0]);
        t.flip();
        assert!(t.state);
        assert!(Toggle::new(point![1, 2, 3]).is_err());
    }

    #[test]
    fn diagonal_camera_projects_origin_to_centre() {
        let cam = Camera::diagonal(0.0, 0.0).unwrap();
        let p = cam.project(&Point::zeros(3)).unwrap().unwrap();
        assert!(close(&p, [0.5, 0.5]), "{p}");
    }

    #[test]
    fn orthogonal_projection_follows_the_normal() {
        let cam = Camera::diagonal(0.0, 0.0)
            .unwrap()
            .with_projection(Projection::Orthogonal);
        // foot of the normal through the origin is (4, 0, 4)
        let p = cam.project(&Point::zeros(3)).unwrap().unwrap();
        assert!(close(&p, [2.5, 2.5]), "{p}");
    }

    #[test]
    fn unprojectable_points() {
        let cam = Camera::diagonal(0.0, 0.0).unwrap();
        // the viewpoint itself
        assert_eq!(cam.project(&point![5, 5, 5]).unwrap(), None);
        // sight line parallel to the screen
        assert_eq!(cam.project(&point![6, 5, 4]).unwrap(), None);
        assert!(cam.project(&point![1, 2]).is_err());
    }

    #[test]
    fn orbit_camera_looks_at_origin() {
        let cam = Camera::orbit(0.0, 0.5, FRAC_PI_2, 0.0).unwrap();
        assert!(cam.viewpoint.distance(&point![0, 5, 0]) < 1e-12);
        let p = cam.project(&Point::zeros(3)).unwrap().unwrap();
        assert!(close(&p, [0.5, 0.5]), "{p}");
    }

    #[test]
    fn orbit_rejects_collapsed_screens() {
        let err = GeomError::SingularSystem { op: "orbit camera screen" };
        assert_eq!(Camera::orbit(0.5, 0.5, 0.0, 1.0).err(), Some(err.clone()));
        assert_eq!(Camera::orbit(0.5, 0.5, 1.0, FRAC_PI_2).err(), Some(err));
        let cam = Camera::orbit(0.5, 0.5, FRAC_PI_2, 0.3).unwrap();
        assert!(!cam.screen.is_degenerate());
    }

    #[test]
    fn projected_shape_keeps_every_cube_edge() {
        let cam = Camera::diagonal(0.0, 0.0).unwrap();
        let cube = Shape::new(ShapeKind::Cube, &point![0, 0, 1]).unwrap();
        let segs = cam.project_shape(&cube).unwrap();
        assert_eq!(segs.len(), 12);
        assert!(segs.iter().all(|(a, b)| a.dim() == 2 && b.dim() == 2));
    }

    #[test]
    fn sphere_rings_are_closed_and_on_the_sphere() {
        let origin = point![4, 0, 0];
        let rings = sphere_wireframe(&origin, 2.0, 15).unwrap();
        assert_eq!(rings.len(), 24);
        for ring in &rings {
            assert_eq!(ring.len(), 25);
            assert_eq!(ring.first(), ring.last());
            for p in ring {
                assert!((p.distance(&origin) - 2.0).abs() < 1e-12);
            }
        }
        assert!(sphere_wireframe(&point![0, 0], 1.0, 15).is_err());
    }

    #[test]
    fn demo_scene_renders_to_svg() {
        let scene = Scene::demo().unwrap();
        assert_eq!(scene.items.len(), 6);
        let cam = Camera::diagonal(0.0, 0.0).unwrap();
        let strokes = scene.render(&cam).unwrap();
        assert_eq!(strokes.iter().filter(|s| s.color == "red").count(), 12);
        // the x and z axes end on sight lines parallel to the screen
        assert_eq!(strokes.iter().filter(|s| s.color == "gray").count(), 1);

        let text = svg(&strokes);
        assert!(text.starts_with("<svg"));
        assert!(text.ends_with("</svg>\n"));
        assert_eq!(text.matches("<line").count(), strokes.len());
        assert_eq!(text.lines().count(), strokes.len() + 3);
        assert!(text.contains(r#"stroke="red" stroke-width="1"/>"#));
        assert_eq!(scene.to_svg(&cam).unwrap(), text);
    }

    #[test]
    fn spheres_join_the_scene() {
        let mut scene = Scene::default();
        scene.add_sphere(&point![4, 0, 0], 2.0, "black").unwrap();
        assert_eq!(scene.items.len(), 24);
        assert!(scene.items.iter().all(|(s, _)| s.edges.len() == 24));
    }
}
