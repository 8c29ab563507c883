//! 2D base profiles for sweeping.
//!
//! A contour is a polyline whose segments may carry a bulge: the tangent of a
//! quarter of the arc's included angle, positive for a counter-clockwise arc.
//! A bulge of 1 is a semicircle, so a closed two-vertex contour with bulge 1
//! on both segments is a full circle.

use brix_math::Point2;

use crate::deviation::DeviationParams;

/// One profile vertex plus the bulge of the segment leaving it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileVertex {
    pub point: Point2,
    pub bulge: f64,
}

/// A single profile contour.
#[derive(Debug, Clone, Default)]
pub struct Contour2D {
    vertices: Vec<ProfileVertex>,
    closed: bool,
}

impl Contour2D {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_vertex(&mut self, point: Point2, bulge: f64) {
        self.vertices.push(ProfileVertex { point, bulge });
    }

    pub fn set_closed(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &[ProfileVertex] {
        &self.vertices
    }

    /// Signed area of a closed contour: shoelace over the vertices plus the
    /// circular-segment contribution of every bulged segment. Positive means
    /// counter-clockwise.
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        if !self.closed || n < 2 {
            return 0.0;
        }

        let mut area = 0.0;
        for i in 0..n {
            let a = self.vertices[i].point;
            let b = self.vertices[(i + 1) % n].point;
            area += a.x * b.y - b.x * a.y;
        }
        area *= 0.5;

        for i in 0..n {
            let bulge = self.vertices[i].bulge;
            if bulge == 0.0 {
                continue;
            }
            let a = self.vertices[i].point;
            let b = self.vertices[(i + 1) % n].point;
            let chord = (b - a).length();
            if chord == 0.0 {
                continue;
            }
            let theta = 4.0 * bulge.abs().atan();
            let radius = chord * (1.0 + bulge * bulge) / (4.0 * bulge.abs());
            let segment = radius * radius * 0.5 * (theta - theta.sin());
            area += segment.copysign(bulge);
        }

        area
    }

    pub fn is_ccw(&self) -> bool {
        self.signed_area() >= 0.0
    }

    /// Reverse the traversal direction, renumbering and negating bulges.
    pub fn reverse(&mut self) {
        let n = self.vertices.len();
        if n < 2 {
            return;
        }
        let old = self.vertices.clone();
        for j in 0..n {
            let point = old[n - 1 - j].point;
            let bulge = if self.closed {
                -old[(2 * n - 2 - j) % n].bulge
            } else if j < n - 1 {
                -old[n - 2 - j].bulge
            } else {
                0.0
            };
            self.vertices[j] = ProfileVertex { point, bulge };
        }
    }

    /// Make a closed contour counter-clockwise (an outer boundary).
    pub fn make_ccw(&mut self) {
        if self.closed && self.signed_area() < 0.0 {
            self.reverse();
        }
    }

    /// Expand the contour into a polyline, subdividing bulged segments into
    /// arc points per the deviation parameters. For a closed contour the
    /// result is the open ring (the closing point is not repeated).
    pub fn tessellate(&self, params: &DeviationParams) -> Vec<Point2> {
        let n = self.vertices.len();
        let mut points = Vec::new();
        if n == 0 {
            return points;
        }

        let segment_count = if self.closed { n } else { n - 1 };
        for i in 0..n {
            points.push(self.vertices[i].point);
            if i < segment_count {
                let next = self.vertices[(i + 1) % n].point;
                arc_points(self.vertices[i].point, next, self.vertices[i].bulge, params, &mut points);
            }
        }
        points
    }
}

/// Interior points of the arc from `a` to `b` with the given bulge.
fn arc_points(a: Point2, b: Point2, bulge: f64, params: &DeviationParams, out: &mut Vec<Point2>) {
    if bulge == 0.0 {
        return;
    }
    let chord = b - a;
    let chord_len = chord.length();
    if chord_len == 0.0 {
        return;
    }

    let theta = 4.0 * bulge.atan(); // signed sweep, positive CCW
    let radius = chord_len * (1.0 + bulge * bulge) / (4.0 * bulge.abs());
    let sagitta = bulge.abs() * chord_len * 0.5;

    // A CCW arc keeps its center left of the chord direction, CW right
    let mid = (a + b) * 0.5;
    let left = Point2::new(-chord.y, chord.x) / chord_len;
    let center = mid + left * (radius - sagitta) * bulge.signum();

    let start = (a - center).to_angle();
    let segments = params.segments_for_arc(radius, theta);
    for k in 1..segments {
        let angle = start + theta * (k as f64) / (segments as f64);
        out.push(center + Point2::new(angle.cos(), angle.sin()) * radius);
    }
}

/// A base profile: one outer contour, possibly followed by inner ones.
#[derive(Debug, Clone, Default)]
pub struct Profile2D {
    contours: Vec<Contour2D>,
}

impl Profile2D {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, contour: Contour2D) {
        self.contours.push(contour);
    }

    pub fn outer(&self) -> Option<&Contour2D> {
        self.contours.first()
    }

    pub fn contours(&self) -> &[Contour2D] {
        &self.contours
    }

    /// The profile of a full circle: two vertices on a diameter, each segment
    /// a semicircular arc, counter-clockwise.
    pub fn circle(center: Point2, direction: Point2, radius: f64) -> Self {
        let mut contour = Contour2D::new();
        contour.append_vertex(center - direction * radius, 1.0);
        contour.append_vertex(center + direction * radius, 1.0);
        contour.set_closed();
        contour.make_ccw();

        let mut profile = Profile2D::new();
        profile.push(contour);
        profile
    }
}
