use crate::math::Vector2;
use std::f64::consts::TAU;

/// An ordered list of vertices forming a closed polygon.
///
/// Vertex order is the winding order; the geometry routines assume a
/// counter-clockwise winding so that [`Polygon::area`] is positive. There is
/// an edge between each pair of consecutive vertices and one between the last
/// vertex and the first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    /// The vertices of the polygon, in winding order
    vertices: Vec<Vector2>,
}

impl Polygon {
    /// Creates a polygon from a list of vertices (counter-clockwise)
    pub fn new(vertices: Vec<Vector2>) -> Self {
        Self { vertices }
    }

    /// Creates an axis-aligned rectangle centred on `center`
    pub fn rectangle(center: Vector2, width: f64, height: f64) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        Self::new(vec![
            Vector2::new(center.x + hw, center.y + hh),
            Vector2::new(center.x - hw, center.y + hh),
            Vector2::new(center.x - hw, center.y - hh),
            Vector2::new(center.x + hw, center.y - hh),
        ])
    }

    /// Creates a regular polygon with `sides` vertices on a circle of `radius`.
    ///
    /// With enough sides this is the circle approximation used for balls,
    /// pellets and planets.
    pub fn regular(center: Vector2, radius: f64, sides: usize) -> Self {
        let vertices = (0..sides)
            .map(|i| {
                let theta = TAU * i as f64 / sides as f64;
                center + Vector2::new(radius * theta.cos(), radius * theta.sin())
            })
            .collect();
        Self::new(vertices)
    }

    /// Creates a star with `points` tips, alternating between the outer and
    /// inner radius. Stars are not convex, so they are only suitable for the
    /// geometry routines, not for collision detection.
    pub fn star(center: Vector2, outer_radius: f64, inner_radius: f64, points: usize) -> Self {
        let count = points * 2;
        let vertices = (0..count)
            .map(|i| {
                let theta = TAU * i as f64 / count as f64;
                let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
                center + Vector2::new(radius * theta.cos(), radius * theta.sin())
            })
            .collect();
        Self::new(vertices)
    }

    /// Returns the vertices of the polygon
    pub fn vertices(&self) -> &[Vector2] {
        &self.vertices
    }

    /// Returns an iterator over the vertices
    pub fn iter(&self) -> std::slice::Iter<'_, Vector2> {
        self.vertices.iter()
    }

    /// Returns an iterator over the edges as `(start, end)` pairs, wrapping
    /// from the last vertex back to the first
    pub fn edges(&self) -> impl Iterator<Item = (Vector2, Vector2)> + '_ {
        let len = self.vertices.len();
        (0..len).map(move |i| (self.vertices[i], self.vertices[(i + 1) % len]))
    }

    /// Returns the number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns whether the polygon has no vertices
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Consumes the polygon and returns its vertices
    pub fn into_vertices(self) -> Vec<Vector2> {
        self.vertices
    }

    /// Computes the signed area using the shoelace formula.
    ///
    /// Positive for counter-clockwise winding, negative for clockwise.
    pub fn area(&self) -> f64 {
        let origin = self.reference_vertex();
        self.edges()
            .map(|(a, b)| (a - origin).cross(&(b - origin)))
            .sum::<f64>()
            / 2.0
    }

    /// Computes the centroid of the polygon.
    ///
    /// A polygon with zero area has no centroid; the result is then
    /// non-finite. Use [`Polygon::vertex_mean`] when a finite reference point
    /// is needed regardless of the shape.
    pub fn centroid(&self) -> Vector2 {
        let origin = self.reference_vertex();
        let mut x = 0.0;
        let mut y = 0.0;
        for (a, b) in self.edges() {
            let (a, b) = (a - origin, b - origin);
            let cross = a.cross(&b);
            x += (a.x + b.x) * cross;
            y += (a.y + b.y) * cross;
        }

        let scale = 1.0 / (6.0 * self.area());
        origin + Vector2::new(x * scale, y * scale)
    }

    /// Local origin for the area sums, keeping small shapes far from the
    /// world origin accurate
    fn reference_vertex(&self) -> Vector2 {
        self.vertices.first().copied().unwrap_or_default()
    }

    /// Returns true if the polygon encloses no area relative to its size.
    ///
    /// The tolerance scales with the squared extent of the vertices, so tiny
    /// but well-formed shapes are not degenerate.
    pub fn is_degenerate(&self) -> bool {
        if self.vertices.len() < 3 {
            return true;
        }

        let mean = self.vertex_mean();
        let extent_squared = self
            .vertices
            .iter()
            .map(|vertex| vertex.distance_squared(&mean))
            .fold(0.0, f64::max);

        self.area().abs() <= f64::EPSILON * extent_squared || !self.centroid().is_finite()
    }

    /// Returns the arithmetic mean of the vertices
    pub fn vertex_mean(&self) -> Vector2 {
        if self.vertices.is_empty() {
            return Vector2::zero();
        }
        self.vertices.iter().copied().sum::<Vector2>() / self.vertices.len() as f64
    }

    /// Returns true if the vertices wind counter-clockwise
    pub fn is_counter_clockwise(&self) -> bool {
        self.area() > 0.0
    }

    /// Translates every vertex by `delta`
    pub fn translate(&mut self, delta: Vector2) {
        for vertex in &mut self.vertices {
            *vertex += delta;
        }
    }

    /// Rotates every vertex by `angle` radians about `pivot`
    pub fn rotate(&mut self, angle: f64, pivot: Vector2) {
        for vertex in &mut self.vertices {
            *vertex = (*vertex - pivot).rotate(angle) + pivot;
        }
    }
}

impl From<Vec<Vector2>> for Polygon {
    fn from(vertices: Vec<Vector2>) -> Self {
        Self::new(vertices)
    }
}

impl FromIterator<Vector2> for Polygon {
    fn from_iter<I: IntoIterator<Item = Vector2>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Vector2;
    type IntoIter = std::slice::Iter<'a, Vector2>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}
