//! Separating Axis Theorem for convex polygons.
//!
//! Two convex polygons are disjoint iff the projections of their vertices
//! onto some edge normal of either polygon do not overlap. When every edge
//! normal of both shapes shows an overlap, the normal with the smallest
//! overlap is the minimum translation axis and is reported as the collision
//! axis.

use crate::collision::CollisionInfo;
use crate::math::{Vector2, EPSILON};
use crate::shapes::Polygon;

/// Returns the outward unit normal of the edge `start -> end` of a
/// counter-clockwise polygon, or `None` for a zero-length edge.
pub fn edge_normal(start: Vector2, end: Vector2) -> Option<Vector2> {
    let edge = end - start;
    let length = edge.length();
    if length < EPSILON {
        return None;
    }
    // Rotating the edge by -90 degrees points away from the interior
    Some(Vector2::new(edge.y, -edge.x) / length)
}

/// Projects every vertex of `shape` onto `axis` and returns `(min, max)`
pub fn project(shape: &Polygon, axis: Vector2) -> (f64, f64) {
    shape.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), vertex| {
        let projection = vertex.dot(&axis);
        (min.min(projection), max.max(projection))
    })
}

/// Computes the overlap between the intervals `[min1, max1]` and `[min2, max2]`.
///
/// Bounds given in the wrong order are swapped first. Returns `None` when the
/// intervals are disjoint and `Some(0.0)` when they only touch. When one
/// interval nests inside the other the overlap is the inner interval's length.
pub fn interval_overlap(min1: f64, max1: f64, min2: f64, max2: f64) -> Option<f64> {
    let (min1, max1) = if min1 > max1 { (max1, min1) } else { (min1, max1) };
    let (min2, max2) = if min2 > max2 { (max2, min2) } else { (min2, max2) };

    let lower = min1.max(min2);
    let upper = max1.min(max2);
    if upper < lower {
        None
    } else {
        Some(upper - lower)
    }
}

/// Finds the edge normal of `reference` with the smallest positive overlap
/// between the two shapes' projections.
///
/// Returns `None` as soon as an axis separates the shapes (or they merely touch
/// along it). Otherwise returns `Some((overlap, axis))`; the axis is `None` when
/// `reference` has no usable edge.
fn min_overlap_axis(reference: &Polygon, other: &Polygon) -> Option<(f64, Option<Vector2>)> {
    let mut least_overlap = f64::INFINITY;
    let mut best_axis = None;

    for (start, end) in reference.edges() {
        let Some(axis) = edge_normal(start, end) else {
            continue;
        };

        let (min1, max1) = project(reference, axis);
        let (min2, max2) = project(other, axis);
        let overlap = interval_overlap(min1, max1, min2, max2)?;
        if overlap <= 0.0 {
            return None;
        }

        if overlap < least_overlap {
            least_overlap = overlap;
            best_axis = Some(axis);
        }
    }

    Some((least_overlap, best_axis))
}

/// Flips `axis` into the half-plane `x > 0` (or `+y` on the y axis), so that
/// both orientations of the same line compare equal.
fn canonical_line(axis: Vector2) -> Vector2 {
    if axis.x < 0.0 || (axis.x == 0.0 && axis.y < 0.0) {
        -axis
    } else {
        axis
    }
}

/// Computes the status of the collision between two convex polygons.
///
/// Both shapes are given as counter-clockwise vertex lists. When they collide
/// the returned axis is a unit vector pointing from `shape1` towards `shape2`,
/// so swapping the arguments flips the axis but never the `collided` flag.
///
/// The direction comes from the vertex means. When those coincide it is
/// taken from whichever shape reaches further along the axis; for two
/// shapes with identical projections the orientation is arbitrary.
pub fn find_collision(shape1: &Polygon, shape2: &Polygon) -> CollisionInfo {
    if shape1.len() < 3 || shape2.len() < 3 {
        return CollisionInfo::separated();
    }

    let Some((overlap1, axis1)) = min_overlap_axis(shape1, shape2) else {
        return CollisionInfo::separated();
    };
    let Some((overlap2, axis2)) = min_overlap_axis(shape2, shape1) else {
        return CollisionInfo::separated();
    };

    // Pick the line independently of argument order
    let axis = match (axis1, axis2) {
        (Some(a), Some(b)) => {
            if overlap1 < overlap2 {
                a
            } else if overlap2 < overlap1 {
                b
            } else {
                let (a, b) = (canonical_line(a), canonical_line(b));
                if (a.x, a.y) <= (b.x, b.y) {
                    a
                } else {
                    b
                }
            }
        }
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (None, None) => return CollisionInfo::separated(),
    };

    // Orient from the first shape towards the second
    let mut alignment = axis.dot(&(shape2.vertex_mean() - shape1.vertex_mean()));
    if alignment == 0.0 {
        let (min1, max1) = project(shape1, axis);
        let (min2, max2) = project(shape2, axis);
        alignment = if max2 != max1 { max2 - max1 } else { min2 - min1 };
    }

    if alignment < 0.0 {
        CollisionInfo::colliding(-axis)
    } else {
        CollisionInfo::colliding(axis)
    }
}
