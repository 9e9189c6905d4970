use planar_physics::math::{self, Vector2};
use planar_physics::shapes::Polygon;
use planar_physics::collision::interval_overlap;
use std::f64::consts::{FRAC_PI_2, PI};
use approx::assert_relative_eq;

#[test]
fn test_vector2_operations() {
    let v1 = Vector2::new(1.0, 2.0);
    let v2 = Vector2::new(3.0, 4.0);

    // Addition
    let sum = v1 + v2;
    assert_eq!(sum.x, 4.0);
    assert_eq!(sum.y, 6.0);

    // Subtraction
    let diff = v2 - v1;
    assert_eq!(diff.x, 2.0);
    assert_eq!(diff.y, 2.0);

    // Scalar multiplication, both sides
    assert_eq!(v1 * 2.0, Vector2::new(2.0, 4.0));
    assert_eq!(2.0 * v1, Vector2::new(2.0, 4.0));
    assert_eq!(v2 / 2.0, Vector2::new(1.5, 2.0));
    assert_eq!(-v1, Vector2::new(-1.0, -2.0));

    // Dot and cross products
    assert_eq!(v1.dot(&v2), 11.0);
    assert_eq!(v1.cross(&v2), 1.0 * 4.0 - 3.0 * 2.0);
    assert_eq!(Vector2::unit_x().cross(&Vector2::unit_y()), 1.0);
    assert_eq!(Vector2::unit_y().cross(&Vector2::unit_x()), -1.0);

    // Length
    assert_relative_eq!(v2.length(), 5.0);
    assert_relative_eq!(v2.length_squared(), 25.0);
    assert_relative_eq!(v1.distance(&v2), 8.0f64.sqrt());

    // Normalize
    let normalized = v2.normalize();
    assert_relative_eq!(normalized.length(), 1.0);
    assert_relative_eq!(normalized, Vector2::new(0.6, 0.8));
    assert_eq!(Vector2::zero().normalize(), Vector2::zero());
}

#[test]
fn test_vector2_assign_ops() {
    let mut v = Vector2::new(1.0, 1.0);
    v += Vector2::new(2.0, 3.0);
    assert_eq!(v, Vector2::new(3.0, 4.0));
    v -= Vector2::new(1.0, 1.0);
    assert_eq!(v, Vector2::new(2.0, 3.0));
    v *= 2.0;
    assert_eq!(v, Vector2::new(4.0, 6.0));
    v /= 4.0;
    assert_eq!(v, Vector2::new(1.0, 1.5));

    let total: Vector2 = [Vector2::unit_x(), Vector2::unit_y(), Vector2::new(1.0, 1.0)]
        .into_iter()
        .sum();
    assert_eq!(total, Vector2::new(2.0, 2.0));
}

#[test]
fn test_vector2_rotation() {
    let rotated = Vector2::unit_x().rotate(FRAC_PI_2);
    assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(rotated.y, 1.0, epsilon = 1e-12);

    let v = Vector2::new(3.0, -2.0);
    let half_turn = v.rotate(PI);
    assert_relative_eq!(half_turn, -v, epsilon = 1e-12);

    // Rotation preserves length
    assert_relative_eq!(v.rotate(1.234).length(), v.length(), epsilon = 1e-12);

    // Rotating forward then back is the identity
    assert_relative_eq!(v.rotate(0.7).rotate(-0.7), v, epsilon = 1e-12);

    assert_eq!(Vector2::new(1.0, 2.0).perpendicular(), Vector2::new(-2.0, 1.0));
    assert_relative_eq!(Vector2::unit_y().angle(), FRAC_PI_2);
}

#[test]
fn test_vector2_conversions() {
    let v = Vector2::from([1.0, -1.0]);
    assert_eq!(v, Vector2::from((1.0, -1.0)));

    let array: [f64; 2] = v.into();
    assert_eq!(array, [1.0, -1.0]);

    let na_vector = v.to_nalgebra();
    assert_eq!(Vector2::from_nalgebra(&na_vector), v);

    assert_eq!(Vector2::new(0.0, 0.0).lerp(&Vector2::new(2.0, 4.0), 0.25), Vector2::new(0.5, 1.0));
    assert!(!Vector2::new(f64::NAN, 0.0).is_finite());
    assert!(Vector2::new(1e-12, 0.0).is_zero());
}

#[test]
fn test_math_helpers() {
    assert!(math::approx_eq(0.1 + 0.2, 0.3));
    assert!(math::approx_zero(1e-12));
    assert!(!math::approx_zero(1e-3));
    assert_relative_eq!(math::to_radians(180.0), PI);
    assert_relative_eq!(math::to_degrees(FRAC_PI_2), 90.0);
}

#[test]
fn test_rectangle_geometry() {
    let rect = Polygon::rectangle(Vector2::new(2.0, -1.0), 4.0, 2.0);
    assert_eq!(rect.len(), 4);
    assert!(rect.is_counter_clockwise());

    assert_relative_eq!(rect.area(), 8.0);
    assert_relative_eq!(rect.centroid(), Vector2::new(2.0, -1.0), epsilon = 1e-12);
    assert_relative_eq!(rect.vertex_mean(), Vector2::new(2.0, -1.0), epsilon = 1e-12);

    // Edges wrap around to the first vertex
    let edges: Vec<_> = rect.edges().collect();
    assert_eq!(edges.len(), 4);
    assert_eq!(edges[3].1, rect.vertices()[0]);
}

#[test]
fn test_triangle_centroid() {
    let triangle = Polygon::new(vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(3.0, 0.0),
        Vector2::new(0.0, 3.0),
    ]);

    assert_relative_eq!(triangle.area(), 4.5);
    assert_relative_eq!(triangle.centroid(), Vector2::new(1.0, 1.0), epsilon = 1e-12);
}

#[test]
fn test_clockwise_area_is_negative() {
    let ccw = Polygon::rectangle(Vector2::zero(), 2.0, 2.0);
    let cw: Polygon = ccw.vertices().iter().rev().copied().collect();

    assert_relative_eq!(cw.area(), -ccw.area());
    assert!(!cw.is_counter_clockwise());

    // The centroid does not depend on winding
    assert_relative_eq!(cw.centroid(), ccw.centroid(), epsilon = 1e-12);
}

#[test]
fn test_degenerate_polygon_has_no_centroid() {
    let collinear = Polygon::new(vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(2.0, 0.0),
    ]);

    assert_relative_eq!(collinear.area(), 0.0);
    assert!(!collinear.centroid().is_finite());
    assert_relative_eq!(collinear.vertex_mean(), Vector2::new(1.0, 0.0));
}

#[test]
fn test_degeneracy_scales_with_size() {
    assert!(!Polygon::rectangle(Vector2::zero(), 2.0, 2.0).is_degenerate());
    assert!(!Polygon::rectangle(Vector2::new(1.0, 1.0), 1e-6, 1e-6).is_degenerate());
    assert!(!Polygon::rectangle(Vector2::zero(), 1e6, 1e6).is_degenerate());

    let collinear = Polygon::new(vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(1e-6, 1e-6),
        Vector2::new(2e-6, 2e-6),
    ]);
    assert!(collinear.is_degenerate());
    assert!(Polygon::new(vec![Vector2::zero(), Vector2::unit_x()]).is_degenerate());
    assert!(Polygon::default().is_degenerate());
}

#[test]
fn test_regular_polygon_and_star() {
    let square = Polygon::regular(Vector2::zero(), 1.0, 4);
    assert_eq!(square.len(), 4);
    assert_relative_eq!(square.area(), 2.0, epsilon = 1e-12);

    // A many-sided regular polygon approaches the circle
    let circle = Polygon::regular(Vector2::new(5.0, 5.0), 2.0, 64);
    assert_relative_eq!(circle.area(), PI * 4.0, epsilon = 0.05);
    assert_relative_eq!(circle.centroid(), Vector2::new(5.0, 5.0), epsilon = 1e-9);

    let star = Polygon::star(Vector2::zero(), 2.0, 1.0, 5);
    assert_eq!(star.len(), 10);
    assert!(star.is_counter_clockwise());
    assert_relative_eq!(star.centroid(), Vector2::zero(), epsilon = 1e-9);
}

#[test]
fn test_polygon_transforms() {
    let mut rect = Polygon::rectangle(Vector2::zero(), 2.0, 2.0);
    rect.translate(Vector2::new(3.0, 4.0));
    assert_relative_eq!(rect.centroid(), Vector2::new(3.0, 4.0), epsilon = 1e-12);

    // Rotating about the centroid keeps the centroid and the area
    let area = rect.area();
    rect.rotate(0.3, Vector2::new(3.0, 4.0));
    assert_relative_eq!(rect.centroid(), Vector2::new(3.0, 4.0), epsilon = 1e-12);
    assert_relative_eq!(rect.area(), area, epsilon = 1e-12);

    // A quarter turn of a square maps its vertex set onto itself
    let mut square = Polygon::rectangle(Vector2::zero(), 2.0, 2.0);
    square.rotate(FRAC_PI_2, Vector2::zero());
    assert_relative_eq!(square.vertices()[0], Vector2::new(-1.0, 1.0), epsilon = 1e-12);
}

#[test]
fn test_interval_overlap() {
    assert_eq!(interval_overlap(0.0, 2.0, 1.0, 3.0), Some(1.0));
    assert_eq!(interval_overlap(1.0, 3.0, 0.0, 2.0), Some(1.0));
    assert_eq!(interval_overlap(0.0, 1.0, 2.0, 3.0), None);

    // Touching intervals overlap by exactly zero
    assert_eq!(interval_overlap(0.0, 1.0, 1.0, 2.0), Some(0.0));

    // Nested intervals overlap by the inner length
    assert_eq!(interval_overlap(0.0, 10.0, 2.0, 3.0), Some(1.0));

    // Reversed bounds are swapped
    assert_eq!(interval_overlap(2.0, 0.0, 3.0, 1.0), Some(1.0));
}
