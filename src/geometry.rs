//! Scalar 2-D helpers for contour line integrals

use crate::Point;

/// Euclidean distance between two points.
pub fn distance(a: &Point, b: &Point) -> f64 {
    (b - a).norm()
}

/// Area of the triangle formed by three points, via Heron's formula on the
/// pairwise distances. Collinear points give zero area.
pub fn triangle_area(a: &Point, b: &Point, c: &Point) -> f64 {
    let ab = distance(a, b);
    let bc = distance(b, c);
    let ca = distance(c, a);
    let p = (ab + bc + ca) / 2.0;
    // The radicand can underflow slightly negative for near-collinear points.
    (p * (p - ab) * (p - bc) * (p - ca)).max(0.0).sqrt()
}

/// `point` expressed relative to `origin`.
pub fn relative_to(point: &Point, origin: &Point) -> Point {
    Point::new(point.x - origin.x, point.y - origin.y)
}

/// Angle in degrees between the X-axis and the radius vector from the origin
/// to `point`, normalized into [0, 360).
///
/// An angle that still rounds negative at two decimals gets 360 added;
/// values like -0.001 deg stay near zero instead of jumping to 360, so a
/// sweep across the positive X-axis does not read as a full turn.
pub fn polar_angle_deg(point: &Point) -> f64 {
    let angle = point.y.atan2(point.x).to_degrees();

    if (angle * 100.0).round() / 100.0 < 0.0 {
        angle + 360.0
    } else {
        angle
    }
}

/// Direction of the angular sweep from `from` to `to`, both taken as radius
/// vectors from the origin: +1.0 counter-clockwise, -1.0 clockwise, 0.0 if
/// the polar angle is unchanged.
pub fn sweep_sign(from: &Point, to: &Point) -> f64 {
    let diff = polar_angle_deg(to) - polar_angle_deg(from);
    if diff > 0.0 {
        1.0
    } else if diff < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_distance_symmetric() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert_abs_diff_eq!(distance(&a, &b), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(distance(&a, &b), distance(&b, &a), epsilon = 1e-15);
    }

    #[test]
    fn test_distance_zero_at_identical_points() {
        let a = Point::new(-3.5, 7.25);
        assert_eq!(distance(&a, &a), 0.0);
    }

    #[test]
    fn test_triangle_area_right_triangle() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, 0.0);
        let c = Point::new(0.0, 3.0);
        assert_abs_diff_eq!(triangle_area(&a, &b, &c), 6.0, epsilon = 1e-10);
    }

    #[test]
    fn test_triangle_area_collinear_is_zero() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let c = Point::new(3.0, 0.0);
        assert_eq!(triangle_area(&a, &b, &c), 0.0);
    }

    #[test]
    fn test_triangle_area_near_collinear_stays_small() {
        // Heron's formula cancels catastrophically on diagonal collinear
        // points; the result is tiny but not exactly zero.
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 1.0);
        let c = Point::new(3.0, 3.0);
        assert_abs_diff_eq!(triangle_area(&a, &b, &c), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_polar_angle_quadrants() {
        assert_abs_diff_eq!(polar_angle_deg(&Point::new(1.0, 0.0)), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(polar_angle_deg(&Point::new(0.0, 1.0)), 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(polar_angle_deg(&Point::new(-1.0, 0.0)), 180.0, epsilon = 1e-12);
        // Negative angles wrap into [0, 360)
        assert_abs_diff_eq!(polar_angle_deg(&Point::new(0.0, -1.0)), 270.0, epsilon = 1e-12);
        assert_abs_diff_eq!(polar_angle_deg(&Point::new(1.0, -1.0)), 315.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sweep_sign() {
        let east = Point::new(1.0, 0.0);
        let north = Point::new(0.0, 1.0);
        assert_eq!(sweep_sign(&east, &north), 1.0);
        assert_eq!(sweep_sign(&north, &east), -1.0);
        assert_eq!(sweep_sign(&north, &north), 0.0);
    }
}
