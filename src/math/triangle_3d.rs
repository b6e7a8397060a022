use super::{Point3, Vector3, TOLERANCE};

/// Unnormalized face normal of the triangle `(a, b, c)`.
///
/// Computed as `(b - a) × (c - a)`, so its direction follows the winding
/// order and its length is twice the triangle's area.
#[must_use]
pub fn face_normal(a: &Point3, b: &Point3, c: &Point3) -> Vector3 {
    (b - a).cross(&(c - a))
}

/// Arithmetic midpoint of the segment `a`–`b`.
#[must_use]
pub fn midpoint(a: &Point3, b: &Point3) -> Point3 {
    nalgebra::center(a, b)
}

/// Returns `true` if any two of the three points coincide within [`TOLERANCE`].
#[must_use]
pub fn has_coincident_points(a: &Point3, b: &Point3, c: &Point3) -> bool {
    (b - a).norm() < TOLERANCE || (c - b).norm() < TOLERANCE || (a - c).norm() < TOLERANCE
}

/// Returns `true` if every coordinate of the point is finite.
#[must_use]
pub fn is_finite(p: &Point3) -> bool {
    p.coords.iter().all(|c| c.is_finite())
}
