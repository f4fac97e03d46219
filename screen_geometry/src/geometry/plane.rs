/// Plane: half-space boundary used by every containment test.
///
/// Stored as a unit normal and a signed offset so that
/// `normal · p + distance = 0` for every point `p` on the plane.
/// The normal points toward the inside: a point is inside when its
/// signed distance is >= 0.

use glam::{Vec3, Vec4};
use super::aabb::AABB;

/// Half-space boundary (unit normal + signed offset).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// Unit normal, pointing toward the inside half-space
    pub normal: Vec3,
    /// Signed offset along the normal
    pub distance: f32,
}

impl Plane {
    /// Create a plane from a normal and offset as given (no normalization).
    pub const fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Create a plane with the given inside-facing normal passing through `point`.
    ///
    /// The normal is normalized. A zero normal yields a plane every point
    /// lies on, which never rejects anything.
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Self {
        let normal = normal.normalize_or_zero();
        Self {
            normal,
            distance: -normal.dot(point),
        }
    }

    /// Create a plane from (A, B, C, D) coefficients, normalizing so that
    /// (A, B, C) has unit length.
    pub fn from_coefficients(coefficients: Vec4) -> Self {
        let normal = coefficients.truncate();
        let normal_len = normal.length();
        if normal_len > 0.0 {
            Self::new(normal / normal_len, coefficients.w / normal_len)
        } else {
            Self::new(normal, coefficients.w)
        }
    }

    /// Signed distance from the plane to `point` (positive on the inside).
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    /// True if `point` lies on the inside half-space or on the plane itself.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.signed_distance(point) >= 0.0
    }

    /// True unless the whole box lies strictly on the outside.
    ///
    /// Only the box's positive vertex (the corner furthest along the
    /// normal) needs testing: if it is outside, every corner is.
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        self.contains_point(aabb.positive_vertex(self.normal))
    }
}

#[cfg(test)]
#[path = "plane_tests.rs"]
mod tests;
