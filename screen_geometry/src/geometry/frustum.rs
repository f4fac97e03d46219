/// Frustum: six bounding planes of a camera's view region.
///
/// Planes are stored in a fixed order (left, right, bottom, top, near, far)
/// with inward-pointing normals. A point P is inside if
/// `plane.signed_distance(P) >= 0` for all planes.
///
/// Used both for the standard perspective frustum and for the manually
/// assembled orthographic volume, where the far slot is replaced by the
/// infinite-far substitute before testing.

use glam::{Mat4, Vec3, Vec4};
use super::aabb::AABB;
use super::plane::Plane;

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Six planes bounding a view region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Wrap six planes already in left, right, bottom, top, near, far order.
    pub fn new(planes: [Plane; 6]) -> Self {
        Self { planes }
    }

    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Uses the Gribb & Hartmann method and expects an OpenGL-style clip
    /// space (depth in [-1, 1], e.g. `Mat4::perspective_rh_gl`). Works for
    /// both perspective and orthographic projections.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let m = vp.to_cols_array_2d();

        // Each plane is a sum or difference of rows of the VP matrix
        let row = |r: usize| Vec4::new(m[0][r], m[1][r], m[2][r], m[3][r]);
        let (r0, r1, r2, r3) = (row(0), row(1), row(2), row(3));

        Self {
            planes: [
                Plane::from_coefficients(r3 + r0), // Left
                Plane::from_coefficients(r3 - r0), // Right
                Plane::from_coefficients(r3 + r1), // Bottom
                Plane::from_coefficients(r3 - r1), // Top
                Plane::from_coefficients(r3 + r2), // Near
                Plane::from_coefficients(r3 - r2), // Far
            ],
        }
    }

    /// Replace the far plane with one that faces the camera and passes
    /// through `reference`.
    ///
    /// Any box containing `reference` then always passes the far test,
    /// which disables far-distance culling for that target.
    pub fn with_unbounded_far(mut self, forward: Vec3, reference: Vec3) -> Self {
        self.planes[PLANE_FAR] = Plane::from_normal_and_point(-forward, reference);
        self
    }

    /// Test if an AABB intersects this frustum.
    ///
    /// Returns `true` if the AABB is (potentially) inside or intersecting.
    /// May return false positives (conservative), never false negatives.
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        planes_intersect_aabb(&self.planes, aabb)
    }

    /// Index of the first plane that fully rejects `aabb`, if any.
    pub fn rejecting_plane(&self, aabb: &AABB) -> Option<usize> {
        self.planes.iter().position(|plane| !plane.intersects_aabb(aabb))
    }
}

/// Test an AABB against an arbitrary set of planes.
///
/// The box is rejected as soon as its positive vertex is outside any plane.
/// An empty plane set accepts everything.
pub fn planes_intersect_aabb(planes: &[Plane], aabb: &AABB) -> bool {
    planes.iter().all(|plane| plane.intersects_aabb(aabb))
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
