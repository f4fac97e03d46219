//! Geometry module: planes, bounding boxes, and six-plane view volumes.
//!
//! Plain value types, constructed fresh per query and never cached.
//! Plane normals point toward the inside of the volume they bound.

mod aabb;
mod frustum;
mod plane;

pub use aabb::AABB;
pub use frustum::{
    Frustum, planes_intersect_aabb,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use plane::Plane;
