/// SceneObject: the caller's view of a target: tag, pivot, and world bounds.
///
/// The pivot is the object's transform origin. It need not coincide with the
/// center of its bounds (a character's pivot usually sits at its feet).

use glam::{Mat4, Vec3};
use crate::geometry::AABB;

#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    tag: String,
    position: Vec3,
    bounds: AABB,
}

impl SceneObject {
    /// Create an object from its tag, world pivot, and world bounds.
    pub fn new(tag: impl Into<String>, position: Vec3, bounds: AABB) -> Self {
        Self {
            tag: tag.into(),
            position,
            bounds,
        }
    }

    /// Create an object whose pivot is the center of its bounds.
    pub fn from_bounds(tag: impl Into<String>, bounds: AABB) -> Self {
        Self::new(tag, bounds.center(), bounds)
    }

    /// Create an object from a world transform and mesh-local bounds.
    ///
    /// The pivot is the transform's translation and the world bounds
    /// enclose the transformed local box.
    pub fn from_local(tag: impl Into<String>, world_matrix: &Mat4, local_bounds: &AABB) -> Self {
        Self::new(
            tag,
            world_matrix.col(3).truncate(),
            local_bounds.transformed(world_matrix),
        )
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// True if the object carries exactly this tag.
    pub fn compare_tag(&self, tag: &str) -> bool {
        self.tag == tag
    }

    /// World-space pivot.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// World-space bounds.
    pub fn bounds(&self) -> &AABB {
        &self.bounds
    }

    /// Move pivot and bounds together.
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
        self.bounds.min += offset;
        self.bounds.max += offset;
    }
}

#[cfg(test)]
#[path = "scene_object_tests.rs"]
mod tests;
