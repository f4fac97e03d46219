/// Visibility tests against plane sets.
///
/// `is_target_on_screen` answers "is the target in front of the camera and
/// within the screen edges", like a regular frustum test except that the far
/// clip distance is treated as infinite. It works with both orthographic and
/// perspective projections.

use glam::Vec3;
use crate::camera::CameraDescriptor;
use crate::error::{Error, Result};
use crate::geometry::{
    planes_intersect_aabb, Frustum, Plane,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR,
};
use super::log_and_return_error;
use super::scene_object::SceneObject;

const SOURCE: &str = "screen::visibility";

const PLANE_NAMES: [&str; 6] = ["left", "right", "bottom", "top", "near", "far"];

/// Test whether `object` carries `tag` and its bounds lie (at least
/// partially) inside the volume bounded by `volume_sides`.
///
/// The planes' normals must point into the volume. Any number of planes is
/// accepted; an empty set accepts every object with the right tag.
pub fn is_object_with_tag_inside_volume(
    object: &SceneObject,
    volume_sides: &[Plane],
    tag: &str,
) -> bool {
    if !object.compare_tag(tag) {
        return false;
    }
    planes_intersect_aabb(volume_sides, object.bounds())
}

/// Test whether `target` is in front of the camera and within the screen
/// edges, with no far-distance limit.
///
/// # Errors
///
/// Returns `Error::InvalidInput` if the camera fails
/// [`CameraDescriptor::validate`] or the target's pivot or bounds are not
/// finite.
pub fn is_target_on_screen(camera: &CameraDescriptor, target: &SceneObject) -> Result<bool> {
    camera.validate().map_err(|e| log_and_return_error(SOURCE, e))?;

    let bounds = target.bounds();
    if !(target.position().is_finite() && bounds.min.is_finite() && bounds.max.is_finite()) {
        return Err(log_and_return_error(
            SOURCE,
            Error::InvalidInput(format!("target '{}' has a non-finite transform", target.tag())),
        ));
    }

    let region = visible_region(camera, target.position());
    match region.rejecting_plane(bounds) {
        Some(index) => {
            crate::screen_trace!(
                SOURCE,
                "Target '{}' rejected by the {} plane",
                target.tag(),
                PLANE_NAMES[index]
            );
            Ok(false)
        }
        None => Ok(true),
    }
}

/// Six planes of the camera's visible region with the far plane replaced by
/// one facing the camera through `far_reference`.
///
/// Perspective cameras use their standard side and near planes; the camera's
/// own far clip is never read, so it may be infinite. Orthographic cameras get
/// side and near planes built from the screen corners unprojected at the
/// near-clip depth. In both cases `PLANE_FAR` has normal `-forward` and
/// passes through `far_reference`, so a box containing that point is never
/// rejected by it.
///
/// The camera is assumed valid; see [`CameraDescriptor::validate`].
pub fn visible_region(camera: &CameraDescriptor, far_reference: Vec3) -> Frustum {
    let frustum = if camera.is_orthographic() {
        crate::screen_trace!(SOURCE, "Building orthographic side planes");
        orthographic_region(camera)
    } else {
        // Slot 5 is replaced below, so the extraction far clip only has to
        // keep the projection finite
        camera.frustum_to(camera.near_clip() * 2.0)
    };

    frustum.with_unbounded_far(camera.forward(), far_reference)
}

/// Left, right, bottom, top, and near planes of an orthographic camera.
///
/// The far slot holds a zero plane that accepts everything until it is
/// overwritten.
fn orthographic_region(camera: &CameraDescriptor) -> Frustum {
    let screen = camera.screen();
    let near_clip = camera.near_clip();

    let bottom_left = camera.screen_to_world_point(Vec3::new(0.0, 0.0, near_clip));
    let bottom_right = camera.screen_to_world_point(Vec3::new(screen.width, 0.0, near_clip));
    let top_left = camera.screen_to_world_point(Vec3::new(0.0, screen.height, near_clip));

    let right = camera.right();
    let up = camera.up();

    let mut planes = [Plane::new(Vec3::ZERO, 0.0); 6];
    planes[PLANE_LEFT] = Plane::from_normal_and_point(right, bottom_left);
    planes[PLANE_RIGHT] = Plane::from_normal_and_point(-right, bottom_right);
    planes[PLANE_BOTTOM] = Plane::from_normal_and_point(up, bottom_left);
    planes[PLANE_TOP] = Plane::from_normal_and_point(-up, top_left);
    planes[PLANE_NEAR] = Plane::from_normal_and_point(camera.forward(), bottom_left);

    Frustum::new(planes)
}

#[cfg(test)]
#[path = "visibility_tests.rs"]
mod tests;
