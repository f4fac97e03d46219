/// Screen-side classification for off-screen indicators.
///
/// The circle around the screen center is split by the two screen
/// diagonals into four sectors. A bearing angle (direction to the target,
/// measured counter-clockwise from the camera right axis) falls into
/// exactly one of them.

use glam::Vec3;
use crate::camera::{CameraDescriptor, ScreenSize};
use crate::error::Result;
use super::log_and_return_error;

const SOURCE: &str = "screen::side";

/// Screen edge a target lies beyond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// No sector matched (NaN input)
    #[default]
    None,
    Right,
    Down,
    Left,
    Up,
}

/// Angle in degrees between the screen x-axis and its diagonal.
///
/// 1920x1080 gives ~29.36°, a square screen 45°.
pub fn aspect_ratio_angle(screen: &ScreenSize) -> f32 {
    screen.height.atan2(screen.width).to_degrees()
}

/// Map a bearing angle to a screen side.
///
/// `world_angle` is the bearing in degrees, normally in [0, 360).
/// `ui_angle` is the diagonal angle from [`aspect_ratio_angle`]. Sectors
/// are checked in the order Right, Up, Left, Down; each includes its lower
/// bound and excludes its upper bound:
///
/// - Right: `[360 - ui, 360)` and `[0, ui)`
/// - Up: `[ui, 180 - ui)`
/// - Left: `[180 - ui, 180 + ui)`
/// - Down: `[180 + ui, 360 - ui)`
pub fn classify_screen_side(world_angle: f32, ui_angle: f32) -> Side {
    if world_angle >= 360.0 - ui_angle || world_angle < ui_angle {
        Side::Right
    } else if world_angle >= ui_angle && world_angle < 180.0 - ui_angle {
        Side::Up
    } else if world_angle >= 180.0 - ui_angle && world_angle < 180.0 + ui_angle {
        Side::Left
    } else if world_angle >= 180.0 + ui_angle && world_angle < 360.0 - ui_angle {
        Side::Down
    } else {
        Side::None
    }
}

/// Bearing of `point` as seen from the camera, in degrees in [0, 360).
///
/// The camera-to-point direction is projected onto the camera's right/up
/// plane and measured counter-clockwise from the right axis, so 90° is
/// straight up on screen. A point on the forward axis (or behind it) has
/// no in-plane component and yields 0.
pub fn bearing_angle(camera: &CameraDescriptor, point: Vec3) -> f32 {
    let direction = point - camera.position();
    let x = direction.dot(camera.right());
    let y = direction.dot(camera.up());
    if x == 0.0 && y == 0.0 {
        return 0.0;
    }

    let angle = y.atan2(x).to_degrees().rem_euclid(360.0);
    // rem_euclid rounds tiny negative angles up to exactly 360
    if angle >= 360.0 { 0.0 } else { angle }
}

/// Screen side of `point` for `camera`, using the camera's screen diagonal
/// as the sector boundary.
///
/// # Errors
///
/// Returns `Error::InvalidInput` if the camera fails
/// [`CameraDescriptor::validate`].
pub fn target_side(camera: &CameraDescriptor, point: Vec3) -> Result<Side> {
    camera.validate().map_err(|e| log_and_return_error(SOURCE, e))?;

    let world_angle = bearing_angle(camera, point);
    let ui_angle = aspect_ratio_angle(&camera.screen());
    let side = classify_screen_side(world_angle, ui_angle);

    crate::screen_trace!(
        SOURCE,
        "Bearing {:.2}° against diagonal {:.2}° -> {:?}",
        world_angle,
        ui_angle,
        side
    );

    Ok(side)
}

#[cfg(test)]
#[path = "screen_side_tests.rs"]
mod tests;
