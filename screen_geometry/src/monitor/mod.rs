//! Monitor module: screen-space helpers built on the camera and geometry
//! value types.
//!
//! - `is_target_on_screen`: visibility test with an unbounded far plane
//! - `is_object_with_tag_inside_volume`: tag-filtered plane-set containment
//! - `classify_screen_side` / `target_side`: which screen edge a target lies beyond
//! - `aspect_ratio_angle`: angle of the screen diagonal
//!
//! All functions are pure; the only shared state touched is the logger.

mod scene_object;
mod screen_side;
mod visibility;

pub use scene_object::SceneObject;
pub use screen_side::{
    Side, aspect_ratio_angle, bearing_angle, classify_screen_side, target_side,
};
pub use visibility::{
    is_object_with_tag_inside_volume, is_target_on_screen, visible_region,
};

use crate::error::Error;

/// Log a rejected-input error before handing it back to the caller.
fn log_and_return_error(source: &str, error: Error) -> Error {
    crate::screen_error!(source, "{}", error);
    error
}
